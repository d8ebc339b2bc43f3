//! Course catalog model and pure search/filter/sort transforms.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub instructor: String,
    pub duration_weeks: u8,
    pub price_usd: u32,
    pub students: u32,
    pub rating: f32,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Popularity,
    Rating,
    PriceLowHigh,
    PriceHighLow,
}

/// Catalog filter state. `category: None` means every category.
#[derive(Clone, Debug, Default)]
pub struct CatalogQuery {
    pub text: String,
    pub category: Option<String>,
    pub sort: SortKey,
}

impl CatalogQuery {
    fn matches(&self, course: &Course) -> bool {
        let needle = self.text.to_lowercase();
        let matches_text = needle.is_empty()
            || course.title.to_lowercase().contains(&needle)
            || course.description.to_lowercase().contains(&needle);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |cat| course.category == cat);
        matches_text && matches_category
    }
}

/// Filter and sort the catalog. Pure; ties keep catalog order.
pub fn search<'a>(courses: &'a [Course], query: &CatalogQuery) -> Vec<&'a Course> {
    let mut hits: Vec<&Course> = courses.iter().filter(|c| query.matches(c)).collect();
    match query.sort {
        SortKey::Popularity => hits.sort_by(|a, b| b.students.cmp(&a.students)),
        SortKey::Rating => hits.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::PriceLowHigh => hits.sort_by(|a, b| a.price_usd.cmp(&b.price_usd)),
        SortKey::PriceHighLow => hits.sort_by(|a, b| b.price_usd.cmp(&a.price_usd)),
    }
    hits
}

/// Distinct categories in catalog order.
pub fn categories(courses: &[Course]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for course in courses {
        if !out.contains(&course.category) {
            out.push(course.category.clone());
        }
    }
    out
}
