//! Style values: a finite property set with component-wise interpolation.
//!
//! A `Style` is a small sorted set of `(StyleProperty, f32)` entries. Blending
//! runs component-wise over the union of entries; a property present on only
//! one endpoint passes through unchanged (fail-soft, prefer the present side).

use serde::{Deserialize, Serialize};

/// Animatable properties the presentational layer consumes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    PaddingBlock,
    Blur,
}

impl StyleProperty {
    /// Stored-document key for this property.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::Scale => "scale",
            Self::PaddingBlock => "paddingBlock",
            Self::Blur => "blur",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "opacity" => Some(Self::Opacity),
            "translateX" => Some(Self::TranslateX),
            "translateY" => Some(Self::TranslateY),
            "scale" => Some(Self::Scale),
            "paddingBlock" => Some(Self::PaddingBlock),
            "blur" => Some(Self::Blur),
            _ => None,
        }
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Ordered property/value set. Entries are kept sorted by property so that
/// iteration and serialized output are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    entries: Vec<(StyleProperty, f32)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any existing entry for the property.
    pub fn with(mut self, prop: StyleProperty, value: f32) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: StyleProperty, value: f32) {
        match self.entries.binary_search_by_key(&prop, |(p, _)| *p) {
            Ok(i) => self.entries[i].1 = value,
            Err(i) => self.entries.insert(i, (prop, value)),
        }
    }

    pub fn get(&self, prop: StyleProperty) -> Option<f32> {
        self.entries
            .binary_search_by_key(&prop, |(p, _)| *p)
            .ok()
            .map(|i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entry values are finite.
    pub fn is_finite(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_finite())
    }

    /// Component-wise blend over the union of properties.
    pub fn lerp(a: &Style, b: &Style, t: f32) -> Style {
        let mut out = Style::new();
        for (prop, va) in a.iter() {
            match b.get(prop) {
                Some(vb) => out.set(prop, lerp_f32(va, vb, t)),
                None => out.set(prop, va),
            }
        }
        for (prop, vb) in b.iter() {
            if a.get(prop).is_none() {
                out.set(prop, vb);
            }
        }
        out
    }
}

impl FromIterator<(StyleProperty, f32)> for Style {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, f32)>>(iter: I) -> Self {
        let mut s = Style::new();
        for (p, v) in iter {
            s.set(p, v);
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_and_sorts() {
        let s = Style::new()
            .with(StyleProperty::TranslateY, 50.0)
            .with(StyleProperty::Opacity, 0.0)
            .with(StyleProperty::TranslateY, 30.0);
        let entries: Vec<_> = s.iter().collect();
        assert_eq!(
            entries,
            vec![
                (StyleProperty::Opacity, 0.0),
                (StyleProperty::TranslateY, 30.0)
            ]
        );
    }

    #[test]
    fn lerp_blends_union() {
        let a = Style::new()
            .with(StyleProperty::Opacity, 0.0)
            .with(StyleProperty::Scale, 0.9);
        let b = Style::new()
            .with(StyleProperty::Opacity, 1.0)
            .with(StyleProperty::TranslateY, 10.0);
        let mid = Style::lerp(&a, &b, 0.5);
        assert_eq!(mid.get(StyleProperty::Opacity), Some(0.5));
        // Only present on one side: passes through unchanged.
        assert_eq!(mid.get(StyleProperty::Scale), Some(0.9));
        assert_eq!(mid.get(StyleProperty::TranslateY), Some(10.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Style::new().with(StyleProperty::Blur, 0.0);
        let b = Style::new().with(StyleProperty::Blur, 8.0);
        assert_eq!(Style::lerp(&a, &b, 0.0), a);
        assert_eq!(Style::lerp(&a, &b, 1.0), b);
    }
}
