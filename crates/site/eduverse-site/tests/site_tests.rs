use eduverse_motion_core::{DrawerState, Engine, Inputs, MotionEvent, StyleProperty, Viewport};
use eduverse_site::catalog::{categories, search, CatalogQuery, SortKey};
use eduverse_site::contact::{ContactForm, FieldError, Submission};
use eduverse_site::content::{all_courses, featured_courses, testimonials};
use eduverse_site::pages::{mount_chrome, mount_course_grid, mount_page, PageKind};

fn vp(offset: f32) -> Inputs {
    Inputs::with_viewport(Viewport {
        scroll_offset: offset,
        viewport_extent: 900.0,
        content_extent: 3400.0,
    })
}

/// it should filter by category and keep every hit in that category
#[test]
fn category_filter() {
    let courses = all_courses();
    let query = CatalogQuery {
        category: Some("Technology".to_string()),
        ..CatalogQuery::default()
    };
    let hits = search(&courses, &query);
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|c| c.category == "Technology"));
}

/// it should match search text against titles and descriptions
#[test]
fn text_search() {
    let courses = all_courses();
    let query = CatalogQuery {
        text: "machine learning".to_string(),
        ..CatalogQuery::default()
    };
    let hits = search(&courses, &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Data Science & Analytics");

    // Case-insensitive.
    let query = CatalogQuery {
        text: "DESIGN".to_string(),
        ..CatalogQuery::default()
    };
    assert!(!search(&courses, &query).is_empty());
}

/// it should order results per sort key
#[test]
fn sort_orders() {
    let courses = all_courses();
    let by = |sort: SortKey| {
        search(
            &courses,
            &CatalogQuery {
                sort,
                ..CatalogQuery::default()
            },
        )
    };

    assert_eq!(by(SortKey::Popularity)[0].title, "Computer Science Fundamentals");
    assert_eq!(by(SortKey::PriceLowHigh)[0].title, "Creative Writing");
    assert_eq!(by(SortKey::PriceHighLow)[0].title, "Web Development Bootcamp");
    let rated = by(SortKey::Rating);
    assert!(rated.windows(2).all(|w| w[0].rating >= w[1].rating));
}

/// it should expose the six catalog categories in catalog order
#[test]
fn category_listing() {
    let cats = categories(&all_courses());
    assert_eq!(
        cats,
        ["Technology", "Business", "Marketing", "Design", "Healthcare", "Arts"]
    );
}

/// it should feature the home-page subset of the catalog
#[test]
fn featured_subset() {
    let featured = featured_courses();
    assert_eq!(featured.len(), 4);
    assert!(featured.iter().all(|c| all_courses().contains(c)));
    assert_eq!(testimonials().len(), 4);
}

/// it should walk the contact form through validation and delivery
#[test]
fn contact_round_trip() {
    let mut form = ContactForm {
        name: "Ada Okafor".to_string(),
        email: "ada@okafor.dev".to_string(),
        phone: "+1 (555) 010-2030".to_string(),
        subject: "Custom program".to_string(),
        message: "Do you offer evening schedules?".to_string(),
    };
    assert!(form.validate().is_ok());

    form.email = "ada@okafor".to_string();
    assert_eq!(form.validate(), Err(FieldError::InvalidEmail));
    form.email = "ada@okafor.dev".to_string();

    let mut submission = Submission::send(&form).unwrap();
    let mut receipts = 0;
    for _ in 0..240 {
        if submission.tick(1.0 / 60.0).is_some() {
            receipts += 1;
        }
    }
    assert_eq!(receipts, 1);
    assert!(submission.is_delivered());
}

/// it should mount the home page, animate the hero, and clean up on unmount
#[test]
fn home_page_lifecycle() {
    let mut engine = Engine::default();
    let mut chrome = mount_chrome(&mut engine).unwrap();
    let mut home = mount_page(&mut engine, PageKind::Home).unwrap();
    assert!(home.token_count() > 0);

    // First sample at the top of the page starts the hero intro.
    let hero = home.element("hero-title").unwrap();
    let mut saw_hero_motion = false;
    for tick in 0..90 {
        let inputs = if tick == 0 { vp(0.0) } else { Inputs::default() };
        let out = engine.update(1.0 / 60.0, inputs);
        if out.changes.iter().any(|c| c.element == hero) {
            saw_hero_motion = true;
        }
    }
    assert!(saw_hero_motion);

    // Header ramp follows the scroll and stays within its endpoints.
    let header = chrome.element("header").unwrap();
    let out = engine.update(1.0 / 60.0, vp(40.0));
    let padding = out
        .changes
        .iter()
        .find(|c| c.element == header)
        .and_then(|c| c.style.get(StyleProperty::PaddingBlock))
        .unwrap();
    assert!((8.0..=16.0).contains(&padding));

    home.unmount(&mut engine);
    chrome.unmount(&mut engine);
    // Repeat unmount is a no-op.
    home.unmount(&mut engine);
    assert_eq!(engine.reveal_count(), 0);
    assert_eq!(engine.progress_count(), 0);
    let out = engine.update(1.0 / 60.0, vp(0.0));
    assert!(out.is_empty());
    assert_eq!(engine.subscription_count(), 0);
}

/// it should stagger the filtered course grid in list order
#[test]
fn course_grid_staggers_in_list_order() {
    let mut engine = Engine::default();
    let mut page = mount_page(&mut engine, PageKind::Courses).unwrap();

    let courses = all_courses();
    let hits = search(
        &courses,
        &CatalogQuery {
            category: Some("Business".to_string()),
            ..CatalogQuery::default()
        },
    );
    mount_course_grid(&mut engine, &mut page, hits.len()).unwrap();

    let card0 = page.element("catalog-card-0").unwrap();
    let card1 = page.element("catalog-card-1").unwrap();

    // Scroll straight to the grid; both cards enter together.
    let mut first_motion = std::collections::HashMap::new();
    for tick in 0..40 {
        let inputs = if tick == 0 { vp(1050.0) } else { Inputs::default() };
        let out = engine.update(1.0 / 60.0, inputs);
        for c in &out.changes {
            let moving = c
                .style
                .get(StyleProperty::Opacity)
                .map(|o| o > 1e-4)
                .unwrap_or(false);
            if moving {
                first_motion.entry(c.element).or_insert(tick);
            }
        }
    }
    let t0 = first_motion[&card0];
    let t1 = first_motion[&card1];
    assert!(t0 < t1, "card 0 (tick {t0}) must lead card 1 (tick {t1})");

    page.unmount(&mut engine);
}

/// it should run the drawer through a full open/close from the chrome mount
#[test]
fn chrome_drawer_cycle() {
    let mut engine = Engine::default();
    let mut chrome = mount_chrome(&mut engine).unwrap();
    let panel = chrome.element("drawer-panel").unwrap();

    assert_eq!(engine.toggle_drawer(), DrawerState::Opening);
    let mut settled = None;
    for _ in 0..30 {
        let out = engine.update(1.0 / 60.0, Inputs::default());
        assert!(out.changes.iter().any(|c| c.element == panel));
        for e in &out.events {
            if let MotionEvent::DrawerChanged { state } = e {
                settled = Some(*state);
            }
        }
        if settled.is_some() {
            break;
        }
    }
    assert_eq!(settled, Some(DrawerState::Open));

    chrome.unmount(&mut engine);
}
