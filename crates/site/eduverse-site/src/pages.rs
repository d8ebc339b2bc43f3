//! Page mounting: create the elements a page renders, register its stored
//! motion document, and keep the tokens so unmount releases everything
//! exactly once.
//!
//! The motion core never sees page structure; it only sees element handles.
//! This module owns the name -> handle bookkeeping and implements the
//! resolver the stored documents are applied through.

use std::collections::HashMap;

use anyhow::{Context, Result};

use eduverse_motion_core::{
    parse_stored_page_json, register_stored_page, BindingToken, Easing, ElementBounds,
    ElementHandle, ElementResolver, Engine, GroupItem, ReplayPolicy, Style, StyleProperty,
    Timeline, TriggerZone,
};

const CHROME_DOC: &str = include_str!("../../../../fixtures/pages/chrome.json");
const HOME_DOC: &str = include_str!("../../../../fixtures/pages/home.json");
const ABOUT_DOC: &str = include_str!("../../../../fixtures/pages/about.json");
const COURSES_DOC: &str = include_str!("../../../../fixtures/pages/courses.json");
const CONTACT_DOC: &str = include_str!("../../../../fixtures/pages/contact.json");

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PageKind {
    Home,
    About,
    Courses,
    Contact,
}

impl PageKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Courses => "courses",
            Self::Contact => "contact",
        }
    }

    fn document(&self) -> &'static str {
        match self {
            Self::Home => HOME_DOC,
            Self::About => ABOUT_DOC,
            Self::Courses => COURSES_DOC,
            Self::Contact => CONTACT_DOC,
        }
    }

    /// Element names and content offsets for the page's sections.
    fn layout(&self) -> Vec<(&'static str, ElementBounds)> {
        let at = |offset: f32, extent: f32| ElementBounds { offset, extent };
        match self {
            Self::Home => vec![
                ("hero-title", at(120.0, 90.0)),
                ("hero-subtitle", at(260.0, 70.0)),
                ("hero-buttons", at(360.0, 60.0)),
                ("scroll-arrow", at(820.0, 40.0)),
                ("course-card-0", at(1100.0, 380.0)),
                ("course-card-1", at(1100.0, 380.0)),
                ("course-card-2", at(1100.0, 380.0)),
                ("course-card-3", at(1100.0, 380.0)),
                ("feature-block-0", at(1900.0, 260.0)),
                ("feature-block-1", at(1900.0, 260.0)),
                ("feature-block-2", at(1900.0, 260.0)),
                ("testimonial-card-0", at(2600.0, 320.0)),
                ("testimonial-card-1", at(2600.0, 320.0)),
                ("testimonial-card-2", at(2600.0, 320.0)),
                ("testimonial-card-3", at(2600.0, 320.0)),
            ],
            Self::About => vec![
                ("about-hero-0", at(120.0, 90.0)),
                ("about-hero-1", at(260.0, 70.0)),
                ("stat-card-0", at(900.0, 200.0)),
                ("stat-card-1", at(900.0, 200.0)),
                ("stat-card-2", at(900.0, 200.0)),
                ("stat-card-3", at(900.0, 200.0)),
                ("timeline-item-0", at(1600.0, 180.0)),
                ("timeline-item-1", at(1800.0, 180.0)),
                ("timeline-item-2", at(2000.0, 180.0)),
            ],
            Self::Courses => vec![
                ("courses-hero-0", at(120.0, 90.0)),
                ("courses-hero-1", at(240.0, 70.0)),
                ("courses-hero-2", at(360.0, 50.0)),
                ("filter-section", at(700.0, 160.0)),
            ],
            Self::Contact => vec![
                ("contact-hero-0", at(120.0, 90.0)),
                ("contact-hero-1", at(240.0, 70.0)),
                ("contact-hero-2", at(360.0, 50.0)),
                ("contact-form", at(900.0, 600.0)),
                ("contact-info", at(900.0, 600.0)),
            ],
        }
    }
}

/// Resolver over a page's name -> handle map.
struct MapResolver<'a>(&'a HashMap<String, ElementHandle>);

impl ElementResolver for MapResolver<'_> {
    fn resolve(&mut self, name: &str) -> Option<ElementHandle> {
        self.0.get(name).copied()
    }
}

/// A mounted page: its elements and every binding token it owns.
#[derive(Debug)]
pub struct MountedPage {
    pub name: String,
    elements: HashMap<String, ElementHandle>,
    tokens: Vec<BindingToken>,
    unmounted: bool,
}

impl MountedPage {
    pub fn element(&self, name: &str) -> Option<ElementHandle> {
        self.elements.get(name).copied()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Release every binding and element this page owns. Must run when the
    /// page goes away; leaking bindings keeps them consuming ticks. Safe to
    /// call more than once.
    pub fn unmount(&mut self, engine: &mut Engine) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;
        for token in self.tokens.drain(..) {
            engine.unregister(token);
        }
        for handle in self.elements.values() {
            engine.remove_element(*handle);
        }
        log::debug!("unmounted page '{}'", self.name);
    }
}

fn mount_document(
    engine: &mut Engine,
    name: &str,
    doc: &str,
    layout: Vec<(&'static str, ElementBounds)>,
) -> Result<MountedPage> {
    let page = parse_stored_page_json(doc)
        .with_context(|| format!("stored page document '{name}' is malformed"))?;

    let mut elements = HashMap::new();
    for (element_name, bounds) in layout {
        elements.insert(element_name.to_string(), engine.create_element(bounds));
    }

    let mut resolver = MapResolver(&elements);
    let tokens = register_stored_page(engine, &page, &mut resolver)
        .with_context(|| format!("registering page '{name}'"))?;

    log::info!(
        "mounted page '{name}': {} elements, {} bindings",
        elements.len(),
        tokens.len()
    );
    Ok(MountedPage {
        name: name.to_string(),
        elements,
        tokens,
        unmounted: false,
    })
}

/// Mount the site chrome: header ramps and the navigation drawer.
pub fn mount_chrome(engine: &mut Engine) -> Result<MountedPage> {
    let layout = vec![
        ("header", ElementBounds { offset: 0.0, extent: 80.0 }),
        ("header-backdrop", ElementBounds { offset: 0.0, extent: 80.0 }),
        ("drawer-panel", ElementBounds { offset: 0.0, extent: 900.0 }),
    ];
    let chrome = mount_document(engine, "chrome", CHROME_DOC, layout)?;
    let panel = chrome
        .element("drawer-panel")
        .context("chrome layout includes the drawer panel")?;
    engine.set_drawer_panel(panel);
    Ok(chrome)
}

/// Mount one of the site's pages from its stored motion document.
pub fn mount_page(engine: &mut Engine, kind: PageKind) -> Result<MountedPage> {
    mount_document(engine, kind.name(), kind.document(), kind.layout())
}

/// Mount the courses-page result grid for the current filter outcome.
/// One staggered batch, list order, 0.05s increments.
pub fn mount_course_grid(
    engine: &mut Engine,
    page: &mut MountedPage,
    count: usize,
) -> Result<()> {
    let card_timeline = || {
        Timeline::tween(
            Style::new()
                .with(StyleProperty::Opacity, 0.0)
                .with(StyleProperty::TranslateY, 50.0)
                .with(StyleProperty::Scale, 0.9),
            Style::new()
                .with(StyleProperty::Opacity, 1.0)
                .with(StyleProperty::TranslateY, 0.0)
                .with(StyleProperty::Scale, 1.0),
            0.6,
            0.0,
            Easing::EaseOut,
        )
    };

    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        let name = format!("catalog-card-{i}");
        let handle = engine.create_element(ElementBounds {
            offset: 1100.0,
            extent: 380.0,
        });
        page.elements.insert(name, handle);
        items.push(GroupItem::new(handle, card_timeline()));
    }
    let tokens = engine.register_group(
        items,
        TriggerZone::new(-800.0, 100.0),
        ReplayPolicy::PlayReverseOnExit,
        0.05,
    )?;
    page.tokens.extend(tokens);
    Ok(())
}
