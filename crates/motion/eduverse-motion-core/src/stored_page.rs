//! Stored page-motion documents.
//!
//! Public API: parse StoredPage-style JSON into core registration data, and
//! walk a parsed document against a live engine through an element resolver.
//!
//! Notes:
//! - Style maps are keyed by property name ("opacity", "translateX", ...).
//! - Easing accepts a preset name or [x1, y1, x2, y2] control points.
//! - Durations, delays, zones, and regions are validated at parse time, so a
//!   malformed document is rejected before any registration happens.
//! - Unresolved element names are skipped during registration, matching the
//!   stale-handle policy: a name the host never mounted is not an error.

use serde::Deserialize;

use crate::ease::Easing;
use crate::engine::Engine;
use crate::error::MotionError;
use crate::group::GroupItem;
use crate::ids::{BindingToken, ElementHandle};
use crate::progress::{ProgressRegion, StyleRamp};
use crate::reveal::{ReplayPolicy, RevealSpec};
use crate::style::{Style, StyleProperty};
use crate::timeline::{Step, Timeline};
use crate::viewport::TriggerZone;

/// Resolves stored element names to live handles. Hosts implement this over
/// whatever mount bookkeeping they keep.
pub trait ElementResolver {
    fn resolve(&mut self, name: &str) -> Option<ElementHandle>;
}

/// A reveal addressed by element name.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredReveal {
    pub element: String,
    pub spec: RevealSpec,
}

/// One member of a stored group.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredGroupItem {
    pub element: String,
    pub timeline: Timeline,
    pub zone: Option<TriggerZone>,
}

/// A staggered batch addressed by element names.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredGroup {
    pub stagger: f32,
    pub zone: TriggerZone,
    pub policy: ReplayPolicy,
    pub items: Vec<StoredGroupItem>,
}

/// A progress ramp addressed by element name.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredRamp {
    pub element: String,
    pub region: ProgressRegion,
    pub ramp: StyleRamp,
}

/// Parsed, validated page-motion document.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredPage {
    pub name: String,
    pub reveals: Vec<StoredReveal>,
    pub groups: Vec<StoredGroup>,
    pub ramps: Vec<StoredRamp>,
}

/// Parse a StoredPage JSON document into validated registration data.
pub fn parse_stored_page_json(s: &str) -> Result<StoredPage, MotionError> {
    let raw: RawPage =
        serde_json::from_str(s).map_err(|e| MotionError::Parse(format!("parse error: {e}")))?;

    let mut reveals = Vec::with_capacity(raw.reveals.len());
    for r in raw.reveals {
        let spec = RevealSpec {
            initial: to_style(&r.initial)?,
            target: to_style(&r.target)?,
            duration: r.duration,
            delay: r.delay,
            easing: to_easing(&r.easing)?,
            zone: to_zone(&r.zone),
            policy: r.policy,
        };
        spec.zone.validate()?;
        spec.timeline().validate()?;
        reveals.push(StoredReveal {
            element: r.element,
            spec,
        });
    }

    let mut groups = Vec::with_capacity(raw.groups.len());
    for g in raw.groups {
        let zone = to_zone(&g.zone);
        zone.validate()?;
        crate::group::validate_increment(g.stagger)?;
        let mut items = Vec::with_capacity(g.items.len());
        for item in g.items {
            let timeline = Timeline::new(to_style(&item.initial)?).then(
                Step::new(to_style(&item.target)?, item.duration)
                    .with_delay(item.delay)
                    .with_easing(to_easing(&item.easing)?),
            );
            timeline.validate()?;
            let item_zone = match item.zone {
                Some(z) => {
                    let z = to_zone(&z);
                    z.validate()?;
                    Some(z)
                }
                None => None,
            };
            items.push(StoredGroupItem {
                element: item.element,
                timeline,
                zone: item_zone,
            });
        }
        groups.push(StoredGroup {
            stagger: g.stagger,
            zone,
            policy: g.policy,
            items,
        });
    }

    let mut ramps = Vec::with_capacity(raw.progress.len());
    for p in raw.progress {
        let region = ProgressRegion::new(p.region.start, p.region.end);
        region.validate()?;
        ramps.push(StoredRamp {
            element: p.element,
            region,
            ramp: StyleRamp {
                from: to_style(&p.from)?,
                to: to_style(&p.to)?,
                easing: to_easing(&p.easing)?,
            },
        });
    }

    Ok(StoredPage {
        name: raw.name,
        reveals,
        groups,
        ramps,
    })
}

/// Register everything a parsed document describes against an engine.
/// Items whose element name does not resolve are skipped.
pub fn register_stored_page(
    engine: &mut Engine,
    page: &StoredPage,
    resolver: &mut dyn ElementResolver,
) -> Result<Vec<BindingToken>, MotionError> {
    let mut tokens = Vec::new();

    for reveal in &page.reveals {
        let Some(handle) = resolver.resolve(&reveal.element) else {
            log::debug!("skipping reveal for unresolved element '{}'", reveal.element);
            continue;
        };
        tokens.push(engine.register_reveal(handle, &reveal.spec)?);
    }

    for group in &page.groups {
        let mut items = Vec::with_capacity(group.items.len());
        for item in &group.items {
            let Some(handle) = resolver.resolve(&item.element) else {
                log::debug!("skipping group item for unresolved element '{}'", item.element);
                continue;
            };
            let mut gi = GroupItem::new(handle, item.timeline.clone());
            gi.zone = item.zone;
            items.push(gi);
        }
        tokens.extend(engine.register_group(items, group.zone, group.policy, group.stagger)?);
    }

    for ramp in &page.ramps {
        let Some(handle) = resolver.resolve(&ramp.element) else {
            log::debug!("skipping ramp for unresolved element '{}'", ramp.element);
            continue;
        };
        tokens.push(engine.bind_progress(handle, ramp.region, ramp.ramp.clone())?);
    }

    Ok(tokens)
}

fn to_style(raw: &RawStyle) -> Result<Style, MotionError> {
    let mut style = Style::new();
    for (name, value) in &raw.0 {
        let prop = StyleProperty::from_name(name)
            .ok_or_else(|| MotionError::Parse(format!("unknown style property '{name}'")))?;
        if !value.is_finite() {
            return Err(MotionError::Parse(format!(
                "style property '{name}' must be finite"
            )));
        }
        style.set(prop, *value as f32);
    }
    Ok(style)
}

fn to_easing(raw: &RawEasing) -> Result<Easing, MotionError> {
    match raw {
        RawEasing::Name(name) => match name.as_str() {
            "linear" => Ok(Easing::Linear),
            "ease-in" => Ok(Easing::EaseIn),
            "ease-out" => Ok(Easing::EaseOut),
            "ease-in-out" => Ok(Easing::EaseInOut),
            other => Err(MotionError::Parse(format!("unknown easing '{other}'"))),
        },
        RawEasing::Ctrl(ctrl) => {
            let ctrl = [
                ctrl[0] as f32,
                ctrl[1] as f32,
                ctrl[2] as f32,
                ctrl[3] as f32,
            ];
            if ctrl.iter().any(|v| !v.is_finite()) {
                return Err(MotionError::Parse("easing control points must be finite".into()));
            }
            Ok(Easing::CubicBezier(ctrl))
        }
    }
}

fn to_zone(raw: &RawRange) -> TriggerZone {
    TriggerZone::new(raw.start, raw.end)
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct RawPage {
    name: String,
    #[serde(default)]
    reveals: Vec<RawReveal>,
    #[serde(default)]
    groups: Vec<RawGroup>,
    #[serde(default)]
    progress: Vec<RawProgress>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct RawStyle(std::collections::BTreeMap<String, f64>);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEasing {
    Name(String),
    Ctrl([f64; 4]),
}

impl Default for RawEasing {
    fn default() -> Self {
        RawEasing::Name("ease-out".to_string())
    }
}

#[derive(Debug, Deserialize)]
struct RawRange {
    start: f32,
    end: f32,
}

#[derive(Debug, Deserialize)]
struct RawReveal {
    element: String,
    #[serde(default)]
    initial: RawStyle,
    target: RawStyle,
    duration: f32,
    #[serde(default)]
    delay: f32,
    #[serde(default)]
    easing: RawEasing,
    zone: RawRange,
    policy: ReplayPolicy,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    #[serde(default)]
    stagger: f32,
    zone: RawRange,
    policy: ReplayPolicy,
    items: Vec<RawGroupItem>,
}

#[derive(Debug, Deserialize)]
struct RawGroupItem {
    element: String,
    #[serde(default)]
    initial: RawStyle,
    target: RawStyle,
    duration: f32,
    #[serde(default)]
    delay: f32,
    #[serde(default)]
    easing: RawEasing,
    #[serde(default)]
    zone: Option<RawRange>,
}

#[derive(Debug, Deserialize)]
struct RawProgress {
    element: String,
    region: RawRange,
    #[serde(default)]
    from: RawStyle,
    to: RawStyle,
    #[serde(default)]
    easing: RawEasing,
}
