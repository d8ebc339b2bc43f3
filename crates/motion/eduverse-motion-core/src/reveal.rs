//! Reveal bindings: element + timeline + trigger zone + replay policy.
//!
//! The registry is the sole owner of binding existence. Exactly one binding
//! exists per element at any time; re-registering an element replaces the
//! prior binding and its subscription. Unregistering is idempotent.

use serde::{Deserialize, Serialize};

use crate::ease::Easing;
use crate::error::MotionError;
use crate::ids::{BindingToken, ElementHandle, IdAllocator, SubId};
use crate::style::Style;
use crate::timeline::{Playback, Timeline};
use crate::viewport::{TriggerZone, ViewportObserver};

/// What a binding does on zone crossings after its first play.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayPolicy {
    /// Play on first entry, then stay at the final style forever.
    PlayOnce,
    /// Play on every entry, reverse on every exit.
    PlayReverseOnExit,
}

/// Declarative one-step reveal description, as handed over by presentational
/// collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    pub initial: Style,
    pub target: Style,
    pub duration: f32,
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub easing: Easing,
    pub zone: TriggerZone,
    pub policy: ReplayPolicy,
}

impl RevealSpec {
    /// Lower the declarative form into a single-step timeline.
    pub fn timeline(&self) -> Timeline {
        Timeline::tween(
            self.initial.clone(),
            self.target.clone(),
            self.duration,
            self.delay,
            self.easing,
        )
    }
}

/// One live binding in the registry arena.
#[derive(Debug)]
pub struct RevealBinding {
    pub token: BindingToken,
    pub element: ElementHandle,
    /// None once the subscription has fired its terminal event (PlayOnce).
    pub sub: Option<SubId>,
    pub timeline: Timeline,
    pub playback: Playback,
    pub policy: ReplayPolicy,
    pub played: bool,
}

/// Arena of reveal bindings in registration order.
#[derive(Default, Debug)]
pub struct RevealRegistry {
    bindings: Vec<RevealBinding>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Validate and register a binding, replacing any prior binding for the
    /// same element (the replaced subscription is cancelled first, so no
    /// duplicate subscriptions survive).
    pub fn register(
        &mut self,
        ids: &mut IdAllocator,
        observer: &mut ViewportObserver,
        element: ElementHandle,
        timeline: Timeline,
        zone: TriggerZone,
        policy: ReplayPolicy,
    ) -> Result<BindingToken, MotionError> {
        zone.validate()?;
        timeline.validate()?;

        if let Some(pos) = self.bindings.iter().position(|b| b.element == element) {
            let prior = self.bindings.remove(pos);
            if let Some(sub) = prior.sub {
                observer.cancel(sub);
            }
            log::debug!("replacing reveal binding for element {:?}", element);
        }

        let token = ids.alloc_binding();
        let sub = observer.observe(ids, element, zone);
        self.bindings.push(RevealBinding {
            token,
            element,
            sub: Some(sub),
            timeline,
            playback: Playback::new(),
            policy,
            played: false,
        });
        Ok(token)
    }

    /// Cancel the binding's subscription and discard it. Returns false when
    /// the token is unknown (already unregistered); repeat calls are no-ops.
    pub fn unregister(&mut self, observer: &mut ViewportObserver, token: BindingToken) -> bool {
        match self.bindings.iter().position(|b| b.token == token) {
            Some(pos) => {
                let binding = self.bindings.remove(pos);
                if let Some(sub) = binding.sub {
                    observer.cancel(sub);
                }
                true
            }
            None => false,
        }
    }

    /// Drop bindings whose element is gone from the table. Their
    /// subscriptions are dropped by the observer's own sample pass.
    pub fn prune_stale(&mut self, elements: &crate::viewport::ElementTable) {
        self.bindings.retain(|b| {
            let alive = elements.contains(b.element);
            if !alive {
                log::debug!("dropping reveal binding for gone element {:?}", b.element);
            }
            alive
        });
    }

    pub fn find_by_sub_mut(&mut self, sub: SubId) -> Option<&mut RevealBinding> {
        self.bindings.iter_mut().find(|b| b.sub == Some(sub))
    }

    pub fn get(&self, token: BindingToken) -> Option<&RevealBinding> {
        self.bindings.iter().find(|b| b.token == token)
    }

    /// Registration-order iteration for the advance pass.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RevealBinding> {
        self.bindings.iter_mut()
    }
}
