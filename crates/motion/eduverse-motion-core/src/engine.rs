//! Engine: data ownership and the public registration/tick API.
//!
//! The engine owns every registry (elements, observer subscriptions, reveal
//! bindings, progress bindings, the drawer) and is driven by the host's
//! per-frame tick. Within one tick, bindings are evaluated in registration
//! order; stagger delays live inside timelines and are therefore relative to
//! the batch's own dispatch, so results are reproducible for an identical
//! sequence of scroll samples.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::drawer::{Drawer, DrawerState};
use crate::error::MotionError;
use crate::group::{apply_stagger, validate_increment, GroupItem};
use crate::ids::{BindingToken, ElementHandle, IdAllocator};
use crate::outputs::{Change, MotionEvent, Outputs};
use crate::progress::{ProgressBinding, ProgressRegion, StyleRamp};
use crate::reveal::{ReplayPolicy, RevealRegistry, RevealSpec};
use crate::timeline::Timeline;
use crate::viewport::{
    CrossingKind, ElementBounds, ElementTable, TriggerZone, Viewport, ViewportObserver,
};

/// Host-fed data for one tick.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    /// Latest scroll sample, if the position changed or a first sample is
    /// available. Absent means trigger evaluation is skipped this tick.
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

impl Inputs {
    pub fn with_viewport(vp: Viewport) -> Self {
        Self { viewport: Some(vp) }
    }
}

#[derive(Debug)]
pub struct Engine {
    // Owned data
    cfg: Config,
    ids: IdAllocator,
    elements: ElementTable,

    // Systems
    observer: ViewportObserver,
    reveals: RevealRegistry,
    progress: Vec<ProgressBinding>,
    drawer: Drawer,

    // Per-tick state
    last_viewport: Option<Viewport>,
    outputs: Outputs,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            elements: ElementTable::new(),
            observer: ViewportObserver::new(),
            reveals: RevealRegistry::new(),
            progress: Vec::new(),
            drawer: Drawer::new(),
            last_viewport: None,
            outputs: Outputs::default(),
        }
    }

    // ---- element lifecycle -------------------------------------------------

    /// Mint a handle for a host element and record its bounds.
    pub fn create_element(&mut self, bounds: ElementBounds) -> ElementHandle {
        let handle = self.ids.alloc_element();
        self.elements.upsert(handle, bounds);
        handle
    }

    /// Update bounds after a host layout pass. Unknown handles re-enter the
    /// table (the host owns element identity).
    pub fn set_element_bounds(&mut self, handle: ElementHandle, bounds: ElementBounds) {
        self.elements.upsert(handle, bounds);
    }

    /// Drop an element. Bindings against it are dropped silently on the next
    /// tick rather than erroring.
    pub fn remove_element(&mut self, handle: ElementHandle) {
        self.elements.remove(handle);
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    // ---- registration ------------------------------------------------------

    /// Register a declarative reveal for an element.
    pub fn register_reveal(
        &mut self,
        element: ElementHandle,
        spec: &RevealSpec,
    ) -> Result<BindingToken, MotionError> {
        self.register_reveal_timeline(element, spec.timeline(), spec.zone, spec.policy)
    }

    /// Register a reveal with an explicit (possibly multi-step) timeline.
    /// Replaces any prior binding for the element.
    pub fn register_reveal_timeline(
        &mut self,
        element: ElementHandle,
        timeline: Timeline,
        zone: TriggerZone,
        policy: ReplayPolicy,
    ) -> Result<BindingToken, MotionError> {
        self.reveals.register(
            &mut self.ids,
            &mut self.observer,
            element,
            timeline,
            zone,
            policy,
        )
    }

    /// Register a staggered batch sharing one zone and policy. The whole
    /// batch is validated before any item is registered, so a configuration
    /// error leaves no partial registrations behind. Items are registered in
    /// index order.
    pub fn register_group(
        &mut self,
        items: Vec<GroupItem>,
        zone: TriggerZone,
        policy: ReplayPolicy,
        stagger_increment: f32,
    ) -> Result<Vec<BindingToken>, MotionError> {
        validate_increment(stagger_increment)?;
        zone.validate()?;
        for item in &items {
            item.timeline.validate()?;
            if let Some(z) = item.zone {
                z.validate()?;
            }
        }

        let mut tokens = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let mut timeline = item.timeline;
            apply_stagger(&mut timeline, stagger_increment, index);
            let item_zone = item.zone.unwrap_or(zone);
            tokens.push(self.register_reveal_timeline(
                item.element,
                timeline,
                item_zone,
                policy,
            )?);
        }
        Ok(tokens)
    }

    /// Bind a continuous scroll-progress ramp to an element's style.
    pub fn bind_progress(
        &mut self,
        element: ElementHandle,
        region: ProgressRegion,
        ramp: StyleRamp,
    ) -> Result<BindingToken, MotionError> {
        region.validate()?;
        let token = self.ids.alloc_binding();
        self.progress.push(ProgressBinding {
            token,
            element,
            region,
            ramp,
        });
        Ok(token)
    }

    /// Uniform unbind across all binding kinds. Takes effect before the next
    /// tick; repeat calls are no-ops.
    pub fn unregister(&mut self, token: BindingToken) {
        if self.reveals.unregister(&mut self.observer, token) {
            log::debug!("unregistered reveal {token:?}");
            return;
        }
        let before = self.progress.len();
        self.progress.retain(|p| p.token != token);
        if self.progress.len() < before {
            log::debug!("unregistered progress ramp {token:?}");
        }
    }

    // ---- drawer ------------------------------------------------------------

    /// Element receiving the drawer slide styles.
    pub fn set_drawer_panel(&mut self, panel: ElementHandle) {
        self.drawer.set_panel(panel);
    }

    /// Replace the drawer slide timeline (no-op while a transition runs).
    pub fn set_drawer_timeline(&mut self, timeline: Timeline) -> Result<(), MotionError> {
        self.drawer.set_timeline(timeline)
    }

    /// Toggle the drawer; returns the state entered synchronously.
    pub fn toggle_drawer(&mut self) -> DrawerState {
        self.drawer.toggle()
    }

    pub fn drawer_state(&self) -> DrawerState {
        self.drawer.state()
    }

    // ---- tick --------------------------------------------------------------

    /// Step the engine by dt with the given inputs, producing this tick's
    /// outputs. Pass order: stale pruning, trigger evaluation, reveal
    /// advancement, progress sampling, drawer advancement.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        let cap = self.cfg.max_events_per_tick;

        // 1) Bindings whose element vanished are absorbed silently.
        self.reveals.prune_stale(&self.elements);
        self.progress.retain(|p| self.elements.contains(p.element));

        // 2) Trigger evaluation against the newest scroll sample.
        if let Some(vp) = inputs.viewport {
            self.last_viewport = Some(vp);
            let crossings = self.observer.sample(&vp, &self.elements);
            for crossing in crossings {
                let event = match crossing.kind {
                    CrossingKind::Entered => MotionEvent::ZoneEntered {
                        element: crossing.element,
                        direction: crossing.direction,
                    },
                    CrossingKind::Exited => MotionEvent::ZoneExited {
                        element: crossing.element,
                        direction: crossing.direction,
                    },
                };
                self.outputs.push_event(event, cap);

                let Some(binding) = self.reveals.find_by_sub_mut(crossing.sub) else {
                    continue;
                };
                match (crossing.kind, binding.policy) {
                    (CrossingKind::Entered, ReplayPolicy::PlayOnce) => {
                        if !binding.played {
                            binding.played = true;
                            binding.playback.play();
                            if !self.cfg.animations_enabled {
                                binding.playback.skip_to_end(binding.timeline.total_duration());
                            }
                            self.outputs.push_event(
                                MotionEvent::RevealStarted {
                                    token: binding.token,
                                },
                                cap,
                            );
                            // Terminal for this subscription: nothing left to
                            // observe once the single play has been triggered.
                            if let Some(sub) = binding.sub.take() {
                                self.observer.cancel(sub);
                            }
                        }
                    }
                    (CrossingKind::Entered, ReplayPolicy::PlayReverseOnExit) => {
                        binding.played = true;
                        binding.playback.play();
                        if !self.cfg.animations_enabled {
                            binding.playback.skip_to_end(binding.timeline.total_duration());
                        }
                        self.outputs.push_event(
                            MotionEvent::RevealStarted {
                                token: binding.token,
                            },
                            cap,
                        );
                    }
                    (CrossingKind::Exited, ReplayPolicy::PlayReverseOnExit) => {
                        if binding.played {
                            binding.playback.reverse();
                            if !self.cfg.animations_enabled {
                                binding.playback.skip_to_end(binding.timeline.total_duration());
                            }
                        }
                    }
                    (CrossingKind::Exited, ReplayPolicy::PlayOnce) => {}
                }
            }
        }

        // 3) Advance active reveal clocks in registration order.
        for binding in self.reveals.iter_mut() {
            if !binding.playback.is_playing() {
                continue;
            }
            let total = binding.timeline.total_duration();
            let completed = binding.playback.advance(dt, total);
            self.outputs.push_change(Change {
                element: binding.element,
                style: binding.timeline.style_at(binding.playback.time()),
            });
            if completed {
                self.outputs.push_event(
                    MotionEvent::RevealCompleted {
                        token: binding.token,
                    },
                    cap,
                );
            }
        }

        // 4) Progress ramps are pure functions of the newest known snapshot.
        if let Some(vp) = self.last_viewport {
            for binding in &self.progress {
                let progress = binding.region.progress_at(vp.scroll_offset);
                self.outputs.push_change(Change {
                    element: binding.element,
                    style: binding.ramp.sample(progress),
                });
            }
        }

        // 5) Drawer transition.
        if let Some(tick) = self.drawer.advance(dt, self.cfg.animations_enabled) {
            if let Some(panel) = self.drawer.panel() {
                self.outputs.push_change(Change {
                    element: panel,
                    style: tick.style,
                });
            }
            if let Some(state) = tick.settled {
                self.outputs.push_event(MotionEvent::DrawerChanged { state }, cap);
            }
        }

        &self.outputs
    }

    // ---- introspection -----------------------------------------------------

    pub fn reveal_count(&self) -> usize {
        self.reveals.len()
    }

    pub fn progress_count(&self) -> usize {
        self.progress.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.observer.subscription_count()
    }
}
