// SPDX-License-Identifier: LGPL-3.0-only

//! The activation indicator drawn under the active tab.
//!
//! A sliding indicator animates from the previous indicator's rect with an
//! invert-then-play transform: the new indicator is painted transformed so it
//! covers the old one, then the transform is removed with transitions
//! enabled. A fading indicator only toggles its active class.

use tabstrip_core::config::{IndicatorConfig, IndicatorStyle};
use tabstrip_core::geometry::{ClientRect, RectDelta};
use tabstrip_core::subscription::OneShot;
use tabstrip_core::surface::{EventKind, ListenerId, Part, Surface, SurfaceEvent};
use tabstrip_core::transform::{Transform, TRANSFORM_PROPERTY};
use tabstrip_core::{Result, TabStripError};

/// The indicator variant, fixed when the indicator is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    /// Translate and scale from the previous indicator.
    Sliding,
    /// Opacity only.
    Fading,
}

impl IndicatorKind {
    /// Pick the variant from configuration, or from the root's classes when
    /// the configured style is `auto`.
    pub fn resolve<S: Surface + ?Sized>(surface: &S, config: &IndicatorConfig) -> Result<Self> {
        match config.style {
            IndicatorStyle::Sliding => Ok(IndicatorKind::Sliding),
            IndicatorStyle::Fading => Ok(IndicatorKind::Fading),
            IndicatorStyle::Auto => {
                let slide = surface.has_class(Part::Root, &config.slide_class);
                let fade = surface.has_class(Part::Root, &config.fade_class);
                match (slide, fade) {
                    (true, false) => Ok(IndicatorKind::Sliding),
                    (false, true) => Ok(IndicatorKind::Fading),
                    (true, true) => Err(TabStripError::UnsupportedVariant(format!(
                        "both `{}` and `{}` are present",
                        config.slide_class, config.fade_class
                    ))),
                    (false, false) => Err(TabStripError::UnsupportedVariant(format!(
                        "neither `{}` nor `{}` is present",
                        config.slide_class, config.fade_class
                    ))),
                }
            }
        }
    }
}

/// Activation state of an indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorState {
    /// Not shown.
    Inactive,
    /// Animating in from the given rect.
    Activating(ClientRect),
    /// Shown and at rest.
    Active,
}

/// An indicator attached to a surface.
pub struct TabIndicator<S: Surface> {
    surface: S,
    kind: IndicatorKind,
    state: IndicatorState,
    config: IndicatorConfig,
    transition: OneShot,
}

impl<S: Surface> TabIndicator<S> {
    /// Attach an indicator to its surface.
    ///
    /// Fails if the content element is missing or the variant cannot be resolved.
    pub fn attach(surface: S, config: &IndicatorConfig) -> Result<Self> {
        if !surface.has_part(Part::Content) {
            return Err(TabStripError::MissingElement(Part::Content));
        }
        let kind = IndicatorKind::resolve(&surface, config)?;
        let state = if surface.has_class(Part::Root, &config.active_class) {
            IndicatorState::Active
        } else {
            IndicatorState::Inactive
        };

        Ok(Self {
            surface,
            kind,
            state,
            config: config.clone(),
            transition: OneShot::new(),
        })
    }

    /// The variant of this indicator.
    pub fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Current activation state.
    pub fn state(&self) -> IndicatorState {
        self.state
    }

    /// Check if the indicator is shown, animating or not.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, IndicatorState::Inactive)
    }

    /// Check if a transition-end listener is pending.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_armed()
    }

    /// Bounding box of the indicator content.
    pub fn compute_content_client_rect(&self) -> ClientRect {
        self.surface.client_rect(Part::Content)
    }

    /// Show the indicator, sliding in from `previous` when given.
    ///
    /// A fading indicator ignores `previous`. A degenerate `previous` rect
    /// (zero width, off-screen, non-finite) or one matching the current rect
    /// activates immediately without animating.
    pub fn activate(&mut self, previous: Option<&ClientRect>) {
        let interrupted = self.settle();

        let delta = match (self.kind, previous) {
            (IndicatorKind::Sliding, Some(previous)) => {
                let current = self.compute_content_client_rect();
                match RectDelta::between(previous, &current) {
                    // Nothing would transition, so no transition end would arrive.
                    Some(delta) if delta.is_identity() => None,
                    delta => {
                        let inverted = delta.and_then(Transform::from_delta);
                        if inverted.is_none() {
                            log::warn!(
                                "Skipping indicator animation for degenerate geometry: {:?} -> {:?}",
                                previous,
                                current
                            );
                        }
                        inverted.map(|t| (*previous, t))
                    }
                }
            }
            _ => None,
        };

        let Some((previous, inverted)) = delta else {
            if interrupted {
                self.surface.set_style(Part::Content, TRANSFORM_PROPERTY, "");
            }
            self.surface.add_class(Part::Root, &self.config.active_class);
            self.state = IndicatorState::Active;
            return;
        };

        // Paint inverted without a transition.
        self.surface
            .add_class(Part::Root, &self.config.no_transition_class);
        self.surface
            .set_style(Part::Content, TRANSFORM_PROPERTY, &inverted.to_string());

        // Querying geometry flushes layout so the inverted frame is committed.
        let _ = self.compute_content_client_rect();

        // Play back to the natural position.
        self.surface
            .remove_class(Part::Root, &self.config.no_transition_class);
        self.surface.add_class(Part::Root, &self.config.active_class);
        self.surface.set_style(Part::Content, TRANSFORM_PROPERTY, "");

        self.transition
            .arm(&mut self.surface, Part::Content, EventKind::TransitionEnd);
        self.state = IndicatorState::Activating(previous);
        log::debug!("Indicator sliding by {}", inverted);
    }

    /// Hide the indicator. No-op if already inactive.
    pub fn deactivate(&mut self) {
        if self.state == IndicatorState::Inactive {
            return;
        }
        if self.settle() {
            self.surface.set_style(Part::Content, TRANSFORM_PROPERTY, "");
        }
        self.surface
            .remove_class(Part::Root, &self.config.active_class);
        self.state = IndicatorState::Inactive;
    }

    /// Deliver an event from the host.
    ///
    /// Returns `true` if the event belonged to this indicator.
    pub fn handle_event(&mut self, listener: ListenerId, event: &SurfaceEvent) -> bool {
        if event.kind != EventKind::TransitionEnd {
            return false;
        }
        if !self.transition.fire(&mut self.surface, listener) {
            return false;
        }
        if matches!(self.state, IndicatorState::Activating(_)) {
            self.state = IndicatorState::Active;
        }
        true
    }

    /// Release listeners. The indicator keeps its classes.
    pub fn detach(&mut self) {
        self.transition.cancel(&mut self.surface);
    }

    /// The surface this indicator renders to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Cancel an in-flight activation. Returns `true` if one was in flight.
    fn settle(&mut self) -> bool {
        let pending = self.transition.cancel(&mut self.surface);
        if let IndicatorState::Activating(_) = self.state {
            self.state = IndicatorState::Active;
        }
        pending
    }
}

impl<S: Surface> Drop for TabIndicator<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
