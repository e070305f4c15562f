// SPDX-License-Identifier: LGPL-3.0-only
//! Horizontal tab scroller.
//!
//! Scrolls are animated with a transform on the content element rather than
//! with native smooth scrolling:
//! - the visual delta is applied as a translation while the root carries the
//!   animating class, so the host transitions it
//! - on transition end the final position is written to the native scroll
//!   offset and the translation is cleared
//! - any user interaction in between snaps to wherever the transition got to
//!   and gives control back to native scrolling
//!
//! Positions exposed by the scroller are visual: measured from the logical
//! start of the content, whatever the layout direction.

pub mod rtl;
pub mod sync;

use tabstrip_core::config::{RtlScrollStrategy, ScrollerConfig};
use tabstrip_core::layout::LayoutDirection;
use tabstrip_core::surface::{ListenerId, Part, Surface, SurfaceEvent};
use tabstrip_core::transform::{parse_translate_x, Transform, TRANSFORM_PROPERTY};
use tabstrip_core::{Result, TabStripError};

use self::sync::{SyncSignal, TransitionSync};

/// Bookkeeping for a scroll that is being animated by transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimationFrame {
    /// Native scroll offset when the animation started.
    pub start_native_position: f64,
    /// Visual distance the animation covers.
    pub target_visual_delta: f64,
}

/// Animation state of a scroller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollerState {
    /// Native scrolling is in control.
    Idle,
    /// A transform animation is in flight.
    Animating(ScrollAnimationFrame),
}

/// A scroller attached to a surface.
pub struct TabScroller<S: Surface> {
    surface: S,
    direction: LayoutDirection,
    strategy: RtlScrollStrategy,
    scrollbar_height: f64,
    state: ScrollerState,
    sync: TransitionSync,
    config: ScrollerConfig,
}

impl<S: Surface> TabScroller<S> {
    /// Attach a scroller to its surface.
    ///
    /// Resolves the layout direction, picks the RTL strategy once, hides the
    /// native scrollbar if configured, and starts listening for interaction.
    pub fn attach(mut surface: S, config: &ScrollerConfig) -> Result<Self> {
        for part in [Part::Area, Part::Content] {
            if !surface.has_part(part) {
                return Err(TabStripError::MissingElement(part));
            }
        }

        let computed = surface.computed_style(Part::Root, "direction");
        let direction = config.direction.resolve(computed.as_deref());
        let strategy = if direction.is_rtl() {
            match config.rtl_strategy {
                Some(strategy) => strategy,
                None => {
                    let probed = rtl::probe(&mut surface);
                    log::debug!("Probed RTL scroll strategy: {:?}", probed);
                    probed
                }
            }
        } else {
            RtlScrollStrategy::Default
        };

        let scrollbar_height = match surface.horizontal_scrollbar_height() {
            h if h.is_finite() && h > 0.0 => h,
            _ => 0.0,
        };
        if config.hide_scrollbar && scrollbar_height > 0.0 {
            surface.set_style(Part::Area, "margin-bottom", &format!("{}px", -scrollbar_height));
            surface.add_class(Part::Area, &config.scroll_area_class);
        }

        let sync = TransitionSync::attach(&mut surface, Part::Area, Part::Content);

        Ok(Self {
            surface,
            direction,
            strategy,
            scrollbar_height,
            state: ScrollerState::Idle,
            sync,
            config: config.clone(),
        })
    }

    /// The resolved layout direction.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// The native scroll convention in use.
    pub fn rtl_strategy(&self) -> RtlScrollStrategy {
        self.strategy
    }

    /// Height of the native horizontal scrollbar, measured once at attach.
    pub fn scrollbar_height(&self) -> f64 {
        self.scrollbar_height
    }

    /// Current animation state.
    pub fn state(&self) -> ScrollerState {
        self.state
    }

    /// Check if a scroll animation is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, ScrollerState::Animating(_))
    }

    /// Width of the scroll content.
    pub fn scroll_content_width(&self) -> f64 {
        self.surface.offset_metrics(Part::Content).sanitized().width
    }

    /// Width of the visible scroll area.
    pub fn scroll_area_width(&self) -> f64 {
        self.surface.offset_metrics(Part::Area).sanitized().width
    }

    /// Largest visual scroll position. Zero when the content fits.
    pub fn max_scroll_position(&self) -> f64 {
        (self.scroll_content_width() - self.scroll_area_width()).max(0.0)
    }

    /// Current visual scroll position, including any in-flight animation.
    pub fn get_scroll_position(&self) -> f64 {
        let max = self.max_scroll_position();
        let native = rtl::to_visual(self.surface.scroll_left(), max, self.strategy);
        native + self.current_translate_offset()
    }

    /// Scroll by `delta` visual pixels. Negative values scroll back.
    pub fn increment_scroll(&mut self, delta: f64) {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite scroll increment {}", delta);
            return;
        }
        if delta == 0.0 {
            return;
        }
        let target = self.get_scroll_position() + delta;
        self.scroll_to(target);
    }

    /// Animate to a visual position, clamped to the scrollable range.
    ///
    /// An animation already in flight is resolved first. Targets within the
    /// configured epsilon of the current position do nothing.
    pub fn scroll_to(&mut self, target: f64) {
        if !target.is_finite() {
            log::warn!("Ignoring non-finite scroll target {}", target);
            return;
        }
        if self.is_animating() {
            self.stop_animation();
        }

        let max = self.max_scroll_position();
        let current = self.get_scroll_position();
        let delta = target.clamp(0.0, max) - current;
        if delta.abs() <= self.config.epsilon {
            return;
        }

        let Some(transform) = Transform::translate(self.direction.physical_translation(delta)) else {
            return;
        };

        let frame = ScrollAnimationFrame {
            start_native_position: self.surface.scroll_left(),
            target_visual_delta: delta,
        };
        self.surface
            .add_class(Part::Root, &self.config.animating_class);
        self.surface
            .set_style(Part::Content, TRANSFORM_PROPERTY, &transform.to_string());
        self.sync.arm(&mut self.surface);
        self.state = ScrollerState::Animating(frame);
        log::debug!("Scrolling from {} by {}", current, delta);
    }

    /// Stop an in-flight animation where it currently is.
    pub fn handle_interaction(&mut self) {
        if self.is_animating() {
            self.stop_animation();
        }
    }

    /// Deliver an event registered on the scroller's surface.
    ///
    /// Returns `true` if the event changed the scroller.
    pub fn handle_event(&mut self, listener: ListenerId, event: &SurfaceEvent) -> bool {
        match self.sync.classify(&mut self.surface, listener, event) {
            SyncSignal::Settled => {
                self.finish_animation();
                true
            }
            SyncSignal::Interrupted(kind) => {
                log::debug!("Scroll animation interrupted by {:?}", kind);
                self.stop_animation();
                true
            }
            SyncSignal::Ignored => false,
        }
    }

    /// The surface this scroller renders to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release every listener.
    pub fn detach(&mut self) {
        self.sync.release(&mut self.surface);
    }

    /// Visual offset contributed by the content transform while animating.
    fn current_translate_offset(&self) -> f64 {
        if !self.is_animating() {
            return 0.0;
        }
        self.surface
            .computed_style(Part::Content, TRANSFORM_PROPERTY)
            .and_then(|value| parse_translate_x(&value))
            .map(|tx| self.direction.logical_offset(tx))
            .unwrap_or(0.0)
    }

    fn finish_animation(&mut self) {
        let ScrollerState::Animating(frame) = self.state else {
            return;
        };
        let max = self.max_scroll_position();
        let start = rtl::to_visual(frame.start_native_position, max, self.strategy);
        self.settle_at(start + frame.target_visual_delta);
        log::debug!("Scroll animation settled at {}", self.get_scroll_position());
    }

    fn stop_animation(&mut self) {
        if !self.is_animating() {
            return;
        }
        let visual = self.get_scroll_position();
        self.sync.cancel(&mut self.surface);
        self.settle_at(visual);
    }

    fn settle_at(&mut self, visual: f64) {
        let max = self.max_scroll_position();
        let native = rtl::to_native(visual.clamp(0.0, max), max, self.strategy);

        self.surface
            .remove_class(Part::Root, &self.config.animating_class);
        self.surface.set_style(
            Part::Content,
            TRANSFORM_PROPERTY,
            &Transform::IDENTITY.to_string(),
        );
        self.surface.set_scroll_left(native);
        self.state = ScrollerState::Idle;
    }
}

impl<S: Surface> Drop for TabScroller<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstrip_core::geometry::OffsetMetrics;
    use tabstrip_core::headless::{HeadlessSurface, Mutation};
    use tabstrip_core::surface::EventKind;

    fn scroller(area: f64, content: f64) -> TabScroller<HeadlessSurface> {
        let mut surface = HeadlessSurface::new();
        surface.set_offset_metrics(Part::Area, OffsetMetrics::new(0.0, area));
        surface.set_offset_metrics(Part::Content, OffsetMetrics::new(0.0, content));
        surface.set_scroll_range(0.0, (content - area).max(0.0));
        let config = ScrollerConfig {
            direction: LayoutDirection::Ltr,
            ..ScrollerConfig::default()
        };
        TabScroller::attach(surface, &config).unwrap()
    }

    fn settle(scroller: &mut TabScroller<HeadlessSurface>) {
        let (id, event) = scroller
            .surface()
            .pending_event(Part::Content, EventKind::TransitionEnd)
            .unwrap();
        assert!(scroller.handle_event(id, &event));
    }

    #[test]
    fn test_attach_requires_parts() {
        let surface = HeadlessSurface::new().without_part(Part::Area);
        assert!(matches!(
            TabScroller::attach(surface, &ScrollerConfig::default()),
            Err(TabStripError::MissingElement(Part::Area))
        ));
    }

    #[test]
    fn test_attach_hides_scrollbar() {
        let mut surface = HeadlessSurface::new();
        surface.set_scrollbar_height(17.0);
        let scroller = TabScroller::attach(surface, &ScrollerConfig::default()).unwrap();

        assert_eq!(scroller.scrollbar_height(), 17.0);
        assert_eq!(scroller.surface().style(Part::Area, "margin-bottom"), Some("-17px"));
        assert!(scroller
            .surface()
            .has_class(Part::Area, "tab-scroller__scroll-area--scroll"));
    }

    #[test]
    fn test_attach_resolves_auto_direction() {
        let mut surface = HeadlessSurface::new();
        surface.set_computed_style(Part::Root, "direction", "rtl");
        let config = ScrollerConfig {
            rtl_strategy: Some(RtlScrollStrategy::Negative),
            ..ScrollerConfig::default()
        };
        let scroller = TabScroller::attach(surface, &config).unwrap();
        assert_eq!(scroller.direction(), LayoutDirection::Rtl);
        assert_eq!(scroller.rtl_strategy(), RtlScrollStrategy::Negative);
    }

    #[test]
    fn test_scroll_to_current_is_noop() {
        let mut scroller = scroller(300.0, 500.0);
        scroller.surface_mut().clear_mutations();
        let listeners = scroller.surface().listener_count();

        scroller.scroll_to(0.0);
        assert!(scroller.surface().mutations().is_empty());
        assert_eq!(scroller.surface().listener_count(), listeners);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_scroll_to_animates_then_snaps() {
        let mut scroller = scroller(300.0, 500.0);
        scroller.surface_mut().clear_mutations();
        scroller.scroll_to(120.0);

        assert!(scroller.is_animating());
        assert_eq!(scroller.surface().scroll_left(), 0.0);
        assert_eq!(
            scroller.surface().style(Part::Content, "transform"),
            Some("translateX(-120px)")
        );
        assert!(scroller.surface().has_class(Part::Root, "tab-scroller--animating"));
        assert_eq!(
            scroller.state(),
            ScrollerState::Animating(ScrollAnimationFrame {
                start_native_position: 0.0,
                target_visual_delta: 120.0,
            })
        );

        settle(&mut scroller);
        assert!(!scroller.is_animating());
        assert_eq!(scroller.surface().scroll_left(), 120.0);
        assert_eq!(scroller.surface().style(Part::Content, "transform"), Some("none"));
        assert!(!scroller.surface().has_class(Part::Root, "tab-scroller--animating"));
        assert_eq!(scroller.get_scroll_position(), 120.0);
    }

    #[test]
    fn test_scroll_to_clamps() {
        let mut scroller = scroller(300.0, 400.0);
        scroller.surface_mut().scroll_natively(60.0);

        scroller.scroll_to(-50.0);
        settle(&mut scroller);
        assert_eq!(scroller.get_scroll_position(), 0.0);

        scroller.scroll_to(500.0);
        settle(&mut scroller);
        assert_eq!(scroller.get_scroll_position(), 100.0);
    }

    #[test]
    fn test_content_narrower_than_area() {
        let mut scroller = scroller(300.0, 200.0);
        assert_eq!(scroller.max_scroll_position(), 0.0);
        scroller.scroll_to(50.0);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_interaction_interrupts() {
        let mut scroller = scroller(300.0, 500.0);
        scroller.scroll_to(150.0);
        scroller
            .surface_mut()
            .set_computed_style(Part::Content, "transform", "matrix(1, 0, 0, 1, -42, 0)");
        assert_eq!(scroller.get_scroll_position(), 42.0);

        let (transition, _) = scroller
            .surface()
            .pending_event(Part::Content, EventKind::TransitionEnd)
            .unwrap();
        let (id, event) = scroller
            .surface()
            .pending_event(Part::Area, EventKind::PointerDown)
            .unwrap();
        assert!(scroller.handle_event(id, &event));

        assert!(!scroller.is_animating());
        assert!(!scroller.surface().is_listening(transition));
        assert!(scroller
            .surface()
            .mutations()
            .contains(&Mutation::Unlisten(transition)));
        assert_eq!(scroller.surface().scroll_left(), 42.0);
        assert_eq!(scroller.get_scroll_position(), 42.0);
    }

    #[test]
    fn test_new_target_resolves_in_flight() {
        let mut scroller = scroller(300.0, 500.0);
        scroller.scroll_to(100.0);
        let (first, _) = scroller
            .surface()
            .pending_event(Part::Content, EventKind::TransitionEnd)
            .unwrap();

        // The headless transform jumps to its end value, so the in-flight
        // position is the previous target.
        scroller.scroll_to(180.0);
        assert!(!scroller.surface().is_listening(first));
        assert_eq!(scroller.surface().scroll_left(), 100.0);
        assert_eq!(
            scroller.state(),
            ScrollerState::Animating(ScrollAnimationFrame {
                start_native_position: 100.0,
                target_visual_delta: 80.0,
            })
        );
    }

    #[test]
    fn test_non_finite_target_ignored() {
        let mut scroller = scroller(300.0, 500.0);
        scroller.surface_mut().clear_mutations();
        scroller.scroll_to(f64::NAN);
        scroller.increment_scroll(f64::INFINITY);
        assert!(scroller.surface().mutations().is_empty());
    }

    #[test]
    fn test_detach_releases_listeners() {
        let mut scroller = scroller(300.0, 500.0);
        scroller.scroll_to(100.0);
        assert_eq!(scroller.surface().listener_count(), 6);
        scroller.detach();
        assert_eq!(scroller.surface().listener_count(), 0);
    }
}
