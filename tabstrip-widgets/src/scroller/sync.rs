// SPDX-License-Identifier: LGPL-3.0-only

//! Decides when an animated scroll may be finalized.
//!
//! An animation settles on the content's transition-end, or is interrupted by
//! the user taking over. Interactions while nothing is animating are dropped.

use tabstrip_core::subscription::{OneShot, Subscriptions};
use tabstrip_core::surface::{EventKind, ListenerId, Part, Surface, SurfaceEvent};

/// What an incoming event means for an animated scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncSignal {
    /// The animation finished.
    Settled,
    /// The user interacted while the animation was running.
    Interrupted(EventKind),
    /// Nothing to do.
    Ignored,
}

/// Interaction listeners plus a one-shot transition-end listener.
#[derive(Debug)]
pub struct TransitionSync {
    interactions: Subscriptions,
    transition_end: OneShot,
    transition_part: Part,
}

impl TransitionSync {
    /// Listen for user interaction on `interaction_part`. Transition ends are
    /// awaited on `transition_part` once [arm](Self::arm)ed.
    pub fn attach<S: Surface + ?Sized>(
        surface: &mut S,
        interaction_part: Part,
        transition_part: Part,
    ) -> Self {
        let mut interactions = Subscriptions::new();
        for kind in EventKind::INTERACTIONS {
            interactions.listen(surface, interaction_part, kind);
        }

        Self {
            interactions,
            transition_end: OneShot::new(),
            transition_part,
        }
    }

    /// Start waiting for the next transition end.
    pub fn arm<S: Surface + ?Sized>(&mut self, surface: &mut S) -> ListenerId {
        self.transition_end
            .arm(surface, self.transition_part, EventKind::TransitionEnd)
    }

    /// Check if a transition end is awaited.
    pub fn is_armed(&self) -> bool {
        self.transition_end.is_armed()
    }

    /// Stop waiting for the transition end.
    pub fn cancel<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.transition_end.cancel(surface)
    }

    /// Classify an event delivered by the host.
    pub fn classify<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        listener: ListenerId,
        event: &SurfaceEvent,
    ) -> SyncSignal {
        if event.kind == EventKind::TransitionEnd {
            return if self.transition_end.fire(surface, listener) {
                SyncSignal::Settled
            } else {
                SyncSignal::Ignored
            };
        }

        if event.kind.is_interaction() && self.interactions.contains(listener) && self.is_armed() {
            return SyncSignal::Interrupted(event.kind);
        }

        SyncSignal::Ignored
    }

    /// Release every listener.
    pub fn release<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.transition_end.cancel(surface);
        self.interactions.release(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstrip_core::headless::HeadlessSurface;

    #[test]
    fn test_interaction_while_idle_is_ignored() {
        let mut surface = HeadlessSurface::new();
        let mut sync = TransitionSync::attach(&mut surface, Part::Area, Part::Content);
        let (id, event) = surface.pending_event(Part::Area, EventKind::Wheel).unwrap();

        assert_eq!(sync.classify(&mut surface, id, &event), SyncSignal::Ignored);
    }

    #[test]
    fn test_interaction_while_armed_interrupts() {
        let mut surface = HeadlessSurface::new();
        let mut sync = TransitionSync::attach(&mut surface, Part::Area, Part::Content);
        sync.arm(&mut surface);
        let (id, event) = surface.pending_event(Part::Area, EventKind::KeyDown).unwrap();

        assert_eq!(
            sync.classify(&mut surface, id, &event),
            SyncSignal::Interrupted(EventKind::KeyDown)
        );
    }

    #[test]
    fn test_transition_end_settles_once() {
        let mut surface = HeadlessSurface::new();
        let mut sync = TransitionSync::attach(&mut surface, Part::Area, Part::Content);
        sync.arm(&mut surface);
        let (id, event) = surface
            .pending_event(Part::Content, EventKind::TransitionEnd)
            .unwrap();

        assert_eq!(sync.classify(&mut surface, id, &event), SyncSignal::Settled);
        assert_eq!(sync.classify(&mut surface, id, &event), SyncSignal::Ignored);
        assert!(!sync.is_armed());
    }

    #[test]
    fn test_release() {
        let mut surface = HeadlessSurface::new();
        let mut sync = TransitionSync::attach(&mut surface, Part::Area, Part::Content);
        sync.arm(&mut surface);
        assert_eq!(surface.listener_count(), 6);

        sync.release(&mut surface);
        assert_eq!(surface.listener_count(), 0);
    }
}
