// SPDX-License-Identifier: LGPL-3.0-only

//! Listener handles with explicit release.

use crate::surface::{EventKind, ListenerId, Part, Surface};

/// A set of listeners that are released together.
///
/// Widgets keep one of these for their long-lived listeners and release it
/// when they are detached from their surface.
#[derive(Debug, Default)]
pub struct Subscriptions {
    ids: Vec<ListenerId>,
}

impl Subscriptions {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and keep its handle.
    pub fn listen<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        part: Part,
        kind: EventKind,
    ) -> ListenerId {
        let id = surface.listen(part, kind);
        self.ids.push(id);
        id
    }

    /// Check if a handle belongs to this set.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the set holds no handles.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Deregister every listener in the set.
    pub fn release<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for id in self.ids.drain(..) {
            surface.unlisten(id);
        }
    }
}

/// A listener that handles one event and then deregisters itself.
///
/// Arming again while armed deregisters the previous listener first, so at
/// most one handle is ever pending.
#[derive(Debug, Default)]
pub struct OneShot {
    pending: Option<ListenerId>,
}

impl OneShot {
    /// Create a disarmed one-shot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listener, replacing any pending one.
    pub fn arm<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        part: Part,
        kind: EventKind,
    ) -> ListenerId {
        self.cancel(surface);
        let id = surface.listen(part, kind);
        self.pending = Some(id);
        id
    }

    /// Check if a listener is pending.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending handle, if any.
    pub fn pending(&self) -> Option<ListenerId> {
        self.pending
    }

    /// Consume the pending listener if `id` is its handle.
    ///
    /// Returns `true` exactly once per arming.
    pub fn fire<S: Surface + ?Sized>(&mut self, surface: &mut S, id: ListenerId) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        surface.unlisten(id);
        true
    }

    /// Deregister the pending listener without firing it.
    ///
    /// Returns `true` if something was pending.
    pub fn cancel<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        match self.pending.take() {
            Some(id) => {
                surface.unlisten(id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;

    #[test]
    fn test_one_shot_fires_once() {
        let mut surface = HeadlessSurface::new();
        let mut shot = OneShot::new();
        let id = shot.arm(&mut surface, Part::Content, EventKind::TransitionEnd);

        assert_eq!(shot.pending(), Some(id));
        assert!(surface.is_listening(id));
        assert!(shot.fire(&mut surface, id));
        assert_eq!(shot.pending(), None);
        assert!(!surface.is_listening(id));
        assert!(!shot.fire(&mut surface, id));
    }

    #[test]
    fn test_one_shot_rearm_releases_previous() {
        let mut surface = HeadlessSurface::new();
        let mut shot = OneShot::new();
        let first = shot.arm(&mut surface, Part::Content, EventKind::TransitionEnd);
        let second = shot.arm(&mut surface, Part::Content, EventKind::TransitionEnd);

        assert!(!surface.is_listening(first));
        assert!(surface.is_listening(second));
        assert!(!shot.fire(&mut surface, first));
        assert_eq!(surface.listener_count(), 1);
    }

    #[test]
    fn test_one_shot_cancel() {
        let mut surface = HeadlessSurface::new();
        let mut shot = OneShot::new();
        assert!(!shot.cancel(&mut surface));

        let id = shot.arm(&mut surface, Part::Content, EventKind::TransitionEnd);
        assert!(shot.cancel(&mut surface));
        assert!(!surface.is_listening(id));
        assert!(!shot.is_armed());
    }

    #[test]
    fn test_subscriptions_release() {
        let mut surface = HeadlessSurface::new();
        let mut subs = Subscriptions::new();
        for kind in EventKind::INTERACTIONS {
            subs.listen(&mut surface, Part::Area, kind);
        }
        assert_eq!(subs.len(), 5);
        assert_eq!(surface.listener_count(), 5);

        subs.release(&mut surface);
        assert!(subs.is_empty());
        assert_eq!(surface.listener_count(), 0);
    }
}
