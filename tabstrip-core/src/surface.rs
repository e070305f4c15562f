// SPDX-License-Identifier: LGPL-3.0-only

//! The boundary between the tab-strip engine and whatever renders it.
//!
//! Widgets never touch a rendering technology directly. They issue requests
//! through [Surface] and receive geometry synchronously, or events later when
//! the host calls back into the widget's `handle_event`.

use std::fmt;

use crate::geometry::{ClientRect, OffsetMetrics};

/// An element a widget addresses on its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The widget's root element.
    Root,
    /// The content element (tab content, indicator content, scroll content).
    Content,
    /// The scrollable area of a scroller.
    Area,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Part::Root => "root",
            Part::Content => "content",
            Part::Area => "scroll area",
        };
        f.write_str(name)
    }
}

/// Events a widget may listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary activation of an element.
    Click,
    /// Mouse wheel or trackpad scroll.
    Wheel,
    /// Start of a touch.
    TouchStart,
    /// Pointer pressed.
    PointerDown,
    /// Mouse button pressed.
    MouseDown,
    /// Key pressed.
    KeyDown,
    /// A CSS transition finished.
    TransitionEnd,
}

impl EventKind {
    /// Events that signal the user taking over scrolling.
    pub const INTERACTIONS: [EventKind; 5] = [
        EventKind::Wheel,
        EventKind::TouchStart,
        EventKind::PointerDown,
        EventKind::MouseDown,
        EventKind::KeyDown,
    ];

    /// Check if this event is a user interaction that interrupts animations.
    pub fn is_interaction(&self) -> bool {
        Self::INTERACTIONS.contains(self)
    }
}

/// Handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a raw id handed out by a surface.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// An event delivered by the host to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceEvent {
    /// What happened.
    pub kind: EventKind,
    /// The element the listener was registered on.
    pub target: Part,
}

impl SurfaceEvent {
    /// Create a new event.
    pub fn new(kind: EventKind, target: Part) -> Self {
        Self { kind, target }
    }
}

/// Capabilities the engine requires from its host.
///
/// Geometry and style queries must reflect the latest layout. Class mutation
/// is idempotent. Registered listeners stay live until
/// [unlisten](Surface::unlisten) is called with their id.
pub trait Surface {
    /// Check if the element exists.
    fn has_part(&self, part: Part) -> bool;

    /// Add a class to an element.
    fn add_class(&mut self, part: Part, class: &str);

    /// Remove a class from an element.
    fn remove_class(&mut self, part: Part, class: &str);

    /// Check if an element has a class.
    fn has_class(&self, part: Part, class: &str) -> bool;

    /// Set an attribute on an element.
    fn set_attribute(&mut self, part: Part, name: &str, value: &str);

    /// Remove an attribute from an element.
    fn remove_attribute(&mut self, part: Part, name: &str);

    /// Current bounding box of an element.
    fn client_rect(&self, part: Part) -> ClientRect;

    /// Current offset metrics of an element.
    fn offset_metrics(&self, part: Part) -> OffsetMetrics;

    /// Set an inline style property. An empty value removes it.
    fn set_style(&mut self, part: Part, property: &str, value: &str);

    /// Read a computed style property.
    fn computed_style(&self, part: Part, property: &str) -> Option<String>;

    /// Native horizontal scroll offset of the scroll area.
    fn scroll_left(&self) -> f64;

    /// Set the native horizontal scroll offset of the scroll area.
    fn set_scroll_left(&mut self, value: f64);

    /// Register a listener for an event on an element.
    fn listen(&mut self, part: Part, kind: EventKind) -> ListenerId;

    /// Deregister a listener. Unknown ids are ignored.
    fn unlisten(&mut self, id: ListenerId);

    /// Move input focus to the root element.
    fn focus(&mut self);

    /// Check if the root element holds input focus.
    fn has_focus(&self) -> bool;

    /// Height of a horizontal scrollbar in the host document.
    fn horizontal_scrollbar_height(&self) -> f64;
}

macro_rules! forward_surface {
    ($($ty:ty),*) => {$(
        impl<S: Surface + ?Sized> Surface for $ty {
            fn has_part(&self, part: Part) -> bool {
                (**self).has_part(part)
            }

            fn add_class(&mut self, part: Part, class: &str) {
                (**self).add_class(part, class)
            }

            fn remove_class(&mut self, part: Part, class: &str) {
                (**self).remove_class(part, class)
            }

            fn has_class(&self, part: Part, class: &str) -> bool {
                (**self).has_class(part, class)
            }

            fn set_attribute(&mut self, part: Part, name: &str, value: &str) {
                (**self).set_attribute(part, name, value)
            }

            fn remove_attribute(&mut self, part: Part, name: &str) {
                (**self).remove_attribute(part, name)
            }

            fn client_rect(&self, part: Part) -> ClientRect {
                (**self).client_rect(part)
            }

            fn offset_metrics(&self, part: Part) -> OffsetMetrics {
                (**self).offset_metrics(part)
            }

            fn set_style(&mut self, part: Part, property: &str, value: &str) {
                (**self).set_style(part, property, value)
            }

            fn computed_style(&self, part: Part, property: &str) -> Option<String> {
                (**self).computed_style(part, property)
            }

            fn scroll_left(&self) -> f64 {
                (**self).scroll_left()
            }

            fn set_scroll_left(&mut self, value: f64) {
                (**self).set_scroll_left(value)
            }

            fn listen(&mut self, part: Part, kind: EventKind) -> ListenerId {
                (**self).listen(part, kind)
            }

            fn unlisten(&mut self, id: ListenerId) {
                (**self).unlisten(id)
            }

            fn focus(&mut self) {
                (**self).focus()
            }

            fn has_focus(&self) -> bool {
                (**self).has_focus()
            }

            fn horizontal_scrollbar_height(&self) -> f64 {
                (**self).horizontal_scrollbar_height()
            }
        }
    )*};
}

forward_surface!(Box<S>, &mut S);

/// A boxed surface, for hosts mixing surface implementations.
pub type BoxedSurface = Box<dyn Surface>;
