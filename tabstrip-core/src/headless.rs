// SPDX-License-Identifier: LGPL-3.0-only

//! An in-memory [Surface] for headless hosts and tests.
//!
//! Geometry is whatever the host puts in. Every mutation the engine requests
//! is applied to the in-memory element state and appended to a log, so the
//! exact request sequence can be inspected afterwards.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use crate::geometry::{ClientRect, OffsetMetrics};
use crate::surface::{EventKind, ListenerId, Part, Surface, SurfaceEvent};

/// A mutation requested through the surface contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// A class was added.
    AddClass(Part, String),
    /// A class was removed.
    RemoveClass(Part, String),
    /// An attribute was set.
    SetAttribute(Part, String, String),
    /// An attribute was removed.
    RemoveAttribute(Part, String),
    /// An inline style was set.
    SetStyle(Part, String, String),
    /// The native scroll offset was set.
    SetScrollLeft(f64),
    /// A listener was registered.
    Listen(ListenerId, Part, EventKind),
    /// A listener was deregistered.
    Unlisten(ListenerId),
    /// Focus was requested.
    Focus,
}

#[derive(Debug, Default)]
struct Element {
    classes: IndexSet<String>,
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    computed: IndexMap<String, String>,
    rect: ClientRect,
    offsets: OffsetMetrics,
}

/// In-memory surface recording every request.
#[derive(Debug)]
pub struct HeadlessSurface {
    elements: HashMap<Part, Element>,
    listeners: IndexMap<ListenerId, (Part, EventKind)>,
    next_listener: u64,
    scroll_left: f64,
    scroll_range: Option<(f64, f64)>,
    focused: bool,
    scrollbar_height: f64,
    log: Vec<Mutation>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    /// Create a surface where root, content and area all exist.
    pub fn new() -> Self {
        let elements = [Part::Root, Part::Content, Part::Area]
            .into_iter()
            .map(|part| (part, Element::default()))
            .collect();

        Self {
            elements,
            listeners: IndexMap::new(),
            next_listener: 1,
            scroll_left: 0.0,
            scroll_range: None,
            focused: false,
            scrollbar_height: 0.0,
            log: Vec::new(),
        }
    }

    /// Remove an element from the surface.
    pub fn without_part(mut self, part: Part) -> Self {
        self.elements.remove(&part);
        self
    }

    /// Add a class without recording a mutation, as initial markup.
    pub fn with_class(mut self, part: Part, class: &str) -> Self {
        if let Some(element) = self.elements.get_mut(&part) {
            element.classes.insert(class.to_string());
        }
        self
    }

    /// Set the bounding box reported for an element.
    pub fn set_client_rect(&mut self, part: Part, rect: ClientRect) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.rect = rect;
        }
    }

    /// Set the offset metrics reported for an element.
    pub fn set_offset_metrics(&mut self, part: Part, metrics: OffsetMetrics) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.offsets = metrics;
        }
    }

    /// Override a computed style value.
    ///
    /// Without an override, the computed value of a property is its inline value.
    pub fn set_computed_style(&mut self, part: Part, property: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.computed.insert(property.to_string(), value.to_string());
        }
    }

    /// Remove a computed style override.
    pub fn clear_computed_style(&mut self, part: Part, property: &str) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.computed.shift_remove(property);
        }
    }

    /// Clamp native scroll offsets into `[min, max]`, like a real scroll area does.
    ///
    /// Bounds given in either order are accepted. A NaN bound removes the range.
    pub fn set_scroll_range(&mut self, min: f64, max: f64) {
        if min.is_nan() || max.is_nan() {
            log::warn!("Ignoring scroll range with NaN bound: [{}, {}]", min, max);
            self.scroll_range = None;
            return;
        }
        self.scroll_range = Some((min.min(max), min.max(max)));
        self.scroll_left = self.clamp_scroll(self.scroll_left);
    }

    /// Set the native scroll offset without recording a mutation, as a user scroll would.
    pub fn scroll_natively(&mut self, value: f64) {
        self.scroll_left = self.clamp_scroll(value);
    }

    /// Set the height reported by the scrollbar probe.
    pub fn set_scrollbar_height(&mut self, height: f64) {
        self.scrollbar_height = height;
    }

    /// Every mutation recorded so far, in request order.
    pub fn mutations(&self) -> &[Mutation] {
        &self.log
    }

    /// Take the recorded mutations, leaving the log empty.
    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.log)
    }

    /// Forget the recorded mutations.
    pub fn clear_mutations(&mut self) {
        self.log.clear();
    }

    /// Classes currently on an element, in insertion order.
    pub fn classes(&self, part: Part) -> Vec<&str> {
        self.elements
            .get(&part)
            .map(|e| e.classes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Current value of an attribute.
    pub fn attribute(&self, part: Part, name: &str) -> Option<&str> {
        self.elements
            .get(&part)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Current inline value of a style property.
    pub fn style(&self, part: Part, property: &str) -> Option<&str> {
        self.elements
            .get(&part)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    /// Check if a listener is registered.
    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The first registered listener for an event on an element, with the
    /// event the host would deliver to it.
    pub fn pending_event(&self, part: Part, kind: EventKind) -> Option<(ListenerId, SurfaceEvent)> {
        self.listeners
            .iter()
            .find(|(_, (p, k))| *p == part && *k == kind)
            .map(|(id, _)| (*id, SurfaceEvent::new(kind, part)))
    }

    fn clamp_scroll(&self, value: f64) -> f64 {
        match self.scroll_range {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}

impl Surface for HeadlessSurface {
    fn has_part(&self, part: Part) -> bool {
        self.elements.contains_key(&part)
    }

    fn add_class(&mut self, part: Part, class: &str) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.classes.insert(class.to_string());
            self.log.push(Mutation::AddClass(part, class.to_string()));
        }
    }

    fn remove_class(&mut self, part: Part, class: &str) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.classes.shift_remove(class);
            self.log.push(Mutation::RemoveClass(part, class.to_string()));
        }
    }

    fn has_class(&self, part: Part, class: &str) -> bool {
        self.elements
            .get(&part)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn set_attribute(&mut self, part: Part, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.attributes.insert(name.to_string(), value.to_string());
            self.log
                .push(Mutation::SetAttribute(part, name.to_string(), value.to_string()));
        }
    }

    fn remove_attribute(&mut self, part: Part, name: &str) {
        if let Some(element) = self.elements.get_mut(&part) {
            element.attributes.shift_remove(name);
            self.log.push(Mutation::RemoveAttribute(part, name.to_string()));
        }
    }

    fn client_rect(&self, part: Part) -> ClientRect {
        self.elements.get(&part).map(|e| e.rect).unwrap_or_default()
    }

    fn offset_metrics(&self, part: Part) -> OffsetMetrics {
        self.elements.get(&part).map(|e| e.offsets).unwrap_or_default()
    }

    fn set_style(&mut self, part: Part, property: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&part) {
            if value.is_empty() {
                element.styles.shift_remove(property);
            } else {
                element.styles.insert(property.to_string(), value.to_string());
            }
            self.log
                .push(Mutation::SetStyle(part, property.to_string(), value.to_string()));
        }
    }

    fn computed_style(&self, part: Part, property: &str) -> Option<String> {
        let element = self.elements.get(&part)?;
        element
            .computed
            .get(property)
            .or_else(|| element.styles.get(property))
            .cloned()
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, value: f64) {
        self.scroll_left = self.clamp_scroll(value);
        self.log.push(Mutation::SetScrollLeft(value));
    }

    fn listen(&mut self, part: Part, kind: EventKind) -> ListenerId {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (part, kind));
        self.log.push(Mutation::Listen(id, part, kind));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        if self.listeners.shift_remove(&id).is_some() {
            self.log.push(Mutation::Unlisten(id));
        }
    }

    fn focus(&mut self) {
        self.focused = true;
        self.log.push(Mutation::Focus);
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn horizontal_scrollbar_height(&self) -> f64 {
        self.scrollbar_height
    }
}
