// SPDX-License-Identifier: LGPL-3.0-only

//! A single selectable tab.
//!
//! The tab's `active` flag is the source of truth; classes and attributes on
//! the surface are projected from it. Which tab is active across a strip is
//! decided by the owner of the tabs, see [TabStrip](crate::strip::TabStrip).

use tabstrip_core::config::TabConfig;
use tabstrip_core::geometry::{ClientRect, TabDimensions};
use tabstrip_core::subscription::Subscriptions;
use tabstrip_core::surface::{EventKind, ListenerId, Part, Surface, SurfaceEvent};
use tabstrip_core::{Result, TabStripError};

use crate::indicator::TabIndicator;

/// State owned by a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    /// If the tab is the active one.
    pub active: bool,
    /// If activation moves input focus to the tab.
    pub focus_on_activate: bool,
}

/// Raised when the user interacts with a tab.
///
/// Only signals interest in becoming active; the tab itself does not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInteraction {
    /// Id of the tab that was interacted with.
    pub tab_id: String,
}

/// A tab attached to a surface, owning its indicator.
pub struct Tab<S: Surface, I: Surface = S> {
    id: String,
    surface: S,
    indicator: TabIndicator<I>,
    state: TabState,
    config: TabConfig,
    listeners: Subscriptions,
}

impl<S: Surface, I: Surface> Tab<S, I> {
    /// Attach a tab to its surface.
    ///
    /// The initial active state is read from the root's active class, and the
    /// selected/tabindex attributes are synced to it.
    pub fn attach(
        id: impl Into<String>,
        mut surface: S,
        indicator: TabIndicator<I>,
        config: &TabConfig,
    ) -> Result<Self> {
        if !surface.has_part(Part::Content) {
            return Err(TabStripError::MissingElement(Part::Content));
        }

        let active = surface.has_class(Part::Root, &config.active_class);
        let mut listeners = Subscriptions::new();
        listeners.listen(&mut surface, Part::Root, EventKind::Click);

        let mut tab = Self {
            id: id.into(),
            surface,
            indicator,
            state: TabState {
                active,
                focus_on_activate: config.focus_on_activate,
            },
            config: config.clone(),
            listeners,
        };
        tab.project_attributes();
        Ok(tab)
    }

    /// The tab's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current state.
    pub fn state(&self) -> TabState {
        self.state
    }

    /// Check if the tab is active.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Set whether later activations move focus to the tab.
    pub fn set_focus_on_activate(&mut self, focus_on_activate: bool) {
        self.state.focus_on_activate = focus_on_activate;
    }

    /// Activate the tab, handing the previous indicator rect to its indicator.
    ///
    /// No-op if the tab is already active.
    pub fn activate(&mut self, previous_indicator_rect: Option<&ClientRect>) {
        if self.state.active {
            log::debug!("Tab '{}' is already active", self.id);
            return;
        }

        self.state.active = true;
        self.surface.add_class(Part::Root, &self.config.active_class);
        self.project_attributes();
        self.indicator.activate(previous_indicator_rect);
        if self.state.focus_on_activate {
            self.surface.focus();
        }
    }

    /// Deactivate the tab. No-op if the tab is not active. Focus is left alone.
    pub fn deactivate(&mut self) {
        if !self.state.active {
            return;
        }

        self.state.active = false;
        self.surface
            .remove_class(Part::Root, &self.config.active_class);
        self.project_attributes();
        self.indicator.deactivate();
    }

    /// Signal that the user interacted with the tab.
    pub fn handle_interaction(&self) -> TabInteraction {
        TabInteraction {
            tab_id: self.id.clone(),
        }
    }

    /// Horizontal extents of the tab and its content.
    pub fn compute_dimensions(&self) -> TabDimensions {
        TabDimensions::from_offsets(
            self.surface.offset_metrics(Part::Root),
            self.surface.offset_metrics(Part::Content),
        )
    }

    /// Bounding box of this tab's indicator content.
    pub fn compute_indicator_client_rect(&self) -> ClientRect {
        self.indicator.compute_content_client_rect()
    }

    /// Move input focus to the tab.
    pub fn focus(&mut self) {
        self.surface.focus();
    }

    /// Deliver an event registered on the tab's surface.
    ///
    /// Returns the interaction notification for clicks.
    pub fn handle_event(&mut self, listener: ListenerId, event: &SurfaceEvent) -> Option<TabInteraction> {
        if event.kind == EventKind::Click && self.listeners.contains(listener) {
            return Some(self.handle_interaction());
        }
        None
    }

    /// Deliver an event registered on the indicator's surface.
    pub fn handle_indicator_event(&mut self, listener: ListenerId, event: &SurfaceEvent) -> bool {
        self.indicator.handle_event(listener, event)
    }

    /// The tab's indicator.
    pub fn indicator(&self) -> &TabIndicator<I> {
        &self.indicator
    }

    /// Mutable access to the tab's indicator.
    pub fn indicator_mut(&mut self) -> &mut TabIndicator<I> {
        &mut self.indicator
    }

    /// The surface this tab renders to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release every listener of the tab and its indicator.
    pub fn detach(&mut self) {
        self.listeners.release(&mut self.surface);
        self.indicator.detach();
    }

    fn project_attributes(&mut self) {
        let (selected, tabindex) = if self.state.active {
            ("true", "0")
        } else {
            ("false", "-1")
        };
        self.surface
            .set_attribute(Part::Root, &self.config.selected_attribute, selected);
        self.surface
            .set_attribute(Part::Root, &self.config.tabindex_attribute, tabindex);
    }
}

impl<S: Surface, I: Surface> Drop for Tab<S, I> {
    fn drop(&mut self) {
        self.listeners.release(&mut self.surface);
    }
}
