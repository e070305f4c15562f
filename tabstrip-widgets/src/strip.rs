// SPDX-License-Identifier: LGPL-3.0-only

//! Coordination of a set of tabs with one scroller.
//!
//! Keeps at most one tab active, hands the outgoing indicator's rect to the
//! incoming tab, and scrolls the newly active tab into view.

use std::collections::HashSet;

use tabstrip_core::config::StripConfig;
use tabstrip_core::geometry::TabDimensions;
use tabstrip_core::surface::{ListenerId, Surface, SurfaceEvent};
use tabstrip_core::{Result, TabStripError};

use crate::scroller::TabScroller;
use crate::tab::Tab;

/// Keys that move focus or activation within a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    /// Towards the left edge.
    ArrowLeft,
    /// Towards the right edge.
    ArrowRight,
    /// First tab.
    Home,
    /// Last tab.
    End,
    /// Activate the focused tab.
    Enter,
    /// Activate the focused tab.
    Space,
}

impl NavigationKey {
    /// Map a DOM-style key name to a navigation key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavigationKey::ArrowLeft),
            "ArrowRight" => Some(NavigationKey::ArrowRight),
            "Home" => Some(NavigationKey::Home),
            "End" => Some(NavigationKey::End),
            "Enter" => Some(NavigationKey::Enter),
            " " | "Spacebar" => Some(NavigationKey::Space),
            _ => None,
        }
    }

    fn activates(&self) -> bool {
        matches!(self, NavigationKey::Enter | NavigationKey::Space)
    }
}

/// A row of tabs and the scroller containing them.
pub struct TabStrip<S: Surface, I: Surface = S> {
    tabs: Vec<Tab<S, I>>,
    scroller: TabScroller<S>,
    active: Option<usize>,
    focused: Option<usize>,
    config: StripConfig,
}

impl<S: Surface, I: Surface> TabStrip<S, I> {
    /// Create a strip from attached tabs and their scroller.
    ///
    /// If several tabs start out active, all but the first are deactivated.
    pub fn new(mut tabs: Vec<Tab<S, I>>, scroller: TabScroller<S>, config: &StripConfig) -> Self {
        let mut seen = HashSet::new();
        if !tabs.iter().all(|tab| seen.insert(tab.id().to_string())) {
            log::warn!("TabStrip: Duplicate tab IDs detected");
        }

        let active = tabs.iter().position(Tab::is_active);
        if let Some(first) = active {
            for tab in tabs.iter_mut().skip(first + 1).filter(|tab| tab.is_active()) {
                log::warn!("TabStrip: Deactivating extra active tab '{}'", tab.id());
                tab.deactivate();
            }
        }

        Self {
            tabs,
            scroller,
            active,
            focused: active,
            config: config.clone(),
        }
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Check if the strip has no tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// All tabs, in order.
    pub fn tabs(&self) -> &[Tab<S, I>] {
        &self.tabs
    }

    /// The tab at `index`.
    pub fn tab(&self, index: usize) -> Option<&Tab<S, I>> {
        self.tabs.get(index)
    }

    /// Mutable access to the tab at `index`.
    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab<S, I>> {
        self.tabs.get_mut(index)
    }

    /// Index of the tab with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }

    /// The scroller.
    pub fn scroller(&self) -> &TabScroller<S> {
        &self.scroller
    }

    /// Mutable access to the scroller.
    pub fn scroller_mut(&mut self) -> &mut TabScroller<S> {
        &mut self.scroller
    }

    /// Index of the active tab.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Index of the tab holding keyboard focus within the strip.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Make the tab at `index` the active one and scroll it into view.
    ///
    /// The outgoing tab's indicator rect is captured before it is deactivated
    /// so the incoming indicator can slide from it. Activating the active tab
    /// does nothing.
    pub fn activate_tab(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if self.active == Some(index) {
            return Ok(());
        }

        let previous_rect = self
            .active
            .map(|previous| self.tabs[previous].compute_indicator_client_rect());
        if let Some(previous) = self.active {
            self.tabs[previous].deactivate();
        }
        self.tabs[index].activate(previous_rect.as_ref());
        self.active = Some(index);
        self.focused = Some(index);
        log::debug!("Activated tab '{}'", self.tabs[index].id());

        self.scroll_into_view(index)
    }

    /// Scroll just far enough that the tab at `index` and a bit of its
    /// neighbor towards the nearer edge are visible.
    pub fn scroll_into_view(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;

        if index == 0 {
            self.scroller.scroll_to(0.0);
        } else if index == self.tabs.len() - 1 {
            let end = self.scroller.scroll_content_width();
            self.scroller.scroll_to(end);
        } else if let Some(increment) = self.scroll_increment_for(index) {
            self.scroller.increment_scroll(increment);
        }
        Ok(())
    }

    /// Handle a navigation key. Returns the index focus moved to.
    pub fn handle_key(&mut self, key: NavigationKey) -> Result<Option<usize>> {
        if self.tabs.is_empty() {
            return Ok(None);
        }

        let origin = self.focused.or(self.active).unwrap_or(0);
        if key.activates() {
            self.activate_tab(origin)?;
            return Ok(Some(origin));
        }

        let target = navigation_target(key, origin, self.tabs.len(), self.scroller.direction().is_rtl());
        if self.config.automatic_activation {
            self.activate_tab(target)?;
        } else {
            self.focused = Some(target);
            self.tabs[target].focus();
            self.scroll_into_view(target)?;
        }
        Ok(Some(target))
    }

    /// Deliver an event registered on the surfaces of the tab at `index`.
    ///
    /// A click activates the tab. Returns `true` if the event was consumed.
    pub fn handle_tab_event(
        &mut self,
        index: usize,
        listener: ListenerId,
        event: &SurfaceEvent,
    ) -> Result<bool> {
        self.check_index(index)?;

        if self.tabs[index].handle_indicator_event(listener, event) {
            return Ok(true);
        }
        match self.tabs[index].handle_event(listener, event) {
            Some(interaction) => {
                log::debug!("Tab '{}' interacted", interaction.tab_id);
                self.activate_tab(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Deliver an event registered on the scroller's surface.
    pub fn handle_scroller_event(&mut self, listener: ListenerId, event: &SurfaceEvent) -> bool {
        self.scroller.handle_event(listener, event)
    }

    /// Release every listener of every tab and the scroller.
    pub fn detach(&mut self) {
        for tab in &mut self.tabs {
            tab.detach();
        }
        self.scroller.detach();
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            log::warn!("Tab index {} out of range", index);
            Err(TabStripError::TabIndexOutOfRange {
                index,
                len: self.tabs.len(),
            })
        }
    }

    /// Tab dimensions measured from the logical start of the content.
    fn logical_dimensions(&self, index: usize) -> TabDimensions {
        let dims = self.tabs[index].compute_dimensions();
        if self.scroller.direction().is_rtl() {
            dims.mirrored(self.scroller.scroll_content_width())
        } else {
            dims
        }
    }

    fn scroll_increment_for(&self, index: usize) -> Option<f64> {
        let scroll_position = self.scroller.get_scroll_position();
        let bar_width = self.scroller.scroll_area_width();

        let dims = self.logical_dimensions(index);
        let next = adjacent_index_closest_to_edge(index, &dims, scroll_position, bar_width)?;
        if next >= self.tabs.len() {
            return None;
        }

        let next_dims = self.logical_dimensions(next);
        Some(scroll_increment(
            index,
            next,
            &next_dims,
            scroll_position,
            bar_width,
            self.config.extra_scroll_amount,
        ))
    }
}

impl<S: Surface, I: Surface> Drop for TabStrip<S, I> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// The neighbor of `index` on the side whose edge the tab is closer to, or
/// `None` if the tab is comfortably inside the visible area.
fn adjacent_index_closest_to_edge(
    index: usize,
    dims: &TabDimensions,
    scroll_position: f64,
    bar_width: f64,
) -> Option<usize> {
    let relative_root_left = dims.root_left - scroll_position;
    let relative_root_right = dims.root_right - scroll_position - bar_width;
    let relative_root_delta = relative_root_left + relative_root_right;

    let start_edge_is_closer = relative_root_left < 0.0 || relative_root_delta < 0.0;
    let end_edge_is_closer = relative_root_right > 0.0 || relative_root_delta > 0.0;

    if start_edge_is_closer {
        index.checked_sub(1)
    } else if end_edge_is_closer {
        Some(index + 1)
    } else {
        None
    }
}

/// Visual scroll delta that reveals the content of `next` plus `extra` pixels.
fn scroll_increment(
    index: usize,
    next: usize,
    next_dims: &TabDimensions,
    scroll_position: f64,
    bar_width: f64,
    extra: f64,
) -> f64 {
    let relative_content_left = next_dims.content_left - scroll_position - bar_width;
    let relative_content_right = next_dims.content_right - scroll_position;

    if next < index {
        (relative_content_right - extra).min(0.0)
    } else {
        (relative_content_left + extra).max(0.0)
    }
}

fn navigation_target(key: NavigationKey, origin: usize, len: usize, rtl: bool) -> usize {
    let last = len - 1;
    let towards_start = matches!(
        (key, rtl),
        (NavigationKey::ArrowLeft, false) | (NavigationKey::ArrowRight, true)
    );
    let towards_end = matches!(
        (key, rtl),
        (NavigationKey::ArrowRight, false) | (NavigationKey::ArrowLeft, true)
    );

    if key == NavigationKey::End {
        last
    } else if towards_start {
        origin.checked_sub(1).unwrap_or(last)
    } else if towards_end {
        if origin >= last {
            0
        } else {
            origin + 1
        }
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(root_left: f64, root_right: f64) -> TabDimensions {
        TabDimensions {
            root_left,
            root_right,
            content_left: root_left + 10.0,
            content_right: root_right - 10.0,
        }
    }

    #[test]
    fn test_adjacent_index() {
        // Fully visible, centered.
        assert_eq!(adjacent_index_closest_to_edge(2, &dims(100.0, 200.0), 0.0, 300.0), None);
        // Cut off at the end.
        assert_eq!(adjacent_index_closest_to_edge(2, &dims(250.0, 350.0), 0.0, 300.0), Some(3));
        // Cut off at the start.
        assert_eq!(adjacent_index_closest_to_edge(2, &dims(50.0, 150.0), 100.0, 300.0), Some(1));
        assert_eq!(adjacent_index_closest_to_edge(0, &dims(50.0, 150.0), 100.0, 300.0), None);
    }

    #[test]
    fn test_scroll_increment() {
        // Revealing the next tab to the right.
        let next = dims(350.0, 450.0);
        assert_eq!(scroll_increment(2, 3, &next, 0.0, 300.0, 20.0), 80.0);

        // Revealing the previous tab to the left.
        let previous = dims(0.0, 100.0);
        assert_eq!(scroll_increment(2, 1, &previous, 150.0, 300.0, 20.0), -80.0);

        // Already visible neighbors never scroll the wrong way.
        assert_eq!(scroll_increment(2, 3, &dims(0.0, 50.0), 0.0, 300.0, 20.0), 0.0);
    }

    #[test]
    fn test_navigation_target() {
        assert_eq!(navigation_target(NavigationKey::ArrowRight, 1, 4, false), 2);
        assert_eq!(navigation_target(NavigationKey::ArrowLeft, 1, 4, false), 0);
        assert_eq!(navigation_target(NavigationKey::ArrowLeft, 0, 4, false), 3);
        assert_eq!(navigation_target(NavigationKey::ArrowRight, 3, 4, false), 0);
        assert_eq!(navigation_target(NavigationKey::ArrowLeft, 1, 4, true), 2);
        assert_eq!(navigation_target(NavigationKey::ArrowRight, 1, 4, true), 0);
        assert_eq!(navigation_target(NavigationKey::Home, 2, 4, false), 0);
        assert_eq!(navigation_target(NavigationKey::End, 0, 4, false), 3);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(NavigationKey::from_key_name("ArrowLeft"), Some(NavigationKey::ArrowLeft));
        assert_eq!(NavigationKey::from_key_name(" "), Some(NavigationKey::Space));
        assert_eq!(NavigationKey::from_key_name("Tab"), None);
    }
}
