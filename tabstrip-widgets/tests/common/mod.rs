//! Builders shared by the scenario tests.

#![allow(dead_code)]

use tabstrip_core::config::{IndicatorConfig, ScrollerConfig, TabConfig};
use tabstrip_core::geometry::{ClientRect, OffsetMetrics};
use tabstrip_core::headless::HeadlessSurface;
use tabstrip_core::surface::{EventKind, Part};
use tabstrip_widgets::indicator::TabIndicator;
use tabstrip_widgets::scroller::TabScroller;
use tabstrip_widgets::tab::Tab;

pub const TAB_WIDTH: f64 = 100.0;

/// A tab with a sliding indicator whose content rect is `indicator`.
pub fn tab(id: &str, root_left: f64, indicator: ClientRect, active: bool) -> Tab<HeadlessSurface> {
    let indicator_config = IndicatorConfig::default();
    let mut indicator_surface =
        HeadlessSurface::new().with_class(Part::Root, &indicator_config.slide_class);
    indicator_surface.set_client_rect(Part::Content, indicator);
    if active {
        indicator_surface = indicator_surface.with_class(Part::Root, &indicator_config.active_class);
    }
    let indicator = TabIndicator::attach(indicator_surface, &indicator_config).unwrap();

    let tab_config = TabConfig::default();
    let mut surface = HeadlessSurface::new();
    if active {
        surface = surface.with_class(Part::Root, &tab_config.active_class);
    }
    surface.set_offset_metrics(Part::Root, OffsetMetrics::new(root_left, TAB_WIDTH));
    surface.set_offset_metrics(Part::Content, OffsetMetrics::new(10.0, TAB_WIDTH - 20.0));

    let mut tab = Tab::attach(id, surface, indicator, &tab_config).unwrap();
    tab.surface_mut().clear_mutations();
    tab
}

/// `count` tabs laid out left to right, or right to left when `rtl` is set.
/// The first tab is active.
pub fn tabs(count: usize, rtl: bool) -> Vec<Tab<HeadlessSurface>> {
    let content = count as f64 * TAB_WIDTH;
    (0..count)
        .map(|i| {
            let logical_left = i as f64 * TAB_WIDTH;
            let left = if rtl {
                content - logical_left - TAB_WIDTH
            } else {
                logical_left
            };
            let indicator = ClientRect::new(left + 10.0, 46.0, TAB_WIDTH - 20.0, 2.0);
            tab(&format!("tab-{i}"), left, indicator, i == 0)
        })
        .collect()
}

/// A scroller with the given area and content widths.
pub fn scroller(area: f64, content: f64, config: &ScrollerConfig) -> TabScroller<HeadlessSurface> {
    let mut surface = HeadlessSurface::new();
    surface.set_offset_metrics(Part::Area, OffsetMetrics::new(0.0, area));
    surface.set_offset_metrics(Part::Content, OffsetMetrics::new(0.0, content));
    TabScroller::attach(surface, config).unwrap()
}

/// Fire the pending transition end on the scroller content.
pub fn settle(scroller: &mut TabScroller<HeadlessSurface>) {
    let (id, event) = scroller
        .surface()
        .pending_event(Part::Content, EventKind::TransitionEnd)
        .expect("no scroll animation pending");
    assert!(scroller.handle_event(id, &event));
}
