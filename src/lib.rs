#![warn(missing_docs)]

//! Headless tab-strip behavior for any rendering surface.
//!
//! Tabs activate and hand their indicator's rect to the next tab so it can
//! slide over, and a scroller keeps the active tab visible, normalizing
//! right-to-left scroll positions across platforms. Rendering is left to an
//! implementation of [Surface](core::surface::Surface).

pub use tabstrip_core as core;

/// Widgets module re-exporting the tab-strip state machines.
pub mod widgets {
    pub use tabstrip_widgets::*;
}

/// A "prelude" for users of tabstrip.
///
/// ```rust
/// use tabstrip::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::{
        IndicatorConfig, IndicatorStyle, RtlScrollStrategy, ScrollerConfig, StripConfig,
        TabConfig, TabStripConfig,
    };
    pub use crate::core::geometry::{ClientRect, OffsetMetrics, TabDimensions};
    pub use crate::core::headless::HeadlessSurface;
    pub use crate::core::layout::LayoutDirection;
    pub use crate::core::surface::{EventKind, ListenerId, Part, Surface, SurfaceEvent};
    pub use crate::core::{Result, TabStripError};

    pub use crate::widgets::indicator::{IndicatorKind, IndicatorState, TabIndicator};
    pub use crate::widgets::scroller::{ScrollerState, TabScroller};
    pub use crate::widgets::strip::{NavigationKey, TabStrip};
    pub use crate::widgets::tab::{Tab, TabInteraction};
}
