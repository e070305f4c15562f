// SPDX-License-Identifier: LGPL-3.0-only

//! Mapping between visual and native scroll positions under RTL.
//!
//! The visual position is the distance from the logical start of the content
//! and never negative. How a platform reports the native position of an RTL
//! scroll area differs, see [RtlScrollStrategy].

use tabstrip_core::surface::{Part, Surface};

pub use tabstrip_core::config::RtlScrollStrategy;

/// Convert a visual position to the native convention of `strategy`.
pub fn to_native(visual: f64, max: f64, strategy: RtlScrollStrategy) -> f64 {
    match strategy {
        RtlScrollStrategy::Default => visual,
        RtlScrollStrategy::Negative => -visual,
        RtlScrollStrategy::Reverse => max - visual,
    }
}

/// Convert a native position in the convention of `strategy` to a visual one.
pub fn to_visual(native: f64, max: f64, strategy: RtlScrollStrategy) -> f64 {
    match strategy {
        RtlScrollStrategy::Default => native,
        RtlScrollStrategy::Negative => -native,
        RtlScrollStrategy::Reverse => max - native,
    }
}

/// Detect the native convention of an RTL scroll area.
///
/// Nudges the native position by one pixel towards the left and watches
/// how the platform reports it, then restores the original position.
pub fn probe<S: Surface + ?Sized>(surface: &mut S) -> RtlScrollStrategy {
    let initial = surface.scroll_left();
    surface.set_scroll_left(initial - 1.0);
    let nudged = surface.scroll_left();

    // Only the negative convention reports positions below zero.
    if nudged < 0.0 {
        surface.set_scroll_left(initial);
        return RtlScrollStrategy::Negative;
    }

    let area = surface.client_rect(Part::Area);
    let content = surface.client_rect(Part::Content);
    let right_edge_delta = (content.right - area.right).round();
    surface.set_scroll_left(initial);

    // If the content has moved past the right edge by exactly the native
    // offset, the offset is measured from the start like visual positions.
    if right_edge_delta == nudged.round() {
        RtlScrollStrategy::Default
    } else {
        RtlScrollStrategy::Reverse
    }
}
