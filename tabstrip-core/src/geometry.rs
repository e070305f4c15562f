// SPDX-License-Identifier: LGPL-3.0-only

//! Geometry snapshots exchanged with a [Surface](crate::surface::Surface).
//!
//! All values are in pixels. Nothing here talks to a surface; the types only
//! describe measurements that a surface produced.

/// An immutable bounding box snapshot of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    /// Distance from the top edge of the viewport.
    pub top: f64,
    /// Distance from the left edge of the viewport to the right edge of the box.
    pub right: f64,
    /// Distance from the top edge of the viewport to the bottom edge of the box.
    pub bottom: f64,
    /// Distance from the left edge of the viewport.
    pub left: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

impl ClientRect {
    /// Create a rect from its origin and size. `right` and `bottom` are derived.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            right: left + width,
            bottom: top + height,
            left,
            width,
            height,
        }
    }

    /// Check that every component is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.top,
            self.right,
            self.bottom,
            self.left,
            self.width,
            self.height,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Check if the rect cannot take part in an animation.
    ///
    /// Non-finite rects, rects without a positive width (detached or hidden
    /// elements report an all-zero box) and rects lying entirely left of the
    /// viewport are degenerate.
    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.width <= 0.0 || self.right <= 0.0
    }
}

/// Offset metrics of an element relative to its offset parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetMetrics {
    /// Offset from the left edge of the offset parent.
    pub left: f64,
    /// Layout width of the element.
    pub width: f64,
}

impl OffsetMetrics {
    /// Create new offset metrics.
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Replace non-finite and negative values with zero.
    pub fn sanitized(self) -> Self {
        Self {
            left: non_negative(self.left),
            width: non_negative(self.width),
        }
    }
}

/// Horizontal extents of a tab and its content, relative to the tab list.
///
/// Always satisfies `root_left <= content_left <= content_right <= root_right`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabDimensions {
    /// Left edge of the tab root.
    pub root_left: f64,
    /// Right edge of the tab root.
    pub root_right: f64,
    /// Left edge of the tab content.
    pub content_left: f64,
    /// Right edge of the tab content.
    pub content_right: f64,
}

impl TabDimensions {
    /// Build dimensions from the root's offsets and the content's offsets
    /// (the latter relative to the root).
    ///
    /// Content that overhangs the root is clamped into it so the ordering
    /// invariant holds for any input a surface may report.
    pub fn from_offsets(root: OffsetMetrics, content: OffsetMetrics) -> Self {
        let root = root.sanitized();
        let content = content.sanitized();

        let root_left = root.left;
        let root_right = root_left + root.width;
        let content_left = (root_left + content.left).clamp(root_left, root_right);
        let content_right = (content_left + content.width).clamp(content_left, root_right);

        Self {
            root_left,
            root_right,
            content_left,
            content_right,
        }
    }

    /// Width of the tab root.
    pub fn root_width(&self) -> f64 {
        self.root_right - self.root_left
    }

    /// Width of the tab content.
    pub fn content_width(&self) -> f64 {
        self.content_right - self.content_left
    }

    /// Mirror the dimensions inside a container of the given width.
    ///
    /// Used to express right-to-left tab positions as distances from the
    /// logical start of the container.
    pub fn mirrored(&self, container_width: f64) -> Self {
        Self {
            root_left: container_width - self.root_right,
            root_right: container_width - self.root_left,
            content_left: container_width - self.content_right,
            content_right: container_width - self.content_left,
        }
    }
}

/// The horizontal transform that maps one rect onto another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectDelta {
    /// Horizontal translation in pixels.
    pub translate_x: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
}

impl RectDelta {
    /// Compute the delta that makes `to` look like `from`.
    ///
    /// Returns `None` when either rect is degenerate or the result is not finite.
    pub fn between(from: &ClientRect, to: &ClientRect) -> Option<Self> {
        if from.is_degenerate() || to.is_degenerate() {
            return None;
        }

        let delta = Self {
            translate_x: from.left - to.left,
            scale_x: from.width / to.width,
        };

        (delta.translate_x.is_finite() && delta.scale_x.is_finite()).then_some(delta)
    }

    /// Check if applying the delta would not move or resize anything.
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0 && self.scale_x == 1.0
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
