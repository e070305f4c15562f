// SPDX-License-Identifier: LGPL-3.0-only

use serde::{Deserialize, Serialize};

/// Text and layout direction of a tab strip.
///
/// Decides which physical edge the logical start of the strip sits on,
/// which matters for scroll normalization and keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left-to-right (LTR) layout direction.
    #[default]
    Ltr,

    /// Right-to-left (RTL) layout direction.
    ///
    /// Used for languages like Arabic, Hebrew, and Urdu.
    /// The strip starts at the right edge and scrolls towards the left.
    Rtl,

    /// Direction taken from the surface.
    ///
    /// Resolved once from the computed `direction` style of the root element.
    Auto,
}

impl LayoutDirection {
    /// Check if this is RTL direction.
    pub fn is_rtl(&self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }

    /// Check if this is LTR direction.
    pub fn is_ltr(&self) -> bool {
        matches!(self, LayoutDirection::Ltr)
    }

    /// Resolve `Auto` against a computed `direction` style value.
    ///
    /// Anything other than `rtl` resolves to LTR.
    pub fn resolve(&self, computed: Option<&str>) -> LayoutDirection {
        match self {
            LayoutDirection::Auto => match computed.map(str::trim) {
                Some(value) if value.eq_ignore_ascii_case("rtl") => LayoutDirection::Rtl,
                _ => LayoutDirection::Ltr,
            },
            other => *other,
        }
    }

    /// Convert a physical horizontal translation into a logical one.
    ///
    /// Moving content towards the logical end is a negative translation under
    /// LTR and a positive one under RTL.
    pub fn logical_offset(&self, translate_x: f64) -> f64 {
        if self.is_rtl() {
            translate_x
        } else {
            -translate_x
        }
    }

    /// Inverse of [logical_offset](Self::logical_offset).
    pub fn physical_translation(&self, logical: f64) -> f64 {
        if self.is_rtl() {
            logical
        } else {
            -logical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_auto() {
        assert_eq!(LayoutDirection::Auto.resolve(Some("rtl")), LayoutDirection::Rtl);
        assert_eq!(LayoutDirection::Auto.resolve(Some(" RTL ")), LayoutDirection::Rtl);
        assert_eq!(LayoutDirection::Auto.resolve(Some("ltr")), LayoutDirection::Ltr);
        assert_eq!(LayoutDirection::Auto.resolve(None), LayoutDirection::Ltr);
        assert_eq!(LayoutDirection::Rtl.resolve(Some("ltr")), LayoutDirection::Rtl);
    }

    #[test]
    fn test_logical_offset_round_trip() {
        for dir in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            let physical = dir.physical_translation(42.0);
            assert_eq!(dir.logical_offset(physical), 42.0);
        }
        assert_eq!(LayoutDirection::Ltr.physical_translation(10.0), -10.0);
        assert_eq!(LayoutDirection::Rtl.physical_translation(10.0), 10.0);
    }
}
