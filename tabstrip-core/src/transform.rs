// SPDX-License-Identifier: LGPL-3.0-only

//! Horizontal CSS transforms written to and read back from a surface.

use std::fmt;

use crate::geometry::RectDelta;

/// Name of the transform style property.
pub const TRANSFORM_PROPERTY: &str = "transform";

/// A horizontal translate followed by a horizontal scale.
///
/// Only finite transforms can be constructed, so formatting one never writes
/// `NaN` or `inf` into a style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translate_x: f64,
    scale_x: f64,
}

impl Transform {
    /// The transform that changes nothing.
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        scale_x: 1.0,
    };

    /// A pure horizontal translation. Returns `None` if `x` is not finite.
    pub fn translate(x: f64) -> Option<Self> {
        x.is_finite().then_some(Self {
            translate_x: x,
            scale_x: 1.0,
        })
    }

    /// The transform described by a rect delta.
    pub fn from_delta(delta: RectDelta) -> Option<Self> {
        (delta.translate_x.is_finite() && delta.scale_x.is_finite()).then_some(Self {
            translate_x: delta.translate_x,
            scale_x: delta.scale_x,
        })
    }

    /// Horizontal translation in pixels.
    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    /// Horizontal scale factor.
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Check if this is the identity transform.
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0 && self.scale_x == 1.0
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("none");
        }
        write!(f, "translateX({}px)", self.translate_x)?;
        if self.scale_x != 1.0 {
            write!(f, " scaleX({})", self.scale_x)?;
        }
        Ok(())
    }
}

/// Read the horizontal translation out of a transform style value.
///
/// Understands `none`, `matrix(a, b, c, d, tx, ty)`, `matrix3d(...)` and
/// `translateX(<n>px)`. Returns `None` for anything else, including values
/// that parse to a non-finite number.
pub fn parse_translate_x(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() || value == "none" {
        return Some(0.0);
    }

    let open = value.find('(')?;
    let close = value.rfind(')')?;
    if close <= open {
        return None;
    }
    let name = value[..open].trim();
    let args: Vec<&str> = value[open + 1..close].split(',').map(str::trim).collect();

    let raw = match (name, args.len()) {
        ("matrix", 6) => args[4],
        ("matrix3d", 16) => args[12],
        ("translateX", 1) | ("translate", 1) | ("translate", 2) => args[0],
        _ => return None,
    };

    let number = raw.strip_suffix("px").unwrap_or(raw).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Transform::IDENTITY.to_string(), "none");
        assert_eq!(Transform::translate(-50.0).unwrap().to_string(), "translateX(-50px)");

        let delta = RectDelta {
            translate_x: -200.0,
            scale_x: 0.5,
        };
        assert_eq!(
            Transform::from_delta(delta).unwrap().to_string(),
            "translateX(-200px) scaleX(0.5)"
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Transform::translate(f64::NAN).is_none());
        assert!(Transform::translate(f64::INFINITY).is_none());
        let delta = RectDelta {
            translate_x: 0.0,
            scale_x: f64::INFINITY,
        };
        assert!(Transform::from_delta(delta).is_none());
    }

    #[test]
    fn test_parse_translate_x() {
        assert_eq!(parse_translate_x("none"), Some(0.0));
        assert_eq!(parse_translate_x(""), Some(0.0));
        assert_eq!(parse_translate_x("matrix(1, 0, 0, 1, -20.5, 0)"), Some(-20.5));
        assert_eq!(
            parse_translate_x("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 12, 0, 0, 1)"),
            Some(12.0)
        );
        assert_eq!(parse_translate_x("translateX(-50px)"), Some(-50.0));
        assert_eq!(parse_translate_x("rotate(45deg)"), None);
        assert_eq!(parse_translate_x("matrix(1, 0, 0, 1, NaN, 0)"), None);
    }
}
