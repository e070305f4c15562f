// SPDX-License-Identifier: LGPL-3.0-only

//! # Tab Strip Configuration
//!
//! Class names, attribute names and behavior knobs for every widget in a
//! strip. Each section falls back to its defaults when omitted, so a config
//! file only has to name what it changes:
//!
//! ```toml
//! [tab]
//! focus_on_activate = false
//!
//! [indicator]
//! style = "fading"
//!
//! [scroller]
//! direction = "rtl"
//! rtl_strategy = "negative"
//! ```
//!
//! The file can be pointed to with the `TABSTRIP_CONFIG` environment variable,
//! see [TabStripConfig::from_env_or_default].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabStripError};
use crate::layout::LayoutDirection;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "TABSTRIP_CONFIG";

/// Configuration for a whole tab strip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStripConfig {
    /// Tab settings.
    pub tab: TabConfig,
    /// Indicator settings.
    pub indicator: IndicatorConfig,
    /// Scroller settings.
    pub scroller: ScrollerConfig,
    /// Coordination settings.
    pub strip: StripConfig,
}

/// Tab settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    /// If a tab should take input focus when activated.
    pub focus_on_activate: bool,
    /// Class marking the active tab.
    pub active_class: String,
    /// Attribute carrying the selected state.
    pub selected_attribute: String,
    /// Attribute carrying the tab order.
    pub tabindex_attribute: String,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            focus_on_activate: true,
            active_class: "tab--active".to_string(),
            selected_attribute: "aria-selected".to_string(),
            tabindex_attribute: "tabindex".to_string(),
        }
    }
}

/// How an indicator animates between tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStyle {
    /// Detect from the indicator root's classes.
    #[default]
    Auto,
    /// Slide and stretch from the previous indicator.
    Sliding,
    /// Fade in place.
    Fading,
}

/// Indicator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// The activation style.
    pub style: IndicatorStyle,
    /// Root class selecting the sliding style under [IndicatorStyle::Auto].
    pub slide_class: String,
    /// Root class selecting the fading style under [IndicatorStyle::Auto].
    pub fade_class: String,
    /// Class marking the active indicator.
    pub active_class: String,
    /// Class suppressing transitions while the inverted transform is painted.
    pub no_transition_class: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            style: IndicatorStyle::Auto,
            slide_class: "tab-indicator--slide".to_string(),
            fade_class: "tab-indicator--fade".to_string(),
            active_class: "tab-indicator--active".to_string(),
            no_transition_class: "tab-indicator--no-transition".to_string(),
        }
    }
}

/// Native scroll conventions under right-to-left layout.
///
/// Declared here so it can be configured; the mapping itself lives with the scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RtlScrollStrategy {
    /// Native position equals visual position.
    Default,
    /// Native position is the negated visual position.
    Negative,
    /// Native position is measured from the opposite edge.
    Reverse,
}

/// Scroller settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Layout direction of the scroller.
    pub direction: LayoutDirection,
    /// Skip the RTL probe and use this strategy.
    pub rtl_strategy: Option<RtlScrollStrategy>,
    /// Scroll deltas smaller than this are ignored, in pixels.
    pub epsilon: f64,
    /// Pull the scroll area down by the scrollbar height to hide the scrollbar.
    pub hide_scrollbar: bool,
    /// Class on the scroller root while content is animating.
    pub animating_class: String,
    /// Class on the scroll area once scrollbar hiding is applied.
    pub scroll_area_class: String,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::Auto,
            rtl_strategy: None,
            epsilon: 0.5,
            hide_scrollbar: true,
            animating_class: "tab-scroller--animating".to_string(),
            scroll_area_class: "tab-scroller__scroll-area--scroll".to_string(),
        }
    }
}

/// Coordination settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Extra pixels revealed past a tab when scrolling it into view.
    pub extra_scroll_amount: f64,
    /// Activate tabs as keyboard focus moves, instead of on Enter/Space.
    pub automatic_activation: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            extra_scroll_amount: 20.0,
            automatic_activation: true,
        }
    }
}

impl TabStripConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| TabStripError::ConfigParse("<inline>".into(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            fs::read_to_string(path).map_err(|e| TabStripError::ConfigRead(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&source)
            .map_err(|e| TabStripError::ConfigParse(path.to_path_buf(), e.to_string()))?;
        config.validate()?;
        log::debug!("Loaded tab strip config from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `TABSTRIP_CONFIG`, or fall back to defaults.
    ///
    /// A file that fails to load is reported and ignored.
    pub fn from_env_or_default() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {}", CONFIG_ENV_VAR, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| TabStripError::InvalidConfig(e.to_string()))
    }

    /// Check numeric settings.
    pub fn validate(&self) -> Result<()> {
        let epsilon = self.scroller.epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(TabStripError::InvalidConfig(format!(
                "scroller.epsilon must be a non-negative number, got {epsilon}"
            )));
        }

        let extra = self.strip.extra_scroll_amount;
        if !extra.is_finite() || extra < 0.0 {
            return Err(TabStripError::InvalidConfig(format!(
                "strip.extra_scroll_amount must be a non-negative number, got {extra}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TabStripConfig::default();
        assert!(config.tab.focus_on_activate);
        assert_eq!(config.indicator.style, IndicatorStyle::Auto);
        assert_eq!(config.scroller.direction, LayoutDirection::Auto);
        assert_eq!(config.scroller.rtl_strategy, None);
        assert_eq!(config.strip.extra_scroll_amount, 20.0);
    }

    #[test]
    fn test_partial_toml() {
        let config = TabStripConfig::from_toml_str(
            r#"
            [tab]
            focus_on_activate = false

            [indicator]
            style = "fading"

            [scroller]
            direction = "rtl"
            rtl_strategy = "reverse"
            "#,
        )
        .unwrap();

        assert!(!config.tab.focus_on_activate);
        assert_eq!(config.tab.active_class, "tab--active");
        assert_eq!(config.indicator.style, IndicatorStyle::Fading);
        assert_eq!(config.scroller.direction, LayoutDirection::Rtl);
        assert_eq!(config.scroller.rtl_strategy, Some(RtlScrollStrategy::Reverse));
        assert_eq!(config.scroller.epsilon, 0.5);
    }

    #[test]
    fn test_invalid_values() {
        let err = TabStripConfig::from_toml_str("[scroller]\nepsilon = -1.0\n").unwrap_err();
        assert!(matches!(err, TabStripError::InvalidConfig(_)));

        let err = TabStripConfig::from_toml_str("[indicator]\nstyle = \"bouncy\"\n").unwrap_err();
        assert!(matches!(err, TabStripError::ConfigParse(..)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[strip]\nautomatic_activation = false").unwrap();

        let config = TabStripConfig::from_file(file.path()).unwrap();
        assert!(!config.strip.automatic_activation);

        let missing = TabStripConfig::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(TabStripError::ConfigRead(..))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = TabStripConfig::default();
        config.scroller.rtl_strategy = Some(RtlScrollStrategy::Negative);
        let source = config.to_toml_string().unwrap();
        assert_eq!(TabStripConfig::from_toml_str(&source).unwrap(), config);
    }
}
