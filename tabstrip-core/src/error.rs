// SPDX-License-Identifier: LGPL-3.0-only

//! Attach-time and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::surface::Part;

/// Errors raised while attaching widgets or loading configuration.
///
/// Runtime operations on attached widgets never fail; they degrade to no-ops.
#[derive(Debug, Error)]
pub enum TabStripError {
    /// A required element is absent from the surface.
    #[error("Missing required element: {0}")]
    MissingElement(Part),

    /// The indicator is neither sliding nor fading.
    #[error("Unsupported indicator variant: {0}")]
    UnsupportedVariant(String),

    /// Failed to read a configuration file.
    #[error("Failed to read config file {0}: {1}")]
    ConfigRead(PathBuf, std::io::Error),

    /// Failed to parse a configuration file.
    #[error("Failed to parse config file {0}: {1}")]
    ConfigParse(PathBuf, String),

    /// A configuration value is out of range.
    #[error("Invalid config value: {0}")]
    InvalidConfig(String),

    /// A tab index does not address a tab in the strip.
    #[error("Tab index {index} out of range for {len} tabs")]
    TabIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of tabs in the strip.
        len: usize,
    },
}

/// Result type used across tabstrip.
pub type Result<T> = std::result::Result<T, TabStripError>;
