#![warn(missing_docs)]

//! Core library for tabstrip => See `tabstrip` crate.
//!
//! Contains the geometry model, the surface contract widgets talk through,
//! listener handles, configuration and errors.

/// Contains the [TabStripConfig](config::TabStripConfig) struct.
pub mod config;

/// Contains the [TabStripError](error::TabStripError) type.
pub mod error;

/// Contains geometry snapshots such as [ClientRect](geometry::ClientRect).
pub mod geometry;

/// Contains an in-memory surface for headless hosts and tests.
pub mod headless;

/// Contains layout direction handling.
pub mod layout;

/// Contains listener handles and the one-shot combinator.
pub mod subscription;

/// Contains the [Surface](surface::Surface) contract.
pub mod surface;

/// Contains CSS transform formatting and parsing.
pub mod transform;

pub use error::{Result, TabStripError};
