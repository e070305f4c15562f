#![warn(missing_docs)]

//! Tab, indicator and scroller state machines for tabstrip => See `tabstrip` crate.
//!
//! Every widget owns the [Surface](tabstrip_core::surface::Surface) it renders
//! to and releases its listeners when detached or dropped.

/// Contains the activation indicator.
pub mod indicator;

/// Contains the horizontal tab scroller.
pub mod scroller;

/// Contains the coordination of tabs with a scroller.
pub mod strip;

/// Contains a single tab.
pub mod tab;
