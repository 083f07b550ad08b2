//! UI components built with Leptos.
//!
//! - [`explorer`] - Bucket browser UI
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
