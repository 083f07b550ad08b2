//! Utility modules for browser access and display formatting.
//!
//! Provides:
//! - [`dom`] - Window and host global access
//! - [`fetch_text`] - Network fetching over the Fetch API
//! - [`format`] - Size and date formatting
//! - [`log`] - Console logging

pub mod dom;
pub mod fetch;
pub mod format;
pub mod log;

pub use fetch::fetch_text;
