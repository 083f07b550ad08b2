//! Application configuration.
//!
//! Compile-time UI constants live here. Bucket settings come from globals
//! defined by the host page (see `index.html`) and are read once at startup
//! by [`load_explorer_config`].

use bucketview_core::{ConfigError, ExplorerConfig};

use crate::utils::dom;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page title area.
pub const APP_NAME: &str = "bucketview";

/// Prefix of the header brand, followed by the bucket name.
pub const BRAND_PREFIX: &str = "S3 file listing:";

// =============================================================================
// Bucket Configuration
// =============================================================================

/// Read the explorer configuration from `window` globals.
pub fn load_explorer_config() -> Result<ExplorerConfig, ConfigError> {
    ExplorerConfig::from_lookup(dom::global_string)
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Placeholder for the search box.
pub const SEARCH_PLACEHOLDER: &str = "Filter by name prefix";
