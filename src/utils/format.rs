//! Formatting utilities for object sizes and dates.

use chrono::{DateTime, Utc};

/// Format object size for display (e.g., "512B", "1.2K", "3.4M").
///
/// Decimal units, one fractional digit above bytes.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a modification time as `YYYY-MM-DD HH:MM` (UTC), or `-` if unknown.
pub fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}
