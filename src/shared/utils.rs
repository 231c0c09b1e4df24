//! Utility functions and helpers

use chrono::{DateTime, Utc};

/// Format a price with six decimal places, as used in report lines
pub fn format_price(value: f64) -> String {
    format!("{:.6}", value)
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
