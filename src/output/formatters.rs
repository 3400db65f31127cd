//! Reusable formatting utilities for CLI output
//!
//! Common formatting for timestamps and optional values shared across
//! commands.

use chrono::{DateTime, Local, Utc};

/// Placeholder for absent values in table output
pub const EMPTY: &str = "--";

/// Format a creation time as a local calendar date.
///
/// # Example output
/// `01/15/2025`
pub fn format_date_local(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%m/%d/%Y")
        .to_string()
}

/// Format a timestamp as local date and time with a zone abbreviation.
///
/// # Example output
/// `01/15/2025 14:30 PST`
pub fn format_timestamp_local(timestamp: &DateTime<Utc>) -> String {
    let local = timestamp.with_timezone(&Local);
    let date_time = local.format("%m/%d/%Y %H:%M").to_string();
    let tz_abbrev = offset_to_tz_abbrev(local.offset().local_minus_utc());
    format!("{} {}", date_time, tz_abbrev)
}

/// Convert UTC offset (seconds) to timezone abbreviation.
///
/// Maps common UTC offsets to standard timezone abbreviations. Falls back to
/// `UTC+N` format for uncommon offsets.
pub fn offset_to_tz_abbrev(offset_secs: i32) -> String {
    let offset_hours = offset_secs / 3600;
    let abbrev = match offset_hours {
        -10 => "HST",
        -9 => "AKST",
        -8 => "PST",
        -7 => "MST",
        -6 => "CST",
        -5 => "EST",
        0 => "UTC",
        1 => "CET",
        2 => "EET",
        9 => "JST",
        10 => "AEST",
        _ => return format!("UTC{:+}", offset_hours),
    };
    abbrev.to_string()
}

/// Show an optional value, or the placeholder when absent.
pub fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or(EMPTY).to_string()
}
