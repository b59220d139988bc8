//! Reusable formatting utilities for CLI output
//!
//! Number, time and size formatting shared by the report and the cache
//! commands.

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Thousands grouped with dots: `28875` → `28.875`
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// `UTC+02:00` style offset label
pub fn format_utc_offset(offset_secs: i32) -> String {
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Wall-clock time at the location: `dd.mm.yyyy HH:MM`.
///
/// Falls back to UTC when the offset is out of range.
pub fn format_local_time(instant: DateTime<Utc>, offset_secs: i32) -> String {
    match FixedOffset::east_opt(offset_secs) {
        Some(offset) => instant.with_timezone(&offset).format("%d.%m.%Y %H:%M").to_string(),
        None => instant.format("%d.%m.%Y %H:%M").to_string(),
    }
}

/// Timestamp in the user's own time zone
pub fn format_timestamp_local(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Square kilometres, `N/A` when unknown
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(area) => format!("{} km²", format_population(area.round() as u64)),
        None => "N/A".to_string(),
    }
}

/// Price of one unit of a quoted currency in the base currency, to the cent.
///
/// `rate` is how much of the quoted currency one base unit buys. Halves round
/// up. `None` for a zero, negative or non-finite rate.
pub fn format_inverse_rate(rate: f64) -> Option<String> {
    if !rate.is_finite() || rate <= 0.0 {
        return None;
    }
    let cents = (100.0 / rate).round();
    Some(format!("{:.2}", cents / 100.0))
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Coarse age such as `3h 12m` or `2d 4h`
pub fn format_age(age: chrono::TimeDelta) -> String {
    let secs = age.num_seconds().max(0);
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let mins = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else if mins > 0 {
        format!("{}m", mins)
    } else {
        format!("{}s", secs)
    }
}
