//! Helper functions and utilities
//!
//! Formatting helpers used by the message templates.

use chrono::{DateTime, Utc};

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Group the digits of an integer amount with commas: `1234567` -> `1,234,567`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a whole-dollar amount: `$1,234,567`
pub fn format_usd(value: u64) -> String {
    format!("${}", format_thousands(value))
}

/// Format a token price with six decimals: `$0.012345`
pub fn format_token_price(price: f64) -> String {
    format!("${price:.6}")
}

/// Format a percentage with an explicit sign: `+1.23%`, `-4.50%`
pub fn format_signed_percent(value: f64) -> String {
    // -0.00 would otherwise render with a minus sign
    let rounded = (value * 100.0).round() / 100.0;
    if rounded >= 0.0 {
        format!("+{:.2}%", rounded.abs())
    } else {
        format!("{rounded:.2}%")
    }
}
