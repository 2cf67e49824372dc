//! Formatting helpers shared by every view

use std::fmt::Write;

use crate::config::Settings;

/// Presentation settings threaded through the formatters
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

impl DisplayOptions {
    /// Format an amount with the currency symbol, two decimals and
    /// thousands separators, e.g. `-$1,234.50`
    pub fn money(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = group_thousands(cents / 100);
        format!("{}{}{}.{:02}", sign, self.currency_symbol, whole, cents % 100)
    }

    /// Format a date with the configured format, falling back to
    /// `YYYY-MM-DD` when the format is not valid strftime
    pub fn date(&self, date: chrono::NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a percentage with one decimal
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
