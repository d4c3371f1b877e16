//! Formatting helpers shared by the CLI and the TUI
//!
//! All functions here are pure: they take values and return strings.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::Money;

/// Label shown for an expense whose category id is not in the catalog
pub const UNKNOWN_CATEGORY: &str = "Sin categoría";

/// Icon identifier used for unknown categories
pub const UNKNOWN_ICON: &str = "gastos";

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Currency amount with symbol and thousands separators (`$1,234.56`)
pub fn format_currency(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Long Spanish date (`sábado, 9 de marzo de 2024`)
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Pattern used when a configured one cannot be rendered
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short date using a strftime pattern from the settings
///
/// An unrenderable pattern falls back to `%Y-%m-%d`.
pub fn format_date_short(date: NaiveDate, pattern: &str) -> String {
    let mut output = String::new();
    if write!(output, "{}", date.format(pattern)).is_err() {
        output = date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    output
}

/// Percentage with two decimals (`33.33%`)
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Horizontal bar filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to `max_chars` characters, ending with an ellipsis when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let head: String = s.chars().take(max_chars - 1).collect();
    format!("{}…", head)
}
