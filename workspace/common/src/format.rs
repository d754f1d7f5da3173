//! Display formatting for dashboard values.
//!
//! Every formatter takes an `Option` and renders [`PLACEHOLDER`] for a missing
//! value, so a sparse KPI payload never breaks a card.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Formatter, Money, Params, iso};

/// Rendered in place of a missing value.
pub const PLACEHOLDER: &str = "—";

/// Integer with thousands separators, e.g. `1234` -> `"1,234"`.
pub fn format_integer(value: Option<i64>) -> String {
    match value {
        Some(v) => group_thousands(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Canadian dollars rounded to whole units, e.g. `5821.5` -> `"$5,822"`.
pub fn format_currency(amount: Option<Decimal>) -> String {
    let Some(amount) = amount else {
        return PLACEHOLDER.to_string();
    };

    // Halves round away from zero, like a browser number format
    let amount = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let money = Money::from_decimal(amount, iso::CAD);
    let params = Params {
        rounding: Some(0),
        symbol: Some("$"),
        ..Default::default()
    };
    Formatter::money(&money, params)
}

/// Ratio rendered as a percentage with one decimal, e.g. `0.125` -> `"12.5%"`.
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r.is_finite() => format!("{:.1}%", r * 100.0),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Duration in minutes with one decimal, e.g. `47.25` -> `"47.3 min"`.
pub fn format_minutes(minutes: Option<f64>) -> String {
    match minutes {
        Some(m) if m.is_finite() => format!("{:.1} min", m),
        _ => format!("{} min", PLACEHOLDER),
    }
}

/// Hour of day as a clock label, e.g. `18` -> `"18:00"`.
pub fn format_hour(hour: Option<u8>) -> String {
    match hour {
        Some(h) => format!("{}:00", h),
        None => format!("{}:00", PLACEHOLDER),
    }
}

/// `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses the value of a date input (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
