use chrono::Datelike;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::primitives::unix_seconds_to_datetime;
use crate::error::ChartResult;

/// Month and year, e.g. `Mar 2021`.
pub(super) const MONTH_YEAR_PATTERN: &str = "%b %Y";
/// Numeric month and year, e.g. `03/2021`.
pub(super) const NUMERIC_MONTH_YEAR_PATTERN: &str = "%m/%Y";

/// Rainfall amount with exactly one decimal place.
///
/// Midpoints round away from zero, so `0.25` renders as `0.3`.
#[must_use]
pub fn format_rainfall_mm(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}")
        }
        None => format!("{value:.1}"),
    }
}

pub(super) fn format_time_pattern(seconds: f64, pattern: &str) -> ChartResult<String> {
    Ok(unix_seconds_to_datetime(seconds)?.format(pattern).to_string())
}

pub(super) fn year_of(seconds: f64) -> ChartResult<i32> {
    Ok(unix_seconds_to_datetime(seconds)?.year())
}

/// Value-axis label with precision derived from the tick step and `,`
/// thousands grouping: `1,200`, `0.5`.
#[must_use]
pub fn format_value_tick(value: f64, step: f64) -> String {
    let precision = precision_from_step(step);
    let text = format!("{value:.precision$}");
    let text = if text.trim_start_matches('-').chars().all(|ch| ch == '0' || ch == '.') {
        text.trim_start_matches('-').to_owned()
    } else {
        text
    };
    group_thousands(&text)
}

fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().clamp(0, 12)
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
