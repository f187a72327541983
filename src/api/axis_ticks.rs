use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{first_of_month, naive_date_to_unix_seconds};
use crate::core::{BandScale, TimeScale, ValueScale, category_label};
use crate::error::ChartResult;

use super::axis_label_format::{
    MONTH_YEAR_PATTERN, format_time_pattern, format_value_tick, year_of,
};

/// Spans at or above this length get one tick per N years instead of
/// bimonthly ticks.
const YEAR_TICK_MIN_SPAN_SECS: f64 = 3.0 * 365.0 * 86_400.0;
const YEAR_TICK_STEPS: [i32; 7] = [1, 2, 5, 10, 20, 50, 100];
const MONTH_TICK_STEP: u32 = 2;
const TIME_AXIS_MIN_TICKS: usize = 2;
const TIME_AXIS_MAX_TICKS: usize = 12;

/// One resolved axis tick: its domain value, pixel position along the axis
/// and display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
}

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Calendar ticks for a continuous time axis.
///
/// Long spans tick on years aligned to a 1/2/5 step; shorter spans tick on
/// the first of every other month starting in January. When nothing aligned
/// falls inside the domain the domain start gets the only tick.
pub(super) fn time_axis_ticks(scale: TimeScale, target_spacing_px: f64) -> ChartResult<Vec<AxisTick>> {
    let (range_start, range_end) = scale.range();
    let max_ticks = axis_tick_target_count(
        (range_end - range_start).abs(),
        target_spacing_px,
        TIME_AXIS_MIN_TICKS,
        TIME_AXIS_MAX_TICKS,
    );
    let (start, end) = scale.domain();
    let year_level = scale.span_secs() >= YEAR_TICK_MIN_SPAN_SECS;

    let values = if year_level {
        year_tick_values(start, end, max_ticks)?
    } else {
        month_tick_values(start, end)?
    };

    let mut ticks = Vec::with_capacity(values.len().max(1));
    for value in values {
        ticks.push(AxisTick {
            value,
            pixel: scale.time_to_pixel(value)?,
            label: time_tick_label(value, year_level)?,
        });
    }
    if ticks.is_empty() {
        ticks.push(AxisTick {
            value: start,
            pixel: scale.time_to_pixel(start)?,
            label: time_tick_label(start, year_level)?,
        });
    }
    Ok(ticks)
}

fn time_tick_label(value: f64, year_level: bool) -> ChartResult<String> {
    if year_level {
        Ok(year_of(value)?.to_string())
    } else {
        format_time_pattern(value, MONTH_YEAR_PATTERN)
    }
}

fn year_tick_values(start: f64, end: f64, max_ticks: usize) -> ChartResult<Vec<f64>> {
    let first_year = year_of(start)?;
    let last_year = year_of(end)?;
    let year_count = usize::try_from(last_year - first_year + 1).unwrap_or(1);
    let step = YEAR_TICK_STEPS
        .iter()
        .copied()
        .find(|step| year_count.div_ceil(*step as usize) <= max_ticks)
        .unwrap_or(YEAR_TICK_STEPS[YEAR_TICK_STEPS.len() - 1]);

    let mut values = Vec::new();
    let mut year = first_year.div_euclid(step) * step;
    while year <= last_year {
        let value = first_of_month(year, 1)?;
        if value >= start && value <= end {
            values.push(value);
        }
        year += step;
    }
    Ok(values)
}

fn month_tick_values(start: f64, end: f64) -> ChartResult<Vec<f64>> {
    let first_year = year_of(start)?;
    let mut cursor = NaiveDate::from_ymd_opt(first_year, 1, 1);
    let mut values = Vec::new();

    while let Some(date) = cursor {
        let value = naive_date_to_unix_seconds(date);
        if value > end {
            break;
        }
        if value >= start {
            values.push(value);
        }
        cursor = date.checked_add_months(chrono::Months::new(MONTH_TICK_STEP));
    }
    Ok(values)
}

/// Nicely stepped ticks for the value axis, starting at zero.
pub(super) fn value_axis_ticks(scale: ValueScale, tick_count: usize) -> ChartResult<Vec<AxisTick>> {
    let step = scale.tick_step(tick_count);
    scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| {
            Ok(AxisTick {
                value,
                pixel: scale.value_to_pixel(value)?,
                label: format_value_tick(value, step),
            })
        })
        .collect()
}

/// One tick per category, centered in its band.
pub(super) fn category_axis_ticks(scale: &BandScale) -> Vec<AxisTick> {
    scale
        .categories()
        .enumerate()
        .map(|(index, category)| AxisTick {
            value: category,
            pixel: scale.center_at(index),
            label: category_label(category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ordered_float::OrderedFloat;

    use super::{axis_tick_target_count, category_axis_ticks, time_axis_ticks};
    use crate::core::primitives::first_of_month;
    use crate::core::{BandScale, TimeScale};

    #[test]
    fn tick_target_count_is_clamped() {
        assert_eq!(axis_tick_target_count(0.0, 80.0, 2, 12), 2);
        assert_eq!(axis_tick_target_count(400.0, 80.0, 2, 12), 6);
        assert_eq!(axis_tick_target_count(4000.0, 80.0, 2, 12), 12);
    }

    #[test]
    fn multi_year_span_uses_year_labels() {
        let start = first_of_month(2010, 1).expect("start");
        let end = first_of_month(2020, 1).expect("end");
        let scale = TimeScale::new(start, end, 86_400.0, 0.0, 800.0).expect("scale");

        let ticks = time_axis_ticks(scale, 80.0).expect("ticks");
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("2010"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("2020"));
        assert!(ticks.windows(2).all(|pair| pair[0].pixel < pair[1].pixel));
    }

    #[test]
    fn short_span_uses_bimonthly_labels() {
        let start = first_of_month(2023, 1).expect("start");
        let end = first_of_month(2023, 12).expect("end");
        let scale = TimeScale::new(start, end, 86_400.0, 0.0, 800.0).expect("scale");

        let labels: Vec<String> = time_axis_ticks(scale, 80.0)
            .expect("ticks")
            .into_iter()
            .map(|tick| tick.label)
            .collect();
        assert_eq!(
            labels,
            ["Jan 2023", "Mar 2023", "May 2023", "Jul 2023", "Sep 2023", "Nov 2023"]
        );
    }

    #[test]
    fn degenerate_time_domain_still_gets_a_tick() {
        let instant = first_of_month(2023, 7).expect("instant") + 14.0 * 86_400.0;
        let scale = TimeScale::new(instant, instant, 86_400.0, 0.0, 800.0).expect("scale");

        let ticks = time_axis_ticks(scale, 80.0).expect("ticks");
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].label, "Jul 2023");
    }

    #[test]
    fn category_ticks_sit_on_band_centers() {
        let categories = [2020.0, 2021.0].into_iter().map(OrderedFloat).collect();
        let scale = BandScale::new(categories, 0.0, 100.0, 0.2).expect("band");
        let ticks = category_axis_ticks(&scale);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].label, "2020");
        assert!((ticks[0].pixel - scale.center_at(0)).abs() <= 1e-9);
    }
}
