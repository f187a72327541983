use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::{first_of_month, parse_iso_date};
use crate::core::{Sample, Series};
use crate::error::{ChartError, ChartResult};

/// One month of accumulated rainfall as served by the dashboard backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAccumulation {
    #[serde(alias = "ano", deserialize_with = "deserialize_whole_number")]
    pub year: i32,
    #[serde(alias = "mes", deserialize_with = "deserialize_whole_number")]
    pub month: u32,
    #[serde(alias = "acumulado_mm")]
    pub accumulated_mm: f64,
}

/// One year of accumulated rainfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAccumulation {
    #[serde(alias = "ano", deserialize_with = "deserialize_whole_number")]
    pub year: i32,
    #[serde(alias = "acumulado_mm")]
    pub accumulated_mm: f64,
}

/// One forecast month with its confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    pub predicted_mm: f64,
    pub conf_int_lower: f64,
    pub conf_int_upper: f64,
    /// Comparison with the historical monthly mean, when the backend sends it.
    #[serde(default, alias = "tendencia")]
    pub trend: Option<String>,
}

/// Cached forecast document for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDocument {
    pub city: String,
    #[serde(default)]
    pub generated_at: Option<String>,
    /// First and last month of the history the forecast was fitted on.
    #[serde(default, alias = "temporal_serie_historical")]
    pub historical_range: Vec<String>,
    pub forecast: Vec<ForecastPoint>,
}

/// Monthly records become samples at midnight UTC on the first of the month.
pub fn monthly_series(records: &[MonthlyAccumulation]) -> ChartResult<Series> {
    let samples = records
        .iter()
        .map(|record| {
            Ok(Sample::new(
                first_of_month(record.year, record.month)?,
                record.accumulated_mm,
            ))
        })
        .collect::<ChartResult<Vec<_>>>()?;
    let series = Series::from_unsorted(samples)?;
    debug!(samples = series.len(), "normalized monthly payload");
    Ok(series)
}

/// Yearly records become category samples keyed by the year itself.
pub fn yearly_series(records: &[YearlyAccumulation]) -> ChartResult<Series> {
    let samples = records
        .iter()
        .map(|record| Sample::new(f64::from(record.year), record.accumulated_mm))
        .collect();
    let series = Series::from_unsorted(samples)?;
    debug!(samples = series.len(), "normalized yearly payload");
    Ok(series)
}

/// Forecast points become samples with confidence bounds.
///
/// Rainfall is never negative: the prediction and lower bound are clipped at
/// zero, and the upper bound is raised to the prediction if clipping pushed
/// it below.
pub fn forecast_series(points: &[ForecastPoint]) -> ChartResult<Series> {
    let samples = points
        .iter()
        .map(|point| {
            let predicted = point.predicted_mm.max(0.0);
            let lower = point.conf_int_lower.max(0.0).min(predicted);
            let upper = point.conf_int_upper.max(predicted);
            Ok(Sample::with_bounds(
                parse_iso_date(&point.date)?,
                predicted,
                lower,
                upper,
            ))
        })
        .collect::<ChartResult<Vec<_>>>()?;
    let series = Series::from_unsorted(samples)?;
    debug!(samples = series.len(), "normalized forecast payload");
    Ok(series)
}

pub fn monthly_series_from_json(input: &str) -> ChartResult<Series> {
    let records: Vec<MonthlyAccumulation> = parse_payload(input, "monthly")?;
    monthly_series(&records)
}

pub fn yearly_series_from_json(input: &str) -> ChartResult<Series> {
    let records: Vec<YearlyAccumulation> = parse_payload(input, "yearly")?;
    yearly_series(&records)
}

/// Accepts the full forecast document or a bare array of forecast points.
pub fn forecast_series_from_json(input: &str) -> ChartResult<Series> {
    if let Ok(document) = serde_json::from_str::<ForecastDocument>(input) {
        return forecast_series(&document.forecast);
    }
    let points: Vec<ForecastPoint> = parse_payload(input, "forecast")?;
    forecast_series(&points)
}

fn parse_payload<T: for<'de> Deserialize<'de>>(input: &str, kind: &str) -> ChartResult<T> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse {kind} payload: {e}")))
}

/// Integer field that SQL aggregates may send as `2023`, `2023.0` or `"2023"`.
fn deserialize_whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WholeNumber {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match WholeNumber::deserialize(deserializer)? {
        WholeNumber::Int(value) => value,
        WholeNumber::Float(value) if value.is_finite() && value.fract() == 0.0 => value as i64,
        WholeNumber::Float(value) => {
            return Err(de::Error::custom(format!("expected whole number, got {value}")));
        }
        WholeNumber::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected whole number, got `{text}`")))?,
    };
    T::try_from(value).map_err(|_| de::Error::custom(format!("number {value} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::{forecast_series_from_json, monthly_series_from_json, yearly_series_from_json};
    use crate::core::primitives::first_of_month;
    use crate::error::ChartError;

    #[test]
    fn monthly_payload_accepts_backend_keys_and_sorts() {
        let series = monthly_series_from_json(
            r#"[{"ano": 2023, "mes": 2, "acumulado_mm": 180.0},
                {"ano": 2023.0, "mes": "1", "acumulado_mm": 250.5}]"#,
        )
        .expect("monthly");
        assert_eq!(series.len(), 2);
        assert_eq!(series.samples()[0].x, first_of_month(2023, 1).expect("jan"));
        assert_eq!(series.samples()[0].y, 250.5);
    }

    #[test]
    fn yearly_payload_accepts_english_keys() {
        let series =
            yearly_series_from_json(r#"[{"year": 2023, "accumulated_mm": 2100.2}]"#).expect("yearly");
        assert_eq!(series.samples()[0].x, 2023.0);
    }

    #[test]
    fn forecast_values_are_clipped_at_zero() {
        let series = forecast_series_from_json(
            r#"{"city": "CURITIBANOS",
                "temporal_serie_historical": ["2008-02-01T00:00:00", "2018-12-01T00:00:00"],
                "forecast": [{"date": "2019-01-01T00:00:00", "predicted_mm": -3.0,
                              "conf_int_lower": -40.0, "conf_int_upper": 60.0,
                              "tendencia": "Abaixo da média histórica"}]}"#,
        )
        .expect("forecast");
        let sample = series.samples()[0];
        assert_eq!(sample.y, 0.0);
        assert_eq!(sample.bounds(), Some((0.0, 60.0)));
    }

    #[test]
    fn fractional_month_is_rejected() {
        let err = monthly_series_from_json(r#"[{"ano": 2023, "mes": 1.5, "acumulado_mm": 1.0}]"#)
            .expect_err("fractional month");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
