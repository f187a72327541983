use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{ChartError, ChartResult};

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Converts unix seconds back to a UTC timestamp (millisecond precision).
pub fn unix_seconds_to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp must be finite".to_owned(),
        ));
    }
    let millis = (seconds * 1000.0).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| ChartError::InvalidData(format!("timestamp out of range: {seconds}")))
}

/// Unix seconds of midnight UTC on the first day of `month` in `year`.
pub fn first_of_month(year: i32, month: u32) -> ChartResult<f64> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ChartError::InvalidData(format!("invalid month {year}-{month}")))?;
    Ok(naive_date_to_unix_seconds(date))
}

#[must_use]
pub fn naive_date_to_unix_seconds(date: NaiveDate) -> f64 {
    datetime_to_unix_seconds(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
}

/// Parses `YYYY-MM-DD` or an ISO date-time without offset (as emitted by the
/// forecast backend), or an RFC 3339 timestamp.
pub fn parse_iso_date(raw: &str) -> ChartResult<f64> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(naive_date_to_unix_seconds(date));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime_to_unix_seconds(Utc.from_utc_datetime(&naive)));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime_to_unix_seconds(parsed.with_timezone(&Utc)));
    }
    Err(ChartError::InvalidData(format!("invalid ISO date `{raw}`")))
}
