use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One chart sample.
///
/// `x` is either a unix timestamp in seconds (time axes) or a category key
/// such as a calendar year (categorical axes). `y_lower`/`y_upper` are only
/// carried by forecast samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub y_lower: Option<f64>,
    #[serde(default)]
    pub y_upper: Option<f64>,
}

impl Sample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            y_lower: None,
            y_upper: None,
        }
    }

    #[must_use]
    pub fn with_bounds(x: f64, y: f64, y_lower: f64, y_upper: f64) -> Self {
        Self {
            x,
            y,
            y_lower: Some(y_lower),
            y_upper: Some(y_upper),
        }
    }

    /// Returns `(lower, upper)` when both confidence bounds are present.
    #[must_use]
    pub fn bounds(self) -> Option<(f64, f64)> {
        match (self.y_lower, self.y_upper) {
            (Some(lower), Some(upper)) => Some((lower, upper)),
            _ => None,
        }
    }

    fn validate(self, index: usize) -> ChartResult<()> {
        if !self.x.is_finite() {
            return Err(malformed(index, "x must be finite"));
        }
        if !self.y.is_finite() || self.y < 0.0 {
            return Err(malformed(index, "value must be finite and >= 0"));
        }
        if let Some(lower) = self.y_lower {
            if !lower.is_finite() || lower < 0.0 || lower > self.y {
                return Err(malformed(index, "lower bound must be finite, >= 0 and <= value"));
            }
        }
        if let Some(upper) = self.y_upper {
            if !upper.is_finite() || upper < self.y {
                return Err(malformed(index, "upper bound must be finite and >= value"));
            }
        }
        Ok(())
    }
}

/// Samples ordered ascending by `x`.
///
/// Construction enforces the ordering, so every consumer (scales, geometry,
/// nearest-point lookup) can rely on it without re-checking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Validates samples that the caller already sorted.
    pub fn new(samples: Vec<Sample>) -> ChartResult<Self> {
        for (index, sample) in samples.iter().enumerate() {
            sample.validate(index)?;
        }
        if let Some(position) = samples
            .windows(2)
            .position(|pair| pair[0].x > pair[1].x)
        {
            return Err(ChartError::UnsortedSeries {
                index: position + 1,
            });
        }
        Ok(Self { samples })
    }

    /// Sorts samples ascending by `x` (stable) before validating them.
    pub fn from_unsorted(mut samples: Vec<Sample>) -> ChartResult<Self> {
        samples.sort_by(|left, right| left.x.partial_cmp(&right.x).unwrap_or(Ordering::Equal));
        Self::new(samples)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Smallest and largest `x`, or `None` for an empty series.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.x, self.samples.last()?.x))
    }

    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.samples.iter().map(|sample| sample.y).reduce(f64::max)
    }

    /// Largest upper confidence bound, falling back to the value for samples
    /// without bounds.
    #[must_use]
    pub fn max_upper(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|sample| sample.y_upper.unwrap_or(sample.y))
            .reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

fn malformed(index: usize, reason: &str) -> ChartError {
    ChartError::MalformedSample {
        index,
        reason: reason.to_owned(),
    }
}
