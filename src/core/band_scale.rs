use indexmap::IndexSet;
use ordered_float::OrderedFloat;

use crate::core::Series;
use crate::error::{ChartError, ChartResult};

/// Categorical axis splitting a pixel range into equal bands.
///
/// Categories keep the order in which the (sorted) series supplies them.
/// Padding is a fraction of the step, applied between bands and on both outer
/// edges; leftover space is split evenly on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: IndexSet<OrderedFloat<f64>>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    pub fn new(
        categories: IndexSet<OrderedFloat<f64>>,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_end <= range_start {
            return Err(ChartError::InvalidData(
                "band range must be finite and ascending".to_owned(),
            ));
        }
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }

        let count = categories.len() as f64;
        let width = range_end - range_start;
        let step = width / (count - padding + 2.0 * padding).max(1.0);
        let offset = range_start + (width - step * (count - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Ok(Self {
            categories,
            range_start,
            range_end,
            padding,
            step,
            bandwidth,
            offset,
        })
    }

    /// Builds the domain from the distinct `x` values of `series`.
    ///
    /// A repeated `x` is rejected: two bars would share one band.
    pub fn from_series(
        series: &Series,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ChartResult<Self> {
        let mut categories = IndexSet::with_capacity(series.len());
        for sample in series {
            if !categories.insert(OrderedFloat(sample.x)) {
                return Err(ChartError::DuplicateCategory {
                    label: category_label(sample.x),
                });
            }
        }
        Self::new(categories, range_start, range_end, padding)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = f64> + '_ {
        self.categories.iter().map(|key| key.0)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn index_of(&self, category: f64) -> Option<usize> {
        self.categories.get_index_of(&OrderedFloat(category))
    }

    /// Left pixel edge of the band at `index`.
    #[must_use]
    pub fn start_at(&self, index: usize) -> f64 {
        self.offset + self.step * index as f64
    }

    #[must_use]
    pub fn center_at(&self, index: usize) -> f64 {
        self.start_at(index) + self.bandwidth * 0.5
    }

    pub fn band_start(&self, category: f64) -> ChartResult<f64> {
        self.index_of(category)
            .map(|index| self.start_at(index))
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "category `{}` is not in the band domain",
                    category_label(category)
                ))
            })
    }
}

/// Display label for a category key: integral keys (years) print without a
/// fractional part.
#[must_use]
pub fn category_label(category: f64) -> String {
    if category.fract() == 0.0 && category.abs() < 1e15 {
        format!("{}", category as i64)
    } else {
        format!("{category}")
    }
}

#[cfg(test)]
mod tests {
    use super::{BandScale, category_label};
    use crate::core::{Sample, Series};
    use crate::error::ChartError;

    #[test]
    fn bands_are_evenly_spaced_and_padded() {
        let series = Series::new(vec![
            Sample::new(2020.0, 1.0),
            Sample::new(2021.0, 1.0),
            Sample::new(2022.0, 1.0),
            Sample::new(2023.0, 1.0),
        ])
        .expect("series");
        let scale = BandScale::from_series(&series, 0.0, 440.0, 0.2).expect("band");

        // 4 bands with 0.2 padding: step = 440 / 4.2.
        let step = 440.0 / 4.2;
        assert!((scale.step() - step).abs() < 1e-9);
        assert!((scale.bandwidth() - step * 0.8).abs() < 1e-9);
        assert!((scale.start_at(0) - step * 0.2).abs() < 1e-9);
        let last_end = scale.start_at(3) + scale.bandwidth();
        assert!((440.0 - last_end - step * 0.2).abs() < 1e-9);
    }

    #[test]
    fn duplicate_categories_are_rejected() {
        let series =
            Series::new(vec![Sample::new(2020.0, 1.0), Sample::new(2020.0, 2.0)]).expect("series");
        let err = BandScale::from_series(&series, 0.0, 100.0, 0.2).expect_err("duplicate");
        match err {
            ChartError::DuplicateCategory { label } => assert_eq!(label, "2020"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn labels_print_years_without_fraction() {
        assert_eq!(category_label(2024.0), "2024");
        assert_eq!(category_label(1.5), "1.5");
    }
}
