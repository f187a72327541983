use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{Sample, Series};

/// Index of the entry closest to `query` among `len` entries whose keys,
/// read through `key_at`, ascend with the index.
///
/// Binary search for the leftmost insertion point, then compare the two
/// neighbours around it. Equal distances resolve to the lower index. Queries
/// before the first or after the last key clamp to that end. Unsorted keys
/// give an unspecified answer.
pub fn nearest_index(len: usize, query: f64, key_at: impl Fn(usize) -> f64) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let mut low = 0;
    let mut high = len;
    while low < high {
        let mid = low + (high - low) / 2;
        if key_at(mid) < query {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    if low == 0 {
        return Some(0);
    }
    if low == len {
        return Some(len - 1);
    }

    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = SmallVec::new();
    for index in [low - 1, low] {
        candidates.push((OrderedFloat((key_at(index) - query).abs()), index));
    }
    // `min_by_key` keeps the first of equal minima, i.e. the earlier sample.
    candidates
        .into_iter()
        .min_by_key(|candidate| candidate.0)
        .map(|(_, index)| index)
}

/// Sample of `series` whose `x` is closest to `query_x`.
#[must_use]
pub fn nearest_sample(series: &Series, query_x: f64) -> Option<&Sample> {
    let samples = series.samples();
    nearest_index(samples.len(), query_x, |index| samples[index].x).map(|index| &samples[index])
}
