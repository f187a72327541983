use crate::core::{ScalePair, Series, Vertex};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Confidence band plus the forecast line running through it.
///
/// `upper`, `center` and `lower` hold one vertex per sample, in sample order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BandGeometry {
    pub upper: Vec<Vertex>,
    pub center: Vec<Vertex>,
    pub lower: Vec<Vertex>,
}

impl BandGeometry {
    /// Closed outline of the filled area: upper boundary left to right, then
    /// lower boundary right to left.
    #[must_use]
    pub fn area_polygon(&self) -> Vec<Vertex> {
        let mut polygon = Vec::with_capacity(self.upper.len() + self.lower.len());
        polygon.extend(self.upper.iter().copied());
        polygon.extend(self.lower.iter().rev().copied());
        polygon
    }
}

/// Projects forecast samples into band boundaries and the center line.
///
/// Every sample must carry both confidence bounds.
pub fn project_confidence_band(series: &Series, scales: &ScalePair) -> ChartResult<BandGeometry> {
    let mut geometry = BandGeometry {
        upper: Vec::with_capacity(series.len()),
        center: Vec::with_capacity(series.len()),
        lower: Vec::with_capacity(series.len()),
    };

    for (index, sample) in series.iter().enumerate() {
        let (lower, upper) = sample.bounds().ok_or_else(|| ChartError::MalformedSample {
            index,
            reason: "forecast sample requires both confidence bounds".to_owned(),
        })?;
        let x = scales.x.anchor_x(index, sample.x)?;
        geometry
            .upper
            .push(Vertex::new(x, scales.y.value_to_pixel(upper)?));
        geometry
            .center
            .push(Vertex::new(x, scales.y.value_to_pixel(sample.y)?));
        geometry
            .lower
            .push(Vertex::new(x, scales.y.value_to_pixel(lower)?));
    }

    Ok(geometry)
}
