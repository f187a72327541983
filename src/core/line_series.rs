use crate::core::{ScalePair, Series};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Point in absolute viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projects every sample, in order, into one continuous polyline.
///
/// A single sample yields a one-vertex path (a point); an empty series yields
/// an empty path. The function is deterministic and side-effect free so both
/// rendering and tests consume the exact same geometry.
pub fn project_line_path(series: &Series, scales: &ScalePair) -> ChartResult<Vec<Vertex>> {
    let mut path = Vec::with_capacity(series.len());
    for (index, sample) in series.iter().enumerate() {
        let x = scales.x.anchor_x(index, sample.x)?;
        let y = scales.y.value_to_pixel(sample.y)?;
        path.push(Vertex::new(x, y));
    }
    Ok(path)
}
