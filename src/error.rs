use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Margins leave no room for the plotting area.
    #[error("plot area is not positive after margins: width={plot_width}, height={plot_height}")]
    Layout { plot_width: f64, plot_height: f64 },

    #[error("duplicate category `{label}` in categorical series")]
    DuplicateCategory { label: String },

    #[error("malformed sample at index {index}: {reason}")]
    MalformedSample { index: usize, reason: String },

    #[error("series is not sorted by x at index {index}")]
    UnsortedSeries { index: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Render(String),
}
