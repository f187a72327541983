//! pluvio-chart: chart engine for rainfall history and forecast dashboards.
//!
//! The crate turns an ordered rainfall series into a deterministic
//! `RenderFrame` (line, bar or forecast-band geometry plus axes and a
//! tooltip overlay) and hands it to a pluggable renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{
    AxisLabels, BarGeometry, ChartEngine, ChartEngineConfig, GeometryStrategy, LineGeometry,
    LineWithBandGeometry,
};
pub use error::{ChartError, ChartResult};
