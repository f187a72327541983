mod axis_config;
mod axis_label_format;
mod axis_ticks;
mod engine;
mod engine_config;
mod engine_snapshot;
mod geometry_strategy;
mod json_contract;
mod layout_helpers;
mod render_frame_builder;
mod series_normalizer;
mod tooltip_controller;

pub use axis_config::AxisLabels;
pub use axis_label_format::{format_rainfall_mm, format_value_tick};
pub use axis_ticks::AxisTick;
pub use engine::{ChartEngine, RenderedChart};
pub use engine_config::{ChartEngineConfig, ChartStyle};
pub use engine_snapshot::{ChartSnapshot, RenderedChartSnapshot};
pub use geometry_strategy::{
    BarGeometry, DrawnGeometry, DrawnShape, GeometryKind, GeometryStrategy, LineGeometry,
    LineWithBandGeometry, PathRole, strategy_for_kind,
};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use series_normalizer::{
    ForecastDocument, ForecastPoint, MonthlyAccumulation, YearlyAccumulation, forecast_series,
    forecast_series_from_json, monthly_series, monthly_series_from_json, yearly_series,
    yearly_series_from_json,
};
