pub mod band_scale;
pub mod band_series;
pub mod bar_series;
pub mod line_series;
pub mod nearest;
pub mod primitives;
pub mod sample;
pub mod scale;
pub mod scale_pair;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use band_scale::{BandScale, category_label};
pub use band_series::{BandGeometry, project_confidence_band};
pub use bar_series::{BarRect, project_category_bars};
pub use line_series::{Vertex, project_line_path};
pub use nearest::{nearest_index, nearest_sample};
pub use sample::{Sample, Series};
pub use scale::LinearScale;
pub use scale_pair::{ScalePair, ScaleTuning, XAxisUnit, XScale};
pub use time_scale::TimeScale;
pub use types::{Margins, PlotArea, Viewport};
pub use value_scale::{ValueScale, ValueScaleTuning};
