use serde::{Deserialize, Serialize};

/// Optional axis titles supplied with each render call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl AxisLabels {
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}
