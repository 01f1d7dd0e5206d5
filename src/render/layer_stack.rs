use serde::{Deserialize, Serialize};

/// Named draw layers of a bar chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Title,
    CategoryAxis,
    ValueAxis,
    AxisTitles,
    Bars,
    BarLabels,
}

impl CanvasLayerKind {
    /// Stable class name used by markup backends.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Title => "chart-title",
            Self::CategoryAxis => "x-axis",
            Self::ValueAxis => "y-axis",
            Self::AxisTitles => "axis-title",
            Self::Bars => "bar",
            Self::BarLabels => "label",
        }
    }
}

/// Back-to-front layer order; later layers paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Title,
                CanvasLayerKind::CategoryAxis,
                CanvasLayerKind::ValueAxis,
                CanvasLayerKind::AxisTitles,
                CanvasLayerKind::Bars,
                CanvasLayerKind::BarLabels,
            ],
        }
    }
}
