use serde::{Deserialize, Serialize};

use crate::core::{DrawableRegion, Viewport};

use super::{BarChartLayout, BarGeometry};

/// Serializable deterministic geometry snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub drawable: DrawableRegion,
    pub value_domain: (f64, f64),
    pub bandwidth: f64,
    pub bars: Vec<BarGeometry>,
}

impl ChartSnapshot {
    #[must_use]
    pub fn from_layout(layout: &BarChartLayout) -> Self {
        Self {
            viewport: layout.viewport,
            drawable: layout.region,
            value_domain: layout.value_domain(),
            bandwidth: layout.band_scale.bandwidth(),
            bars: layout.bars.clone(),
        }
    }

    #[must_use]
    pub fn tallest_bar(&self) -> Option<&BarGeometry> {
        self.bars
            .iter()
            .max_by(|left, right| left.height.total_cmp(&right.height))
    }

    #[must_use]
    pub fn shortest_bar(&self) -> Option<&BarGeometry> {
        self.bars
            .iter()
            .min_by(|left, right| left.height.total_cmp(&right.height))
    }
}
