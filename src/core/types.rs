use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of a host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// One labelled bar value, e.g. the offer count of a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Builds a point labelled as `"Mon 03\n12 PM"`.
    #[must_use]
    pub fn from_datetime(time: NaiveDateTime, value: f64) -> Self {
        Self::new(time.format("%a %d\n%I %p").to_string(), value)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "value of `{}` must be finite and >= 0",
                self.label.escape_debug()
            )));
        }
        Ok(())
    }
}

/// Offer counts shown by the weekly dashboard widget.
#[must_use]
pub fn default_weekly_offers() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Mon 03\n12 PM", 98.0),
        DataPoint::new("Tue 04\n12 PM", 86.0),
        DataPoint::new("Wed 05\n12 PM", 68.0),
        DataPoint::new("Thu 06\n12 PM", 105.0),
        DataPoint::new("Fri 07", 111.0),
    ]
}

/// Fixed insets between the container edge and the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 20.0,
            bottom: 100.0,
            left: 60.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Container area left after margins, in pixels.
///
/// `origin_x`/`origin_y` translate drawable coordinates back into container
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawableRegion {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawableRegion {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let margins = margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::DrawableRegionTooSmall { width, height });
        }

        Ok(Self {
            origin_x: margins.left,
            origin_y: margins.top,
            width,
            height,
        })
    }
}
