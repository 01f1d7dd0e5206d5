use serde::{Deserialize, Serialize};

use crate::core::Margins;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Upper bound on requested value-axis intervals.
pub const MAX_VALUE_TICK_COUNT: usize = 1_000;

/// Text and offsets of the title and the two axis captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Title baseline distance above the drawable region.
    pub title_offset_px: f64,
    /// X caption baseline distance below the drawable region.
    pub x_axis_title_offset_px: f64,
    /// Y caption baseline distance left of the value axis.
    pub y_axis_title_offset_px: f64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            title: "Liczba ofert w ostatnich 7 dniach".to_owned(),
            x_axis_title: "Data".to_owned(),
            y_axis_title: "Liczba ofert".to_owned(),
            title_offset_px: 10.0,
            x_axis_title_offset_px: 60.0,
            y_axis_title_offset_px: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title_px: f64,
    pub axis_title_px: f64,
    pub tick_label_px: f64,
    pub bar_label_px: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title_px: 32.0,
            axis_title_px: 16.0,
            tick_label_px: 10.0,
            bar_label_px: 12.0,
        }
    }
}

/// Tick geometry shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub stroke_width: f64,
    pub color: Color,
    /// Rotation applied to category tick labels.
    pub category_label_rotation_deg: f64,
    /// Target number of value-axis intervals.
    pub value_tick_count: usize,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            stroke_width: 1.0,
            color: Color::BLACK,
            category_label_rotation_deg: -45.0,
            value_tick_count: 10,
        }
    }
}

/// Complete bar chart setup.
///
/// Defaults reproduce the weekly offers widget. Every field is optional in
/// JSON so hosts only override what they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub margins: Margins,
    /// Fraction of each band step left empty between bars.
    pub band_padding: f64,
    pub bar_color: Color,
    pub bar_label_color: Color,
    pub bar_label_offset_px: f64,
    pub captions: CaptionConfig,
    pub fonts: FontSizes,
    pub axis: AxisStyle,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            band_padding: 0.4,
            bar_color: Color::rgb(0.0, 150.0 / 255.0, 199.0 / 255.0),
            bar_label_color: Color::BLACK,
            bar_label_offset_px: 5.0,
            captions: CaptionConfig::default(),
            fonts: FontSizes::default(),
            axis: AxisStyle::default(),
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.captions.title = title.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.margins.validate()?;
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        self.bar_color.validate()?;
        self.bar_label_color.validate()?;
        self.axis.color.validate()?;

        for (name, value) in [
            ("bar label offset", self.bar_label_offset_px),
            ("title offset", self.captions.title_offset_px),
            ("x axis title offset", self.captions.x_axis_title_offset_px),
            ("y axis title offset", self.captions.y_axis_title_offset_px),
            ("tick size", self.axis.tick_size_px),
            ("tick padding", self.axis.tick_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("title font size", self.fonts.title_px),
            ("axis title font size", self.fonts.axis_title_px),
            ("tick label font size", self.fonts.tick_label_px),
            ("bar label font size", self.fonts.bar_label_px),
            ("axis stroke width", self.axis.stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.axis.category_label_rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "category label rotation must be finite".to_owned(),
            ));
        }
        if self.axis.value_tick_count == 0 || self.axis.value_tick_count > MAX_VALUE_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "value tick count must be in 1..={MAX_VALUE_TICK_COUNT}"
            )));
        }

        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart config: {e}"))
        })
    }
}
