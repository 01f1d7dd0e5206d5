use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{BandScale, DataPoint, DrawableRegion, LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

use super::BarChartConfig;

/// Resolved geometry of one bar in drawable-region coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Scales and bar geometry derived from one container size and dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub viewport: Viewport,
    pub region: DrawableRegion,
    pub band_scale: BandScale,
    pub value_scale: LinearScale,
    pub bars: Vec<BarGeometry>,
}

impl BarChartLayout {
    pub fn compute(
        viewport: Viewport,
        data: &[DataPoint],
        config: &BarChartConfig,
    ) -> ChartResult<Self> {
        if data.is_empty() {
            return Err(ChartError::EmptyData);
        }
        for point in data {
            point.validate()?;
        }

        let region = DrawableRegion::from_viewport(viewport, config.margins)?;
        let band_scale = BandScale::new(data.len(), 0.0, region.width, config.band_padding)?;
        let max_value = data
            .iter()
            .map(|point| OrderedFloat(point.value))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);
        let value_scale =
            LinearScale::for_values(max_value, region.height, config.axis.value_tick_count)?;

        let bandwidth = band_scale.bandwidth();
        let mut bars = Vec::with_capacity(data.len());
        for (index, point) in data.iter().enumerate() {
            let x = band_scale.band_start(index).ok_or_else(|| {
                ChartError::InvalidData(format!("band index {index} out of range"))
            })?;
            let y = value_scale.map(point.value);
            let bar = BarGeometry {
                index,
                label: point.label.clone(),
                value: point.value,
                x,
                y,
                width: bandwidth,
                height: region.height - y,
            };
            trace!(index, x = bar.x, y = bar.y, height = bar.height, "bar geometry");
            bars.push(bar);
        }

        Ok(Self {
            viewport,
            region,
            band_scale,
            value_scale,
            bars,
        })
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.value_scale.domain()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::BarChartLayout;
    use crate::api::BarChartConfig;
    use crate::core::{DataPoint, Viewport, default_weekly_offers};
    use crate::error::ChartError;

    #[test]
    fn weekly_offers_fill_the_drawable_region() {
        let layout = BarChartLayout::compute(
            Viewport::new(700, 400),
            &default_weekly_offers(),
            &BarChartConfig::default(),
        )
        .expect("layout");

        assert_eq!(layout.value_domain(), (0.0, 120.0));
        let friday = &layout.bars[4];
        assert_relative_eq!(friday.height, 250.0 * 111.0 / 120.0, epsilon = 1e-9);
        assert_relative_eq!(friday.y + friday.height, 250.0, epsilon = 1e-9);
    }

    #[test]
    fn duplicate_labels_get_adjacent_bars() {
        let data = vec![DataPoint::new("Mon", 1.0), DataPoint::new("Mon", 2.0)];
        let layout =
            BarChartLayout::compute(Viewport::new(700, 400), &data, &BarChartConfig::default())
                .expect("layout");
        assert!(layout.bars[0].x + layout.bars[0].width < layout.bars[1].x);
    }

    #[test]
    fn empty_data_is_rejected() {
        let err = BarChartLayout::compute(Viewport::new(700, 400), &[], &BarChartConfig::default())
            .expect_err("empty data");
        assert!(matches!(err, ChartError::EmptyData));
    }
}
