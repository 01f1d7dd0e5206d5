use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordinal scale that splits a pixel range into equal-width bands.
///
/// Bands are keyed by position, so repeated labels still get their own slot.
/// Inner and outer padding share one ratio of the step, and the bands are
/// centered inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    band_count: usize,
    range_start: f64,
    range_end: f64,
    padding: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(
        band_count: usize,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ChartResult<Self> {
        if band_count == 0 {
            return Err(ChartError::EmptyData);
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_end <= range_start {
            return Err(ChartError::InvalidData(
                "band scale range must be finite and increasing".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        let n = band_count as f64;
        let span = range_end - range_start;
        let step = span / (n - padding + padding * 2.0).max(1.0);
        let start = range_start + (span - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Ok(Self {
            band_count,
            range_start,
            range_end,
            padding,
            start,
            step,
            bandwidth,
        })
    }

    #[must_use]
    pub fn band_count(self) -> usize {
        self.band_count
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }

    /// Left edge of band `index`, or `None` past the last band.
    #[must_use]
    pub fn band_start(self, index: usize) -> Option<f64> {
        (index < self.band_count).then(|| self.start + self.step * index as f64)
    }

    #[must_use]
    pub fn band_center(self, index: usize) -> Option<f64> {
        self.band_start(index).map(|start| start + self.bandwidth / 2.0)
    }
}
