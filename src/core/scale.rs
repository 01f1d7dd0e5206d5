use serde::{Deserialize, Serialize};

use crate::core::ticks;
use crate::error::{ChartError, ChartResult};

/// Continuous domain to pixel-range mapping.
///
/// The range may be inverted (`range_start > range_end`), which is how value
/// axes put zero on the baseline and the maximum at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a `[0, max]` scale onto `[height, 0]` with a round upper bound.
    ///
    /// An all-zero dataset gets the unit domain `[0, 1]` so bars collapse onto
    /// the baseline instead of producing an empty domain.
    pub fn for_values(max_value: f64, height: f64, tick_count: usize) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value < 0.0 {
            return Err(ChartError::InvalidData(
                "maximum value must be finite and >= 0".to_owned(),
            ));
        }
        let upper = if max_value == 0.0 { 1.0 } else { max_value };
        Self::new(0.0, upper, height, 0.0)?.nice(tick_count)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Extends the domain outward so both ends land on round tick values.
    pub fn nice(self, tick_count: usize) -> ChartResult<Self> {
        let (domain_start, domain_end) =
            ticks::nice_domain(self.domain_start, self.domain_end, tick_count);
        Self::new(domain_start, domain_end, self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a scale with an empty range".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        ticks::ticks(self.domain_start, self.domain_end, tick_count)
    }

    #[must_use]
    pub fn tick_step(self, tick_count: usize) -> f64 {
        ticks::tick_step(self.domain_start, self.domain_end, tick_count)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn for_values_nices_upper_bound_and_inverts_range() {
        let scale = LinearScale::for_values(111.0, 250.0, 10).expect("value scale");
        assert_eq!(scale.domain(), (0.0, 120.0));
        assert_eq!(scale.map(0.0), 250.0);
        assert_eq!(scale.map(120.0), 0.0);
        assert_eq!(scale.map(60.0), 125.0);
    }

    #[test]
    fn all_zero_values_fall_back_to_unit_domain() {
        let scale = LinearScale::for_values(0.0, 100.0, 10).expect("value scale");
        assert_eq!(scale.domain(), (0.0, 1.0));
        assert_eq!(scale.map(0.0), 100.0);
    }

    #[test]
    fn empty_domain_is_rejected() {
        assert!(LinearScale::new(5.0, 5.0, 0.0, 1.0).is_err());
        assert!(LinearScale::for_values(f64::INFINITY, 100.0, 10).is_err());
    }
}
