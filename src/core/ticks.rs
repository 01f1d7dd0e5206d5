//! Round-number tick generation for linear value axes.
//!
//! Increments are always `1`, `2` or `5` times a power of ten. A negative
//! increment `-k` encodes the fractional step `1 / k`, which keeps tick values
//! exact when multiplied back out.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

const NICE_MAX_ITERATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: f64,
    last: f64,
    increment: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut first = (start * inc).round();
        let mut last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        (first, last, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut first = (start / inc).round();
        let mut last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        (first, last, inc)
    };

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !first.is_finite() || !last.is_finite() {
        first = 0.0;
        last = -1.0;
    }

    TickSpec {
        first,
        last,
        increment,
    }
}

/// Returns the signed tick increment for `[start, stop]` split into roughly
/// `count` intervals. See the module docs for the sign convention.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).increment
}

/// Returns the absolute distance between two adjacent ticks.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    let increment = tick_increment(lo, hi, count);
    if increment < 0.0 {
        -1.0 / increment
    } else {
        increment
    }
}

/// Widens `[start, stop]` outward to multiples of the tick increment.
///
/// The domain is returned unchanged when the increment does not settle, for
/// example when `start == stop`.
#[must_use]
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reversed = stop < start;
    let (mut lo, mut hi) = if reversed {
        (stop, start)
    } else {
        (start, stop)
    };

    let mut previous_step: Option<f64> = None;
    for _ in 0..NICE_MAX_ITERATIONS {
        let step = tick_increment(lo, hi, count);
        if previous_step == Some(step) {
            // `+ 0.0` folds a negative zero produced by the fractional branch.
            let (lo, hi) = (lo + 0.0, hi + 0.0);
            return if reversed { (hi, lo) } else { (lo, hi) };
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        previous_step = Some(step);
    }

    (start, stop)
}

/// Returns round tick values inside `[start, stop]`.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reversed = stop < start;
    let (lo, hi) = if reversed {
        (stop, start)
    } else {
        (start, stop)
    };
    let spec = tick_spec(lo, hi, count as f64);
    if spec.last < spec.first {
        return Vec::new();
    }

    let n = (spec.last - spec.first) as usize + 1;
    let mut values: Vec<f64> = (0..n)
        .map(|index| {
            let i = spec.first + index as f64;
            if spec.increment < 0.0 {
                i / -spec.increment
            } else {
                i * spec.increment
            }
        })
        .collect();
    if reversed {
        values.reverse();
    }
    values
}

/// Formats a tick value with the precision implied by `step` and comma
/// thousands grouping (`1,200`, `0.5`).
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let formatted = format!("{:.*}", precision, value);
    group_thousands(&formatted)
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_tick, nice_domain, tick_increment, tick_step, ticks};

    #[test]
    fn increment_uses_one_two_five_steps() {
        assert_eq!(tick_increment(0.0, 111.0, 10), 10.0);
        assert_eq!(tick_increment(0.0, 45.0, 10), 5.0);
        assert_eq!(tick_increment(0.0, 1.0, 10), -10.0);
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    }

    #[test]
    fn nice_domain_rounds_upper_bound_outward() {
        assert_eq!(nice_domain(0.0, 111.0, 10), (0.0, 120.0));
        assert_eq!(nice_domain(0.0, 98.0, 10), (0.0, 100.0));
        assert_eq!(nice_domain(0.0, 7.3, 10), (0.0, 8.0));
        assert_eq!(nice_domain(0.0, 1_234.0, 10), (0.0, 1_300.0));
    }

    #[test]
    fn nice_domain_keeps_degenerate_domain() {
        assert_eq!(nice_domain(0.0, 0.0, 10), (0.0, 0.0));
    }

    #[test]
    fn ticks_cover_nice_domain() {
        let values = ticks(0.0, 120.0, 10);
        assert_eq!(values.len(), 13);
        assert_eq!(values.first().copied(), Some(0.0));
        assert_eq!(values.last().copied(), Some(120.0));
    }

    #[test]
    fn fractional_ticks_stay_exact() {
        let values = ticks(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn tick_format_groups_thousands_and_keeps_step_precision() {
        assert_eq!(format_tick(120.0, 10.0), "120");
        assert_eq!(format_tick(1_500.0, 500.0), "1,500");
        assert_eq!(format_tick(1_234_567.0, 1.0), "1,234,567");
        assert_eq!(format_tick(0.5, 0.1), "0.5");
    }
}
