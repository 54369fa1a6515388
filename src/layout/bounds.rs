//! Value-domain bounds for the vertical scale.

use crate::models::{Bounds, Observation};

/// Compute the value-domain bounds the reordered series will reach.
///
/// `max` is the largest *single* observation value, never below 0; `min` is
/// the cumulative low-water mark of the prefix sums, never above 0. The
/// asymmetry (cumulative floor, non-cumulative ceiling) matches the visual's
/// staircase positioning and must not be "fixed".
///
/// Comparisons skip NaN, but a NaN measure still poisons every later prefix
/// sum; callers get whatever geometry falls out.
pub fn compute_bounds(series: &[Observation]) -> Bounds {
    let mut max = 0.0f64;
    for obs in series {
        if obs.value > max {
            max = obs.value;
        }
    }

    let mut min = 0.0f64;
    let mut sum = 0.0f64;
    for obs in series {
        sum += obs.value;
        if sum < min {
            min = sum;
        }
    }

    Bounds { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<Observation> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Observation::new(format!("{} C{}", i + 1, i + 1), *v))
            .collect()
    }

    #[test]
    fn asymmetric_min_max() {
        // Prefix sums 10, -10, -5: min tracks the cumulative trough while
        // max only sees the single largest value.
        let b = compute_bounds(&series(&[10.0, -20.0, 5.0]));
        assert_eq!(b.min, -10.0);
        assert_eq!(b.max, 10.0);
    }

    #[test]
    fn all_negative_keeps_ceiling_at_zero() {
        let b = compute_bounds(&series(&[-3.0, -7.0]));
        assert_eq!(b.max, 0.0);
        assert_eq!(b.min, -10.0);
    }

    #[test]
    fn all_positive_keeps_floor_at_zero() {
        let b = compute_bounds(&series(&[4.0, 9.0]));
        assert_eq!(b.min, 0.0);
        assert_eq!(b.max, 9.0);
    }

    #[test]
    fn empty_series_is_zero_bounds() {
        assert_eq!(compute_bounds(&[]), Bounds::ZERO);
    }
}
