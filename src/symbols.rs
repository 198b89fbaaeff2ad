// symbols.rs

use std::f64::consts::PI;

use crate::config::{RADIUS_BASELINE, SCALE_FACTOR};
use crate::error::{MapError, Result};

/// Proportional symbol radius, in pixels, for a yield value.
///
/// Symbol area grows linearly with the yield above the baseline:
/// `area = (value - 60) * 30`, `radius = sqrt(area / pi)`. Values below the
/// baseline (negative area) and non-finite values fail with
/// [`MapError::OutOfDomain`]. Markers and legend circles both size through
/// here.
pub fn radius_for(value: f64) -> Result<f64> {
    if !value.is_finite() || value < RADIUS_BASELINE {
        return Err(MapError::OutOfDomain { value });
    }
    let area = (value - RADIUS_BASELINE) * SCALE_FACTOR;
    Ok((area / PI).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn baseline_is_zero() {
        assert_eq!(radius_for(60.0).unwrap(), 0.0);
    }

    #[test]
    fn exact_formula() {
        assert_relative_eq!(radius_for(90.0).unwrap(), (30.0 * 30.0 / PI).sqrt());
    }

    #[test]
    fn monotonic_above_baseline() {
        let radii: Vec<f64> = (61..=250)
            .map(|v| radius_for(f64::from(v)).unwrap())
            .collect();
        assert!(radii.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn repeatable() {
        assert_eq!(radius_for(163.2).unwrap(), radius_for(163.2).unwrap());
    }

    #[test]
    fn below_baseline_is_out_of_domain() {
        assert!(matches!(
            radius_for(59.9),
            Err(MapError::OutOfDomain { value }) if value == 59.9
        ));
        assert!(radius_for(f64::NAN).is_err());
        assert!(radius_for(f64::INFINITY).is_err());
    }
}
