//! Angle helpers for the rotation search.

/// Converts degrees to radians.
pub(crate) fn deg_to_rad(angle_deg: f64) -> f64 {
    angle_deg.to_radians()
}

/// Upper bound on golden-section iterations needed to shrink `range` to `precision`.
///
/// Each iteration shrinks the bracket by a factor of `phi`, so the count is
/// `ceil(log_phi(precision / range))`. One extra iteration absorbs rounding.
pub(crate) fn golden_iteration_cap(range: f64, precision: f64, phi: f64) -> usize {
    if precision <= 0.0 || !range.is_finite() || range <= precision {
        return 0;
    }
    let steps = (precision / range).ln() / phi.ln();
    steps.ceil() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::{deg_to_rad, golden_iteration_cap};

    #[test]
    fn deg_to_rad_matches_pi() {
        let radians = deg_to_rad(180.0);
        assert!((radians - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn iteration_cap_covers_default_search() {
        let phi = 0.5 * (5.0_f64.sqrt() - 1.0);
        // 90 degrees down to 2 degrees: log_phi(2/90) ~= 7.9.
        assert_eq!(golden_iteration_cap(deg_to_rad(90.0), deg_to_rad(2.0), phi), 9);
    }

    #[test]
    fn iteration_cap_is_zero_when_already_precise() {
        let phi = 0.5 * (5.0_f64.sqrt() - 1.0);
        assert_eq!(golden_iteration_cap(1.0, 2.0, phi), 0);
        assert_eq!(golden_iteration_cap(1.0, 0.0, phi), 0);
    }
}
