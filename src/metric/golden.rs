//! Golden-section search over the rotation angle.

use crate::config::{RecognizerConfig, ANGLE_PRECISION_DEG, ANGLE_RANGE_DEG, PHI};
use crate::geometry::{path_distance, rotate_by, Point};
use crate::util::math::{deg_to_rad, golden_iteration_cap};
use crate::util::{UnistrokeError, UnistrokeResult};

/// Bounded rotation search minimizing mean point-to-point distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularSearch {
    min_rad: f64,
    max_rad: f64,
    precision_rad: f64,
    max_iterations: usize,
}

impl AngularSearch {
    /// Creates a search over `[-range_deg, +range_deg]` stopping at `precision_deg`.
    pub fn new(range_deg: f64, precision_deg: f64) -> UnistrokeResult<Self> {
        if !range_deg.is_finite() || range_deg < 0.0 {
            return Err(UnistrokeError::InvalidConfig {
                reason: "angle range must be finite and >= 0",
            });
        }
        if !precision_deg.is_finite() || precision_deg <= 0.0 {
            return Err(UnistrokeError::InvalidConfig {
                reason: "angle precision must be finite and > 0",
            });
        }
        Ok(Self::build(range_deg, precision_deg))
    }

    fn build(range_deg: f64, precision_deg: f64) -> Self {
        let half = deg_to_rad(range_deg);
        let precision_rad = deg_to_rad(precision_deg);
        Self {
            min_rad: -half,
            max_rad: half,
            precision_rad,
            max_iterations: golden_iteration_cap(2.0 * half, precision_rad, PHI),
        }
    }

    /// Builds the search described by a recognizer config.
    pub fn from_config(cfg: &RecognizerConfig) -> UnistrokeResult<Self> {
        Self::new(cfg.angle_range_deg, cfg.angle_precision_deg)
    }

    /// Lower bound of the search range, in radians.
    pub fn min_rad(&self) -> f64 {
        self.min_rad
    }

    /// Upper bound of the search range, in radians.
    pub fn max_rad(&self) -> f64 {
        self.max_rad
    }

    /// Hard cap on bracket-shrinking iterations.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Smallest mean distance between `points` rotated within the range and `template`.
    ///
    /// Keeps a bracket `[a, b]` with probes at `phi*a + (1-phi)*b` and
    /// `(1-phi)*a + phi*b`, moving toward the lower probe and reusing one
    /// evaluation per step. Stops once `|b - a|` reaches the precision or the
    /// iteration cap is hit, and returns the lower of the last two probes.
    pub fn distance_at_best_angle(&self, points: &[Point], template: &[Point]) -> f64 {
        let mut a = self.min_rad;
        let mut b = self.max_rad;
        let mut x1 = PHI * a + (1.0 - PHI) * b;
        let mut f1 = distance_at_angle(points, template, x1);
        let mut x2 = (1.0 - PHI) * a + PHI * b;
        let mut f2 = distance_at_angle(points, template, x2);

        let mut iterations = 0;
        while (b - a).abs() > self.precision_rad && iterations < self.max_iterations {
            if f1 < f2 {
                b = x2;
                x2 = x1;
                f2 = f1;
                x1 = PHI * a + (1.0 - PHI) * b;
                f1 = distance_at_angle(points, template, x1);
            } else {
                a = x1;
                x1 = x2;
                f1 = f2;
                x2 = (1.0 - PHI) * a + PHI * b;
                f2 = distance_at_angle(points, template, x2);
            }
            iterations += 1;
        }
        f1.min(f2)
    }
}

impl Default for AngularSearch {
    fn default() -> Self {
        Self::build(ANGLE_RANGE_DEG, ANGLE_PRECISION_DEG)
    }
}

/// Mean distance between `points` rotated by `radians` and `template`.
pub fn distance_at_angle(points: &[Point], template: &[Point], radians: f64) -> f64 {
    let rotated = rotate_by(points, radians);
    path_distance(&rotated, template)
}

#[cfg(test)]
mod tests {
    use super::{distance_at_angle, AngularSearch};
    use crate::config::RecognizerConfig;
    use crate::geometry::{rotate_by, Point};
    use crate::normalize::normalize;

    fn hook() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 10.0),
            Point::new(50.0, 40.0),
            Point::new(45.0, 70.0),
            Point::new(20.0, 60.0),
        ]
    }

    #[test]
    fn default_search_covers_45_degrees() {
        let search = AngularSearch::default();
        assert!((search.max_rad() - 45f64.to_radians()).abs() < 1e-12);
        assert!((search.min_rad() + 45f64.to_radians()).abs() < 1e-12);
        assert_eq!(search.max_iterations(), 9);
        assert_eq!(search, AngularSearch::from_config(&RecognizerConfig::default()).unwrap());
    }

    #[test]
    fn recovers_small_rotation() {
        let cfg = RecognizerConfig::default();
        let template = normalize(&hook(), &cfg).unwrap();
        let rotated = rotate_by(template.points(), 0.3);

        let search = AngularSearch::default();
        let found = search.distance_at_best_angle(&rotated, template.points());
        let unaligned = distance_at_angle(&rotated, template.points(), 0.0);
        assert!(found < unaligned * 0.1, "found {found}, unaligned {unaligned}");
    }

    #[test]
    fn zero_range_evaluates_identity() {
        let cfg = RecognizerConfig::default();
        let stroke = normalize(&hook(), &cfg).unwrap();
        let search = AngularSearch::new(0.0, 2.0).unwrap();
        assert_eq!(search.max_iterations(), 0);
        let d = search.distance_at_best_angle(stroke.points(), stroke.points());
        assert!(d < 1e-9);
    }

    #[test]
    fn rejects_non_positive_precision() {
        assert!(AngularSearch::new(45.0, 0.0).is_err());
        assert!(AngularSearch::new(-1.0, 2.0).is_err());
    }
}
