//! Rotation of point sets about their centroid.

use super::{centroid, Point};

/// Rotates every point by `radians` (counter-clockwise in a y-up frame)
/// about the centroid of the whole set.
pub fn rotate_by(points: &[Point], radians: f64) -> Vec<Point> {
    let c = centroid(points);
    let (sin_a, cos_a) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            Point::new(dx * cos_a - dy * sin_a + c.x, dx * sin_a + dy * cos_a + c.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::rotate_by;
    use crate::geometry::{centroid, Point};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_about_centroid() {
        let pts = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0)];
        let rotated = rotate_by(&pts, FRAC_PI_2);
        assert!((rotated[0].x).abs() < 1e-12);
        assert!((rotated[0].y + 1.0).abs() < 1e-12);
        assert!((rotated[1].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_centroid() {
        let pts = [
            Point::new(10.0, 3.0),
            Point::new(14.0, 9.0),
            Point::new(20.0, 4.0),
        ];
        let before = centroid(&pts);
        let after = centroid(&rotate_by(&pts, 0.7));
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }
}
