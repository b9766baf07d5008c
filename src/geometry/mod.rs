//! Planar point primitives used by the normalizer and the distance metrics.
//!
//! All functions are pure. Functions that average over a point set
//! (`centroid`, `bounding_box`) are only meaningful for non-empty input;
//! callers validate strokes before reaching them.

mod rotate;

pub use rotate::rotate_by;

/// A point in the stroke's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Minimum x coordinate.
    pub x: f64,
    /// Minimum y coordinate.
    pub y: f64,
    /// Extent along x; zero when every point shares the same x.
    pub width: f64,
    /// Extent along y; zero when every point shares the same y.
    pub height: f64,
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Arithmetic mean of all points.
///
/// Returns NaN coordinates for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Point::new(sx / n, sy / n)
}

/// Minimum and maximum extents of the points.
pub fn bounding_box(points: &[Point]) -> Rect {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rect {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Sum of distances between consecutive points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Mean index-aligned distance between two equally long point sequences.
pub fn path_distance(a: &[Point], b: &[Point]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let total: f64 = a.iter().zip(b).map(|(p, q)| distance(*p, *q)).sum();
    total / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::{bounding_box, centroid, distance, path_distance, path_length, Point};

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_averages_coordinates() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&pts), Point::new(2.0, 1.0));
    }

    #[test]
    fn centroid_of_empty_slice_is_nan() {
        assert!(!centroid(&[]).is_finite());
    }

    #[test]
    fn bounding_box_reports_zero_extent_for_flat_points() {
        let pts = [Point::new(1.0, 5.0), Point::new(7.0, 5.0), Point::new(3.0, 5.0)];
        let rect = bounding_box(&pts);
        assert_eq!(rect.x, 1.0);
        assert_eq!(rect.y, 5.0);
        assert_eq!(rect.width, 6.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn path_length_sums_segments() {
        let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 10.0)];
        assert!((path_length(&pts) - 11.0).abs() < 1e-12);
        assert_eq!(path_length(&pts[..1]), 0.0);
    }

    #[test]
    fn path_distance_is_index_aligned_mean() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let b = [Point::new(0.0, 2.0), Point::new(1.0, 4.0)];
        assert!((path_distance(&a, &b) - 3.0).abs() < 1e-12);
    }
}
