//! Canonical stroke form shared by templates and candidates.
//!
//! A raw stroke is resampled to a fixed point count, rotated so the direction
//! from its first point to its centroid lies along +x, scaled per axis into
//! the reference square, and translated so the centroid sits at the origin.
//! The final points are also flattened into a unit vector for the
//! Protractor metric.
//!
//! Scaling divides each axis by its own extent. Aspect ratio is not
//! preserved; match outcomes depend on this, so it is kept as is.

mod resample;

pub use resample::resample;

use crate::config::{DegeneratePolicy, RecognizerConfig};
use crate::geometry::{bounding_box, centroid, rotate_by, Point};
use crate::util::{UnistrokeError, UnistrokeResult};

/// Relative extent below which an axis counts as flat.
const FLAT_TOLERANCE: f64 = 1e-9;

/// A stroke in canonical form.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedStroke {
    points: Vec<Point>,
    vector: Vec<f64>,
}

impl NormalizedStroke {
    /// Resampled, rotated, scaled and centered points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Interleaved `[x0, y0, x1, y1, ...]` unit vector.
    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    /// Number of points (equal to the configured resample count).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for strokes built by [`normalize`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Runs the full normalization pipeline over a raw stroke.
pub fn normalize(points: &[Point], cfg: &RecognizerConfig) -> UnistrokeResult<NormalizedStroke> {
    let resampled = resample(points, cfg.num_points)?;
    let radians = indicative_angle(&resampled);
    let rotated = rotate_by(&resampled, -radians);
    let scaled = scale_to(&rotated, cfg.square_size, cfg.degenerate)?;
    let points = translate_to(&scaled, Point::default());
    let vector = vectorize(&points);
    Ok(NormalizedStroke { points, vector })
}

/// Angle from the first point to the centroid, in radians.
pub fn indicative_angle(points: &[Point]) -> f64 {
    let c = centroid(points);
    let first = points[0];
    (c.y - first.y).atan2(c.x - first.x)
}

/// Scales each axis independently so the bounding box becomes `size` x `size`.
///
/// An axis whose extent is zero (relative to the other axis) is handled by
/// `policy`: `Reject` fails with `DegenerateShape`, `Stretch` reuses the
/// other axis's extent for it.
pub fn scale_to(
    points: &[Point],
    size: f64,
    policy: DegeneratePolicy,
) -> UnistrokeResult<Vec<Point>> {
    let rect = bounding_box(points);
    let mut width = rect.width;
    let mut height = rect.height;
    let flat_x = is_flat(width, height);
    let flat_y = is_flat(height, width);

    if flat_x || flat_y {
        let degenerate = UnistrokeError::DegenerateShape { width, height };
        match policy {
            DegeneratePolicy::Reject => return Err(degenerate),
            DegeneratePolicy::Stretch if flat_x && flat_y => return Err(degenerate),
            DegeneratePolicy::Stretch if flat_x => width = height,
            DegeneratePolicy::Stretch => height = width,
        }
    }

    let sx = size / width;
    let sy = size / height;
    Ok(points
        .iter()
        .map(|p| Point::new(p.x * sx, p.y * sy))
        .collect())
}

fn is_flat(extent: f64, other: f64) -> bool {
    extent <= other * FLAT_TOLERANCE
}

/// Translates the points so their centroid lands on `origin`.
pub fn translate_to(points: &[Point], origin: Point) -> Vec<Point> {
    let c = centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x + origin.x - c.x, p.y + origin.y - c.y))
        .collect()
}

/// Flattens points into an interleaved vector with unit Euclidean norm.
///
/// A zero vector is returned unchanged.
pub fn vectorize(points: &[Point]) -> Vec<f64> {
    let mut vector = Vec::with_capacity(points.len() * 2);
    let mut sum = 0.0;
    for p in points {
        vector.push(p.x);
        vector.push(p.y);
        sum += p.x * p.x + p.y * p.y;
    }
    let magnitude = sum.sqrt();
    if magnitude > 0.0 {
        for v in &mut vector {
            *v /= magnitude;
        }
    }
    vector
}
