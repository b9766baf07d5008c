//! Distance metrics between normalized strokes.
//!
//! Two interchangeable metrics are provided:
//! - [`Metric::GoldenSection`]: searches the rotation angle that minimizes the
//!   mean point-to-point distance (the classic `$1` behavior).
//! - [`Metric::Protractor`]: closed-form optimal cosine distance between the
//!   unit vectors, with no search.
//!
//! The Protractor sums are computed by a [`VectorKernel`]; the scalar kernel
//! is the default and the `simd` feature swaps in a `wide`-based one.

pub mod golden;
pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

pub use golden::AngularSearch;

use crate::normalize::NormalizedStroke;

#[cfg(not(feature = "simd"))]
use scalar::ScalarKernel as ActiveKernel;
#[cfg(feature = "simd")]
use simd::SimdKernel as ActiveKernel;

/// Similarity metric used during recognition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Golden-section search over the rotation angle.
    #[default]
    GoldenSection,
    /// Optimal cosine distance over the stroke vectors.
    Protractor,
}

impl Metric {
    /// Maps the boolean "use Protractor" switch onto a metric.
    pub fn from_protractor(use_protractor: bool) -> Self {
        if use_protractor {
            Self::Protractor
        } else {
            Self::GoldenSection
        }
    }

    /// Short lowercase name, for logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoldenSection => "golden_section",
            Self::Protractor => "protractor",
        }
    }
}

/// Kernel computing the dot and cross sums used by the Protractor metric.
pub trait VectorKernel {
    /// Returns `(a, b)` for two interleaved `[x, y, ...]` vectors, where
    /// `a = sum(x1*x2 + y1*y2)` and `b = sum(x1*y2 - y1*x2)`.
    fn dot_cross(v1: &[f64], v2: &[f64]) -> (f64, f64);
}

/// Optimal cosine distance between two unit vectors.
///
/// Finds the rotation that best aligns `v2` with `v1` in closed form and
/// returns the angle between them at that rotation, in radians.
pub fn optimal_cosine_distance(v1: &[f64], v2: &[f64]) -> f64 {
    optimal_cosine_distance_with::<ActiveKernel>(v1, v2)
}

/// [`optimal_cosine_distance`] with an explicit kernel.
pub fn optimal_cosine_distance_with<K: VectorKernel>(v1: &[f64], v2: &[f64]) -> f64 {
    debug_assert_eq!(v1.len(), v2.len());
    let (a, b) = K::dot_cross(v1, v2);
    // atan(b / 0) is +-pi/2; only 0 / 0 needs a fallback.
    let angle = if a == 0.0 && b == 0.0 {
        0.0
    } else {
        (b / a).atan()
    };
    let (sin_a, cos_a) = angle.sin_cos();
    (a * cos_a + b * sin_a).clamp(-1.0, 1.0).acos()
}

/// Distance between a candidate and a template under `metric`.
pub(crate) fn stroke_distance(
    metric: Metric,
    search: &AngularSearch,
    candidate: &NormalizedStroke,
    template: &NormalizedStroke,
) -> f64 {
    match metric {
        Metric::GoldenSection => {
            search.distance_at_best_angle(candidate.points(), template.points())
        }
        Metric::Protractor => optimal_cosine_distance(template.vector(), candidate.vector()),
    }
}
