//! Low-level building blocks for custom recognition pipelines.
//!
//! These expose the individual normalization steps, metrics, and kernels
//! behind [`Recognizer`](crate::Recognizer). Most users should prefer the
//! top-level types.

pub use crate::geometry::{
    bounding_box, centroid, distance, path_distance, path_length, rotate_by,
};
pub use crate::metric::golden::distance_at_angle;
pub use crate::metric::scalar::ScalarKernel;
#[cfg(feature = "simd")]
pub use crate::metric::simd::SimdKernel;
pub use crate::metric::{
    optimal_cosine_distance, optimal_cosine_distance_with, AngularSearch, VectorKernel,
};
pub use crate::normalize::{indicative_angle, resample, scale_to, translate_to, vectorize};
pub use crate::template::builtin_points;
