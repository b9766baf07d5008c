//! Recognizer constants and construction-time configuration.

use crate::util::{UnistrokeError, UnistrokeResult};

/// Number of points every stroke is resampled to.
pub const NUM_POINTS: usize = 64;
/// Largest accepted resample count.
pub const MAX_NUM_POINTS: usize = 1 << 16;
/// Side of the reference square strokes are scaled into.
pub const SQUARE_SIZE: f64 = 250.0;
/// Half-width of the golden-section rotation search, in degrees.
pub const ANGLE_RANGE_DEG: f64 = 45.0;
/// Bracket width at which the golden-section search stops, in degrees.
pub const ANGLE_PRECISION_DEG: f64 = 2.0;
/// Golden ratio conjugate, `(sqrt(5) - 1) / 2`.
pub const PHI: f64 = 0.618_033_988_749_894_9;
/// Half the diagonal of the default reference square, `0.5 * sqrt(2 * S^2)`.
pub const HALF_DIAGONAL: f64 = 176.776_695_296_636_9;

/// How the normalizer treats a stroke that is flat along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Fail with `UnistrokeError::DegenerateShape`.
    #[default]
    Reject,
    /// Scale the flat axis by the other axis's extent, keeping the aspect ratio
    /// for that stroke instead of dividing by zero.
    Stretch,
}

/// Configuration for normalization and matching.
///
/// Values are fixed for the lifetime of a recognizer: templates are
/// normalized once with the same settings used for every candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct RecognizerConfig {
    /// Resample target count.
    pub num_points: usize,
    /// Reference square size used by the scale step.
    pub square_size: f64,
    /// Half-width of the rotation search range, in degrees.
    pub angle_range_deg: f64,
    /// Golden-section termination width, in degrees.
    pub angle_precision_deg: f64,
    /// Handling of strokes with a flat bounding box.
    pub degenerate: DegeneratePolicy,
    /// Score templates in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            num_points: NUM_POINTS,
            square_size: SQUARE_SIZE,
            angle_range_deg: ANGLE_RANGE_DEG,
            angle_precision_deg: ANGLE_PRECISION_DEG,
            degenerate: DegeneratePolicy::Reject,
            parallel: false,
        }
    }
}

impl RecognizerConfig {
    /// Validates configuration values.
    pub fn validate(&self) -> UnistrokeResult<()> {
        if self.num_points < 2 {
            return Err(UnistrokeError::InvalidConfig {
                reason: "num_points must be at least 2",
            });
        }
        if self.num_points > MAX_NUM_POINTS {
            return Err(UnistrokeError::InvalidConfig {
                reason: "num_points must not exceed MAX_NUM_POINTS",
            });
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(UnistrokeError::InvalidConfig {
                reason: "square_size must be finite and > 0",
            });
        }
        if !self.angle_range_deg.is_finite() || self.angle_range_deg < 0.0 {
            return Err(UnistrokeError::InvalidConfig {
                reason: "angle_range_deg must be finite and >= 0",
            });
        }
        if !self.angle_precision_deg.is_finite() || self.angle_precision_deg <= 0.0 {
            return Err(UnistrokeError::InvalidConfig {
                reason: "angle_precision_deg must be finite and > 0",
            });
        }
        Ok(())
    }

    /// Half the diagonal of the reference square; the largest mean distance
    /// the golden-section metric is expected to produce.
    pub fn half_diagonal(&self) -> f64 {
        0.5 * (2.0 * self.square_size * self.square_size).sqrt()
    }
}
