//! Error types for unistroke.

use thiserror::Error;

/// Result alias for unistroke operations.
pub type UnistrokeResult<T> = std::result::Result<T, UnistrokeError>;

/// Errors that can occur while normalizing or recognizing strokes.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum UnistrokeError {
    /// The stroke does not have enough points to define a path.
    #[error("stroke needs at least 2 points, got {got}")]
    TooFewPoints { got: usize },
    /// All points coincide, so the resampling interval is undefined.
    #[error("stroke has zero path length")]
    ZeroLength,
    /// A coordinate is NaN or infinite.
    #[error("stroke point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
    /// The rotated stroke is flat along one axis and cannot be scaled.
    #[error("degenerate stroke shape: bounding box is {width} x {height}")]
    DegenerateShape { width: f64, height: f64 },
    /// Recognizer configuration is invalid.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

impl UnistrokeError {
    /// Returns true for errors caused by a malformed input stroke.
    ///
    /// `DegenerateShape` is reported separately: the stroke is well formed
    /// but cannot be fitted into the reference square.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::TooFewPoints { .. } | Self::ZeroLength | Self::NonFinitePoint { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::UnistrokeError;

    #[test]
    fn invalid_input_groups_stroke_errors() {
        assert!(UnistrokeError::TooFewPoints { got: 1 }.is_invalid_input());
        assert!(UnistrokeError::ZeroLength.is_invalid_input());
        assert!(UnistrokeError::NonFinitePoint { index: 3 }.is_invalid_input());
        assert!(!UnistrokeError::DegenerateShape {
            width: 10.0,
            height: 0.0
        }
        .is_invalid_input());
        assert!(!UnistrokeError::InvalidConfig { reason: "x" }.is_invalid_input());
    }

    #[test]
    fn display_mentions_point_count() {
        let msg = UnistrokeError::TooFewPoints { got: 1 }.to_string();
        assert!(msg.contains("got 1"));
    }
}
