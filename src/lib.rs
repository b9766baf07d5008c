//! Unistroke is a single-stroke 2D gesture recognizer.
//!
//! Strokes are normalized into a canonical frame (resampled, rotated, scaled
//! and centered) and compared against a library of named templates with one
//! of two metrics: a golden-section search over rotation angles, or the
//! closed-form Protractor cosine distance. Optional features add rayon
//! parallelism across templates, a `wide` SIMD Protractor kernel, and
//! `tracing` spans.
//!
//! ```
//! use unistroke::{Metric, Point, Recognizer};
//!
//! let mut recognizer = Recognizer::new();
//! let caret = [Point::new(0.0, 100.0), Point::new(50.0, 0.0), Point::new(100.0, 100.0)];
//! recognizer.add_template("caret", &caret).unwrap();
//!
//! let result = recognizer.recognize(&caret, Metric::Protractor).unwrap();
//! assert_eq!(result.name, "caret");
//! ```

pub mod config;
pub mod geometry;
pub mod lowlevel;
pub mod metric;
pub mod normalize;
pub mod recognizer;
pub mod template;
mod trace;
pub mod util;

pub use config::{
    DegeneratePolicy, RecognizerConfig, ANGLE_PRECISION_DEG, ANGLE_RANGE_DEG, HALF_DIAGONAL,
    MAX_NUM_POINTS, NUM_POINTS, PHI, SQUARE_SIZE,
};
pub use geometry::{Point, Rect};
pub use metric::Metric;
pub use normalize::{normalize, NormalizedStroke};
pub use recognizer::{Recognition, Recognizer, NO_MATCH};
pub use template::{Template, BUILTIN_COUNT};
pub use util::{UnistrokeError, UnistrokeResult};
