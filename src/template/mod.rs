//! Named gesture templates.

pub mod builtin;

use crate::config::RecognizerConfig;
use crate::geometry::Point;
use crate::normalize::{normalize, NormalizedStroke};
use crate::util::UnistrokeResult;

pub use builtin::{builtin_points, BUILTIN_COUNT};

/// A named stroke stored in canonical form.
///
/// Normalization happens once, at construction; templates are immutable
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    name: String,
    stroke: NormalizedStroke,
}

impl Template {
    /// Normalizes a raw stroke into a template.
    pub fn new(
        name: impl Into<String>,
        points: &[Point],
        cfg: &RecognizerConfig,
    ) -> UnistrokeResult<Self> {
        let stroke = normalize(points, cfg)?;
        Ok(Self {
            name: name.into(),
            stroke,
        })
    }

    /// Template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical points.
    pub fn points(&self) -> &[Point] {
        self.stroke.points()
    }

    /// Unit vector used by the Protractor metric.
    pub fn vector(&self) -> &[f64] {
        self.stroke.vector()
    }

    /// The full normalized stroke.
    pub fn stroke(&self) -> &NormalizedStroke {
        &self.stroke
    }
}

/// Normalizes every built-in stroke with `cfg`, in library order.
pub(crate) fn builtin_templates(cfg: &RecognizerConfig) -> UnistrokeResult<Vec<Template>> {
    builtin::BUILTINS
        .iter()
        .map(|(name, raw)| {
            let points: Vec<Point> = raw.iter().copied().map(Point::from).collect();
            Template::new(*name, &points, cfg)
        })
        .collect()
}
