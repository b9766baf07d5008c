//! Python bindings for the unistroke gesture recognizer.
//!
//! Strokes are passed as sequences of `(x, y)` tuples.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use unistroke::{
    DegeneratePolicy, Metric, Point, Recognition as RustRecognition,
    Recognizer as RustRecognizer, RecognizerConfig, UnistrokeError,
};

/// Convert a UnistrokeError to a Python exception.
fn to_py_err(err: UnistrokeError) -> PyErr {
    match err {
        UnistrokeError::InvalidConfig { .. } => PyValueError::new_err(err.to_string()),
        _ if err.is_invalid_input() => PyValueError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

fn parse_metric(metric: &str) -> PyResult<Metric> {
    match metric.to_lowercase().as_str() {
        "golden_section" | "golden" => Ok(Metric::GoldenSection),
        "protractor" => Ok(Metric::Protractor),
        _ => Err(PyValueError::new_err(
            "metric must be 'golden_section' or 'protractor'",
        )),
    }
}

fn parse_degenerate(policy: &str) -> PyResult<DegeneratePolicy> {
    match policy.to_lowercase().as_str() {
        "reject" => Ok(DegeneratePolicy::Reject),
        "stretch" => Ok(DegeneratePolicy::Stretch),
        _ => Err(PyValueError::new_err(
            "degenerate must be 'reject' or 'stretch'",
        )),
    }
}

fn to_points(points: Vec<(f64, f64)>) -> Vec<Point> {
    points.into_iter().map(Point::from).collect()
}

/// Recognition result: best template name, score and elapsed time.
#[pyclass]
#[derive(Clone)]
pub struct Recognition {
    /// Name of the best template, or "No match." for an empty library.
    #[pyo3(get)]
    pub name: String,
    /// Confidence in [0, 1].
    #[pyo3(get)]
    pub score: f64,
    /// Wall-clock time spent, in milliseconds.
    #[pyo3(get)]
    pub elapsed_ms: u64,
    /// Library position of the winning template, or None for "No match.".
    #[pyo3(get)]
    pub template_index: Option<usize>,
}

#[pymethods]
impl Recognition {
    fn __repr__(&self) -> String {
        format!(
            "Recognition(name={:?}, score={:.4}, elapsed_ms={})",
            self.name, self.score, self.elapsed_ms
        )
    }
}

impl From<RustRecognition> for Recognition {
    fn from(r: RustRecognition) -> Self {
        Self {
            name: r.name,
            score: r.score,
            elapsed_ms: r.elapsed_ms,
            template_index: r.template_index,
        }
    }
}

/// Gesture recognizer seeded with the built-in templates.
#[pyclass]
pub struct Recognizer {
    inner: RustRecognizer,
}

#[pymethods]
impl Recognizer {
    /// Create a new Recognizer.
    ///
    /// Args:
    ///     num_points: Resample target count (default: 64)
    ///     square_size: Reference square size (default: 250.0)
    ///     angle_range_deg: Rotation search half-range (default: 45.0)
    ///     angle_precision_deg: Rotation search precision (default: 2.0)
    ///     degenerate: "reject" or "stretch" (default: "reject")
    ///     parallel: Score templates in parallel (default: False)
    ///     builtins: Seed with the built-in templates (default: True)
    #[new]
    #[pyo3(signature = (
        num_points = 64,
        square_size = 250.0,
        angle_range_deg = 45.0,
        angle_precision_deg = 2.0,
        degenerate = "reject",
        parallel = false,
        builtins = true
    ))]
    fn new(
        num_points: usize,
        square_size: f64,
        angle_range_deg: f64,
        angle_precision_deg: f64,
        degenerate: &str,
        parallel: bool,
        builtins: bool,
    ) -> PyResult<Self> {
        let cfg = RecognizerConfig {
            num_points,
            square_size,
            angle_range_deg,
            angle_precision_deg,
            degenerate: parse_degenerate(degenerate)?,
            parallel,
        };
        let inner = if builtins {
            RustRecognizer::with_config(cfg)
        } else {
            RustRecognizer::empty(cfg)
        }
        .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Recognize a stroke given as a list of (x, y) tuples.
    ///
    /// Args:
    ///     points: Stroke points
    ///     metric: "golden_section" or "protractor" (default: "golden_section")
    #[pyo3(signature = (points, metric = "golden_section"))]
    fn recognize(&self, points: Vec<(f64, f64)>, metric: &str) -> PyResult<Recognition> {
        let metric = parse_metric(metric)?;
        let result = self
            .inner
            .recognize(&to_points(points), metric)
            .map_err(to_py_err)?;
        Ok(result.into())
    }

    /// Add a named template; returns how many templates share the name.
    fn add_template(&mut self, name: String, points: Vec<(f64, f64)>) -> PyResult<usize> {
        self.inner
            .add_template(name, &to_points(points))
            .map_err(to_py_err)
    }

    /// Drop user templates; returns the built-in count.
    fn reset_to_builtins(&mut self) -> usize {
        self.inner.reset_to_builtins()
    }

    /// Template names in library order.
    fn names(&self) -> Vec<String> {
        self.inner.names().map(str::to_string).collect()
    }

    /// Number of built-in templates.
    #[getter]
    fn builtin_count(&self) -> usize {
        self.inner.builtin_count()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Recognizer(templates={}, builtins={})",
            self.inner.len(),
            self.inner.builtin_count()
        )
    }
}

/// Recognize a stroke against the built-in templates.
///
/// Args:
///     points: Stroke points as (x, y) tuples
///     use_protractor: Use the Protractor metric instead of the golden-section search
#[pyfunction]
#[pyo3(signature = (points, use_protractor = false))]
fn recognize(points: Vec<(f64, f64)>, use_protractor: bool) -> PyResult<Recognition> {
    let recognizer = RustRecognizer::new();
    let result = recognizer
        .recognize(&to_points(points), Metric::from_protractor(use_protractor))
        .map_err(to_py_err)?;
    Ok(result.into())
}

/// Python module for unistroke gesture recognition.
#[pymodule]
fn _unistroke(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Recognition>()?;
    m.add_class::<Recognizer>()?;
    m.add_function(wrap_pyfunction!(recognize, m)?)?;
    m.add("NO_MATCH", unistroke::NO_MATCH)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
