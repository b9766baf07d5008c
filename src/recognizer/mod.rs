//! Template library and recognition entry point.
//!
//! A [`Recognizer`] owns an ordered list of templates. Construction seeds it
//! with the built-in gestures; [`Recognizer::add_template`] appends, and
//! [`Recognizer::reset_to_builtins`] truncates back to the seed set. Order is
//! never changed, because the first template reaching the minimum distance
//! wins.
//!
//! `recognize` takes `&self` and mutation takes `&mut self`, so sharing a
//! recognizer across threads needs the usual `RwLock` (or a single owner).

mod scan;

use std::time::Instant;

use crate::config::RecognizerConfig;
use crate::geometry::Point;
use crate::metric::{AngularSearch, Metric};
use crate::normalize::normalize;
use crate::template::{builtin_templates, Template};
use crate::trace::{trace_event, trace_span};
use crate::util::UnistrokeResult;

/// Name reported when the library holds no templates.
pub const NO_MATCH: &str = "No match.";

/// Outcome of a recognition call.
#[derive(Clone, Debug, PartialEq)]
pub struct Recognition {
    /// Name of the best template, or [`NO_MATCH`].
    pub name: String,
    /// Confidence in `[0, 1]`.
    pub score: f64,
    /// Wall-clock time spent in the call, in milliseconds.
    pub elapsed_ms: u64,
    /// Library position of the winning template; `None` for the sentinel.
    pub template_index: Option<usize>,
}

impl Recognition {
    fn no_match(elapsed_ms: u64) -> Self {
        Self {
            name: NO_MATCH.to_string(),
            score: 0.0,
            elapsed_ms,
            template_index: None,
        }
    }

    /// Returns false for the empty-library sentinel, even when a user
    /// template happens to be named [`NO_MATCH`].
    pub fn is_match(&self) -> bool {
        self.template_index.is_some()
    }
}

/// Single-stroke gesture recognizer with a mutable template library.
#[derive(Clone, Debug)]
pub struct Recognizer {
    templates: Vec<Template>,
    builtin_count: usize,
    cfg: RecognizerConfig,
    search: AngularSearch,
}

impl Recognizer {
    /// Creates a recognizer with the default config and the built-in templates.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in tables are fixed and normalize under
    /// the default config. Use [`Recognizer::with_config`] to get the error
    /// path for custom configs.
    pub fn new() -> Self {
        Self::with_config(RecognizerConfig::default())
            .expect("built-in templates normalize under the default config")
    }

    /// Creates a recognizer with the built-in templates normalized under `cfg`.
    pub fn with_config(cfg: RecognizerConfig) -> UnistrokeResult<Self> {
        cfg.validate()?;
        let templates = builtin_templates(&cfg)?;
        Self::from_parts(templates, cfg)
    }

    /// Creates a recognizer with no templates at all.
    ///
    /// `reset_to_builtins` on such a recognizer clears every added template.
    pub fn empty(cfg: RecognizerConfig) -> UnistrokeResult<Self> {
        cfg.validate()?;
        Self::from_parts(Vec::new(), cfg)
    }

    fn from_parts(templates: Vec<Template>, cfg: RecognizerConfig) -> UnistrokeResult<Self> {
        let search = AngularSearch::from_config(&cfg)?;
        Ok(Self {
            builtin_count: templates.len(),
            templates,
            cfg,
            search,
        })
    }

    /// Finds the template closest to a raw stroke.
    ///
    /// The stroke is normalized with the recognizer's config and compared
    /// against every template in library order. Scores are `1 - d` for
    /// Protractor and `1 - d / half_diagonal` for the golden-section search,
    /// clamped to `[0, 1]`. An empty library yields the [`NO_MATCH`] sentinel.
    pub fn recognize(&self, points: &[Point], metric: Metric) -> UnistrokeResult<Recognition> {
        let _span = trace_span!(
            "recognize",
            templates = self.templates.len(),
            metric = metric.as_str()
        )
        .entered();
        let start = Instant::now();

        let candidate = normalize(points, &self.cfg)?;
        let distances = scan::template_distances(
            &candidate,
            &self.templates,
            metric,
            &self.search,
            self.cfg.parallel,
        );
        let best = scan::first_minimum(&distances);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let Some((index, distance)) = best else {
            trace_event!("no_match", templates = self.templates.len());
            return Ok(Recognition::no_match(elapsed_ms));
        };

        let raw = match metric {
            Metric::Protractor => 1.0 - distance,
            Metric::GoldenSection => 1.0 - distance / self.cfg.half_diagonal(),
        };
        let score = raw.clamp(0.0, 1.0);
        trace_event!("best_match", index = index, distance = distance, score = score);

        Ok(Recognition {
            name: self.templates[index].name().to_string(),
            score,
            elapsed_ms,
            template_index: Some(index),
        })
    }

    /// Normalizes and appends a template, returning how many templates now
    /// share `name`.
    ///
    /// On error the library is left untouched.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        points: &[Point],
    ) -> UnistrokeResult<usize> {
        let template = Template::new(name, points, &self.cfg)?;
        let count = self.count_named(template.name()) + 1;
        self.templates.push(template);
        trace_event!("add_template", templates = self.templates.len(), variants = count);
        Ok(count)
    }

    /// Drops every template added after construction and returns the
    /// built-in count.
    pub fn reset_to_builtins(&mut self) -> usize {
        self.templates.truncate(self.builtin_count);
        trace_event!("reset_to_builtins", templates = self.templates.len());
        self.builtin_count
    }

    /// Number of templates currently in the library.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the library holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Number of templates restored by [`Recognizer::reset_to_builtins`].
    pub fn builtin_count(&self) -> usize {
        self.builtin_count
    }

    /// Returns true once templates have been added past the built-ins.
    pub fn has_user_templates(&self) -> bool {
        self.templates.len() > self.builtin_count
    }

    /// Templates in library order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Template names in library order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.templates.iter().map(Template::name)
    }

    /// Number of templates registered under `name`.
    pub fn count_named(&self, name: &str) -> usize {
        self.names().filter(|n| *n == name).count()
    }

    /// Configuration the library was built with.
    pub fn config(&self) -> &RecognizerConfig {
        &self.cfg
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Recognition, Recognizer, NO_MATCH};
    use crate::config::RecognizerConfig;
    use crate::geometry::Point;
    use crate::metric::Metric;
    use crate::template::BUILTIN_COUNT;
    use crate::UnistrokeError;

    fn caret() -> Vec<Point> {
        vec![
            Point::new(0.0, 100.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 100.0),
        ]
    }

    #[test]
    fn new_recognizer_holds_builtins() {
        let rec = Recognizer::new();
        assert_eq!(rec.len(), BUILTIN_COUNT);
        assert_eq!(rec.builtin_count(), BUILTIN_COUNT);
        assert!(!rec.has_user_templates());
    }

    #[test]
    fn add_template_counts_variants() {
        let mut rec = Recognizer::new();
        assert_eq!(rec.add_template("caret", &caret()).unwrap(), 1);
        assert_eq!(rec.add_template("caret", &caret()).unwrap(), 2);
        assert_eq!(rec.add_template("check", &caret()).unwrap(), 2);
        assert_eq!(rec.len(), BUILTIN_COUNT + 3);
        assert!(rec.has_user_templates());
    }

    #[test]
    fn failed_add_leaves_library_untouched() {
        let mut rec = Recognizer::new();
        assert!(rec.add_template("dot", &[Point::new(1.0, 1.0)]).is_err());
        assert_eq!(rec.len(), BUILTIN_COUNT);
    }

    #[test]
    fn reset_drops_user_templates() {
        let mut rec = Recognizer::new();
        rec.add_template("caret", &caret()).unwrap();
        assert_eq!(rec.reset_to_builtins(), BUILTIN_COUNT);
        assert_eq!(rec.len(), BUILTIN_COUNT);
        assert_eq!(rec.count_named("caret"), 0);
        assert_eq!(rec.reset_to_builtins(), BUILTIN_COUNT);
    }

    #[test]
    fn empty_library_reports_no_match() {
        let rec = Recognizer::empty(RecognizerConfig::default()).unwrap();
        for metric in [Metric::GoldenSection, Metric::Protractor] {
            let result = rec.recognize(&caret(), metric).unwrap();
            assert_eq!(result.name, NO_MATCH);
            assert_eq!(result.score, 0.0);
            assert!(!result.is_match());
        }
    }

    #[test]
    fn empty_library_still_validates_input() {
        let rec = Recognizer::empty(RecognizerConfig::default()).unwrap();
        let err = rec.recognize(&[], Metric::Protractor).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = RecognizerConfig {
            num_points: 0,
            ..RecognizerConfig::default()
        };
        assert!(Recognizer::with_config(cfg.clone()).is_err());
        assert!(Recognizer::empty(cfg).is_err());
    }

    #[test]
    fn recognition_is_match_for_named_results() {
        let r = Recognition {
            name: "heart".to_string(),
            score: 0.8,
            elapsed_ms: 0,
            template_index: Some(2),
        };
        assert!(r.is_match());
    }

    #[test]
    fn default_config_builds_builtins_without_error() {
        let rec = Recognizer::with_config(RecognizerConfig::default()).unwrap();
        assert_eq!(rec.len(), BUILTIN_COUNT);
        let names: Vec<_> = rec.names().collect();
        assert_eq!(names, Recognizer::new().names().collect::<Vec<_>>());
    }

    #[test]
    fn oversized_point_count_is_rejected() {
        let cfg = RecognizerConfig {
            num_points: usize::MAX,
            ..RecognizerConfig::default()
        };
        let err = Recognizer::with_config(cfg).unwrap_err();
        assert!(matches!(err, UnistrokeError::InvalidConfig { .. }));
    }

    #[test]
    fn template_named_like_sentinel_still_matches() {
        let mut rec = Recognizer::new();
        rec.add_template(NO_MATCH, &caret()).unwrap();
        let result = rec.recognize(&caret(), Metric::Protractor).unwrap();
        assert_eq!(result.name, NO_MATCH);
        assert_eq!(result.template_index, Some(BUILTIN_COUNT));
        assert!(result.is_match());
    }

    #[test]
    fn sentinel_has_no_template_index() {
        let rec = Recognizer::empty(RecognizerConfig::default()).unwrap();
        let result = rec.recognize(&caret(), Metric::GoldenSection).unwrap();
        assert_eq!(result.template_index, None);
    }
}
