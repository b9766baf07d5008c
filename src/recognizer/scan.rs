//! Sequential and parallel template scans.

use crate::metric::{stroke_distance, AngularSearch, Metric};
use crate::normalize::NormalizedStroke;
use crate::template::Template;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Distance from `candidate` to every template, in library order.
pub(crate) fn template_distances(
    candidate: &NormalizedStroke,
    templates: &[Template],
    metric: Metric,
    search: &AngularSearch,
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "rayon")]
    {
        if parallel {
            return templates
                .par_iter()
                .map(|t| stroke_distance(metric, search, candidate, t.stroke()))
                .collect();
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    templates
        .iter()
        .map(|t| stroke_distance(metric, search, candidate, t.stroke()))
        .collect()
}

/// Index and value of the smallest distance; the first one wins on ties.
///
/// NaN and infinite distances never win.
pub(crate) fn first_minimum(distances: &[f64]) -> Option<(usize, f64)> {
    let mut best = f64::INFINITY;
    let mut best_idx = None;
    for (idx, &d) in distances.iter().enumerate() {
        if d < best {
            best = d;
            best_idx = Some(idx);
        }
    }
    best_idx.map(|idx| (idx, best))
}
