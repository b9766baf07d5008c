//! Arc-length resampling of raw strokes.

use crate::config::MAX_NUM_POINTS;
use crate::geometry::{distance, path_length, Point};
use crate::util::{UnistrokeError, UnistrokeResult};

/// Checks that a raw stroke can be resampled.
pub(crate) fn validate_stroke(points: &[Point]) -> UnistrokeResult<()> {
    if points.len() < 2 {
        return Err(UnistrokeError::TooFewPoints { got: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(UnistrokeError::NonFinitePoint { index });
    }
    let length = path_length(points);
    if !length.is_finite() || length <= 0.0 {
        return Err(UnistrokeError::ZeroLength);
    }
    Ok(())
}

/// Resamples a stroke to `n` points spaced evenly along its path.
///
/// Walking the stroke, a new point is interpolated every time the
/// accumulated arc length reaches `path_length / (n - 1)`. The interpolated
/// point becomes the start of the remaining segment. At most `n - 1` points
/// come from the walk; the output is padded with the stroke's final point, so
/// the result always has exactly `n` points. Capping the walk keeps it bounded
/// when the interval is below the float spacing of the coordinates and an
/// interpolated point rounds back onto its predecessor.
pub fn resample(points: &[Point], n: usize) -> UnistrokeResult<Vec<Point>> {
    validate_stroke(points)?;
    if n < 2 {
        return Err(UnistrokeError::InvalidConfig {
            reason: "resample count must be at least 2",
        });
    }
    if n > MAX_NUM_POINTS {
        return Err(UnistrokeError::InvalidConfig {
            reason: "resample count exceeds MAX_NUM_POINTS",
        });
    }

    let interval = path_length(points) / (n - 1) as f64;
    let mut acc = 0.0;
    let mut out = Vec::with_capacity(n);
    out.push(points[0]);

    let mut prev = points[0];
    let mut i = 1;
    while i < points.len() && out.len() < n - 1 {
        let cur = points[i];
        let d = distance(prev, cur);
        if acc + d >= interval {
            // acc < interval always holds here, so d > 0.
            let t = (interval - acc) / d;
            let q = Point::new(prev.x + t * (cur.x - prev.x), prev.y + t * (cur.y - prev.y));
            out.push(q);
            prev = q;
            acc = 0.0;
        } else {
            acc += d;
            prev = cur;
            i += 1;
        }
    }

    let last = points[points.len() - 1];
    while out.len() < n {
        out.push(last);
    }
    out.truncate(n);
    Ok(out)
}
