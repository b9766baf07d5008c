//! Hand-perturbed copies of the built-in gestures.
//!
//! Each case was scaled, translated, rotated by up to 20 degrees, thinned and
//! jittered before being recorded in `tests/data/strokes.json`.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use unistroke::{Metric, Point, Recognizer};

/// Lowest acceptable score for a perturbed stroke under either metric.
const MIN_SCORE: f64 = 0.75;

#[derive(Debug, Deserialize)]
struct Case {
    id: String,
    expected: String,
    points: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct Fixtures {
    cases: Vec<Case>,
}

fn load_fixtures() -> Fixtures {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/strokes.json");
    let text = fs::read_to_string(&path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn perturbed_builtins_are_recognized() {
    let fixtures = load_fixtures();
    assert_eq!(fixtures.cases.len(), 10);

    let rec = Recognizer::new();
    for case in &fixtures.cases {
        let points: Vec<Point> = case.points.iter().copied().map(Point::from).collect();
        for metric in [Metric::GoldenSection, Metric::Protractor] {
            let result = rec.recognize(&points, metric).unwrap();
            assert_eq!(result.name, case.expected, "{} {metric:?}", case.id);
            assert!(
                result.score >= MIN_SCORE,
                "{} {metric:?} score {}",
                case.id,
                result.score
            );
        }
    }
}

#[test]
fn fixture_added_as_template_wins_for_itself() {
    let fixtures = load_fixtures();
    let case = &fixtures.cases[0];
    let points: Vec<Point> = case.points.iter().copied().map(Point::from).collect();

    let mut rec = Recognizer::new();
    rec.add_template(case.id.clone(), &points).unwrap();
    let result = rec.recognize(&points, Metric::Protractor).unwrap();
    assert_eq!(result.name, case.id);
    assert!(result.score >= 0.999);
}
