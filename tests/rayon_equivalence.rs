#![cfg(feature = "rayon")]

use unistroke::lowlevel::builtin_points;
use unistroke::{Metric, Point, Recognizer, RecognizerConfig};

fn wobble() -> Vec<Point> {
    (0..50)
        .map(|i| {
            let t = i as f64 * 0.2;
            Point::new(t * 20.0, (t * 1.3).sin() * 40.0 + t * 3.0)
        })
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let seq = Recognizer::with_config(RecognizerConfig::default()).unwrap();
    let par = Recognizer::with_config(RecognizerConfig {
        parallel: true,
        ..RecognizerConfig::default()
    })
    .unwrap();

    let strokes = [wobble(), builtin_points("heart").unwrap()];
    for pts in &strokes {
        for metric in [Metric::GoldenSection, Metric::Protractor] {
            let a = seq.recognize(pts, metric).unwrap();
            let b = par.recognize(pts, metric).unwrap();
            assert_eq!(a.name, b.name);
            assert_eq!(a.score.to_bits(), b.score.to_bits());
        }
    }
}

#[test]
fn parallel_scan_keeps_first_minimum() {
    let mut par = Recognizer::with_config(RecognizerConfig {
        parallel: true,
        ..RecognizerConfig::default()
    })
    .unwrap();
    for i in 0..8 {
        par.add_template(format!("wobble-{i}"), &wobble()).unwrap();
    }
    let result = par.recognize(&wobble(), Metric::Protractor).unwrap();
    assert_eq!(result.name, "wobble-0");
}
