use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use unistroke::lowlevel::builtin_points;
use unistroke::{normalize, Metric, Point, Recognizer, RecognizerConfig};

fn make_stroke(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64 * std::f64::consts::TAU;
            Point::new(120.0 * t.cos() + 15.0 * (5.0 * t).sin(), 80.0 * t.sin())
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let cfg = RecognizerConfig::default();
    let heart = builtin_points("heart").unwrap();
    c.bench_function("normalize_heart", |b| {
        b.iter(|| black_box(normalize(black_box(&heart), &cfg).unwrap()));
    });
}

fn bench_recognize(c: &mut Criterion) {
    let rec = Recognizer::new();
    let stroke = make_stroke(120);

    c.bench_function("recognize_golden_section", |b| {
        b.iter(|| black_box(rec.recognize(black_box(&stroke), Metric::GoldenSection).unwrap()));
    });
    c.bench_function("recognize_protractor", |b| {
        b.iter(|| black_box(rec.recognize(black_box(&stroke), Metric::Protractor).unwrap()));
    });

    let mut large = Recognizer::new();
    for i in 0..64 {
        let variant: Vec<Point> = make_stroke(60 + i)
            .into_iter()
            .map(|p| Point::new(p.x, p.y * (1.0 + i as f64 * 0.01)))
            .collect();
        large.add_template(format!("loop-{i}"), &variant).unwrap();
    }
    c.bench_function("recognize_golden_section_69_templates", |b| {
        b.iter(|| black_box(large.recognize(black_box(&stroke), Metric::GoldenSection).unwrap()));
    });
}

criterion_group!(benches, bench_normalize, bench_recognize);
criterion_main!(benches);
