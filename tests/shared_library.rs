use std::sync::RwLock;
use std::thread;

use unistroke::lowlevel::builtin_points;
use unistroke::{Metric, Point, Recognizer, BUILTIN_COUNT};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn recognizer_is_send_and_sync() {
    assert_send_sync::<Recognizer>();
}

#[test]
fn readers_share_a_library_behind_a_lock() {
    let library = RwLock::new(Recognizer::new());
    let caret = [
        Point::new(0.0, 100.0),
        Point::new(50.0, 0.0),
        Point::new(100.0, 100.0),
    ];

    thread::scope(|scope| {
        for name in ["good", "check", "zig-zag", "arrow", "heart"] {
            let library = &library;
            scope.spawn(move || {
                let points = builtin_points(name).unwrap();
                let rec = library.read().unwrap();
                let result = rec.recognize(&points, Metric::Protractor).unwrap();
                assert_eq!(result.name, name);
            });
        }
        scope.spawn(|| {
            let mut rec = library.write().unwrap();
            rec.add_template("caret", &caret).unwrap();
        });
    });

    let mut rec = library.write().unwrap();
    assert_eq!(rec.len(), BUILTIN_COUNT + 1);
    assert_eq!(rec.reset_to_builtins(), BUILTIN_COUNT);
}
