//! Benchmarks for snapping and event handling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidekit_core::{
    Marks, PointerTarget, Slider, SliderConfig, SliderEvent, Snapper, Step,
};

fn marked_config() -> SliderConfig {
    SliderConfig::new()
        .step(0.5)
        .marks(Marks::from_values((0..20).map(|i| f64::from(i) * 5.0 + 0.25)))
}

fn bench_snap_grid(c: &mut Criterion) {
    let snapper = SliderConfig::new().step(0.1).snapper().expect("valid");

    c.bench_function("snap_grid", |b| b.iter(|| snapper.snap(black_box(42.37))));
}

fn bench_snap_grid_and_marks(c: &mut Criterion) {
    let snapper = marked_config().snapper().expect("valid");

    c.bench_function("snap_grid_and_marks", |b| {
        b.iter(|| snapper.snap(black_box(42.37)))
    });
}

fn bench_snap_marks_only(c: &mut Criterion) {
    let config = marked_config();
    let snapper = Snapper::new(config.domain().expect("valid"), Step::Unset, config.marks);

    c.bench_function("snap_marks_only", |b| {
        b.iter(|| snapper.snap(black_box(42.37)))
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    let config = SliderConfig::new().range(true).value(vec![20.0, 80.0]);

    c.bench_function("drag_gesture_100_moves", |b| {
        b.iter(|| {
            let mut slider = Slider::new(&config).expect("valid");
            slider.handle_event(SliderEvent::PointerDown {
                target: PointerTarget::Handle(0),
                ratio: 0.2,
            });
            for i in 0..100 {
                slider.handle_event(SliderEvent::PointerMove {
                    ratio: black_box(f64::from(i) / 100.0),
                });
            }
            slider.handle_event(SliderEvent::PointerUp { ratio: 0.5 })
        })
    });
}

fn bench_track_click_push(c: &mut Criterion) {
    let config = SliderConfig::new()
        .range(true)
        .value(vec![10.0, 20.0, 30.0, 40.0, 50.0])
        .pushable(slidekit_core::Pushable::Distance(5.0));
    let mut slider = Slider::new(&config).expect("valid");

    c.bench_function("track_click_push_5_handles", |b| {
        b.iter(|| {
            slider.handle_event(SliderEvent::PointerDown {
                target: PointerTarget::Track,
                ratio: black_box(0.9),
            });
            slider.set_values(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        })
    });
}

criterion_group!(
    benches,
    bench_snap_grid,
    bench_snap_grid_and_marks,
    bench_snap_marks_only,
    bench_drag_gesture,
    bench_track_click_push,
);
criterion_main!(benches);
