#![allow(missing_docs, unused_results, clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion, black_box};
use glam::Vec2;
use helica::animation::{AnimationController, AnimationState, FrameInput};
use helica::geometry::{
    build_helix_geometry, build_tube_mesh, HelixParameters, TubeOptions,
};
use helica::lighting::LightChoreographer;
use helica::options::{ColorOptions, GeometryOptions, Options};
use helica::util::easing::EasingFunction;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn frame_advance_benchmark(c: &mut Criterion) {
    let controller = AnimationController::new(Options::default().animation);
    let mut state = AnimationState::new();
    state.feed_growth_progress(1.0);
    let input = FrameInput {
        dt: 1.0 / 60.0,
        elapsed: 4.2,
        scroll_progress: 0.35,
        pointer_offset: Vec2::new(0.2, -0.4),
    };
    // settle into idle so the hot per-frame path is what gets measured
    let _ = controller.advance(&mut state, &input);

    c.bench_function("idle_frame_advance", |b| {
        b.iter(|| black_box(controller.advance(&mut state, black_box(&input))))
    });
}

fn light_sample_benchmark(c: &mut Criterion) {
    let choreographer =
        LightChoreographer::new(&Options::default().lighting).unwrap();
    c.bench_function("light_rig_sample", |b| {
        b.iter(|| black_box(choreographer.sample(black_box(0.37), black_box(4.2))))
    });
}

fn geometry_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("helix_geometry_build");

    for turns in [3.0_f32, 5.0, 8.0, 12.0] {
        let geometry = GeometryOptions {
            turns,
            ..GeometryOptions::default()
        };
        let params = HelixParameters::from_options(&geometry).unwrap();
        let tube = TubeOptions::from_options(&geometry).unwrap();
        let colors = ColorOptions::default();
        let stride = geometry.base_pair_stride as usize;

        group.bench_function(format!("{turns}_turns"), |b| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                let helix =
                    build_helix_geometry(&params, stride, &colors, &mut rng)
                        .unwrap();
                black_box(build_tube_mesh(&helix.strand_a, &tube).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    frame_advance_benchmark,
    light_sample_benchmark,
    geometry_build_benchmark
);
criterion_main!(benches);
