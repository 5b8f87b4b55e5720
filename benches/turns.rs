//! Benchmarks for turn application and queue playback.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strum::IntoEnumIterator;

use twisty::cube::format_state;
use twisty::{CubeState, MoveQueue, SliceGroup};

/// Benchmark a single slice turn on a live cube.
fn bench_apply_turn(c: &mut Criterion) {
    c.bench_function("apply_turn", |b| {
        let mut cube = CubeState::new();
        b.iter(|| cube.apply_turn(black_box(SliceGroup::Right), false));
    });
}

/// Benchmark queueing and playing back a 99-move script.
fn bench_queue_playback(c: &mut Criterion) {
    let script: Vec<SliceGroup> = SliceGroup::iter().cycle().take(99).collect();

    c.bench_function("queue_playback_99", |b| {
        b.iter(|| {
            let mut cube = CubeState::new();
            let mut queue = MoveQueue::new();
            for &group in &script {
                queue.enqueue(group, false);
            }
            queue.run(&mut cube);
            black_box(cube.is_solved())
        })
    });
}

/// Benchmark formatting the cube layout for display.
fn bench_format_state(c: &mut Criterion) {
    let cube = CubeState::new();

    c.bench_function("format_state", |b| {
        b.iter(|| format_state(black_box(&cube)))
    });
}

criterion_group!(
    benches,
    bench_apply_turn,
    bench_queue_playback,
    bench_format_state
);
criterion_main!(benches);
