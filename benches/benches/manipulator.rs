// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use tactus_srt::{Manipulator, ManipulatorConfig, Pose, TouchAnchors, compute_delta};

const FRAME: f32 = 1.0 / 60.0;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f32(&mut self) -> f32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 40) as f32) / ((1_u64 << 24) as f32)
    }

    fn ground_point(&mut self) -> Vec3 {
        Vec3::new(self.next_f32() * 4.0, 0.0, self.next_f32() * 4.0)
    }
}

/// A wandering two-finger gesture: one anchor pair per frame.
fn gesture_path(frames: usize, seed: u64) -> Vec<TouchAnchors> {
    let mut rng = Lcg::new(seed);
    (0..frames)
        .map(|_| TouchAnchors::Two(rng.ground_point(), rng.ground_point()))
        .collect()
}

fn bench_compute_delta(c: &mut Criterion) {
    let path = gesture_path(1_024, 7);
    let mut group = c.benchmark_group("srt/compute_delta");
    group.throughput(Throughput::Elements(path.len() as u64));
    group.bench_function("two_finger", |b| {
        b.iter(|| {
            for anchors in &path {
                black_box(compute_delta(Vec3::ZERO, Vec3::X, black_box(*anchors)));
            }
        });
    });
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("srt/session");

    // Per-frame cost with one update per frame, as a touch tracker running at
    // display rate would produce.
    for frames in [60_usize, 600, 6_000] {
        let path = gesture_path(frames, 42);
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(
            BenchmarkId::new("update_and_advance", frames),
            &path,
            |b, path| {
                let mut manip = Manipulator::new(ManipulatorConfig::default()).unwrap();
                b.iter(|| {
                    manip.start(Pose::IDENTITY, path[0]);
                    for anchors in path {
                        manip.update(*anchors);
                        black_box(manip.advance_frame(FRAME));
                    }
                    manip.end();
                });
            },
        );
    }

    // Frames with no touch movement, which is the common case mid-gesture.
    group.bench_function("advance_only", |b| {
        let mut manip = Manipulator::new(ManipulatorConfig::default()).unwrap();
        manip.start(Pose::IDENTITY, (Vec3::ZERO, Vec3::X));
        manip.update((Vec3::ZERO, Vec3::new(0.0, 0.0, 1.5)));
        b.iter(|| black_box(manip.advance_frame(black_box(FRAME))));
    });

    group.finish();
}

criterion_group!(benches, bench_compute_delta, bench_session);
criterion_main!(benches);
