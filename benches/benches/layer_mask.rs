// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tactus_layers::{LayerMask, layer_mask};

fn bench_layer_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("layers/layer_mask");

    for len in [1_usize, 8, 32] {
        let layers: Vec<u8> = (0..len).map(|i| (i % 32) as u8).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("raw", len), &layers, |b, layers| {
            b.iter(|| black_box(layer_mask(Some(black_box(layers)))));
        });
        group.bench_with_input(BenchmarkId::new("iter", len), &layers, |b, layers| {
            b.iter(|| black_box(LayerMask::from_layers(black_box(layers).iter().copied())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layer_mask);
criterion_main!(benches);
