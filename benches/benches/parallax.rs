// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use promenade_parallax::{ParallaxLayer, ParallaxRig, Ramp};

fn bench_layer_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallax/layer_state");

    let layer = ParallaxLayer::new(0.15)
        .with_rotation(0.02)
        .with_fade(0.002, 0.3);

    group.bench_function("single", |b| {
        b.iter(|| black_box(layer.state(black_box(640.0))));
    });

    group.finish();
}

fn bench_rig_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallax/rig_sweep");

    // One full-page scroll sweep, evaluated per simulated frame.
    for layers in [4usize, 16, 64] {
        let rig = ParallaxRig::ladder(layers, Ramp::new(0.1, 0.05), Ramp::new(0.02, 0.01));
        group.throughput(Throughput::Elements((layers * 240) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(layers), &rig, |b, rig| {
            b.iter(|| {
                for frame in 0..240 {
                    let offset = f64::from(frame) * 12.5;
                    for state in rig.states(offset) {
                        black_box(state);
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layer_state, bench_rig_sweep);
criterion_main!(benches);
