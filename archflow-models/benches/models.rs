// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use std::hint::black_box;

use archflow_core::config::ModelConfig;
use archflow_models::{ArchModel, ModelKind, build_models};
use criterion::{Criterion, criterion_group, criterion_main};

fn compute_frames(c: &mut Criterion) {
    let config = ModelConfig::default();
    for kind in ModelKind::ALL {
        let mut models = build_models(&[kind], &config).unwrap();
        let model = &mut models[0];
        let mut frame = 0;
        c.bench_function(&format!("compute_{}", kind.name().to_lowercase()), |b| {
            b.iter(|| {
                frame += 1;
                black_box(model.compute(black_box(frame)).unwrap())
            })
        });
    }
}

criterion_group!(benches, compute_frames);
criterion_main!(benches);
