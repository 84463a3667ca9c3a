// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use archflow_core::config::ModelConfig;
use archflow_models::scalar::ScalarWalker;
use archflow_models::stall::StochasticStallSimulator;
use archflow_models::wave::DeterministicWaveGenerator;
use archflow_models::{ArchModel, ModelKind, Palette, build_models};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn builds_every_model_in_order() {
    let models = build_models(&ModelKind::ALL, &ModelConfig::default()).unwrap();
    let kinds: Vec<ModelKind> = models.iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, ModelKind::ALL.to_vec());
    assert!(models.iter().all(|m| m.grid_size() == 10));
}

#[test]
fn every_model_produces_valid_grids() {
    let mut models = build_models(&ModelKind::ALL, &ModelConfig::default()).unwrap();
    for frame in 0..100 {
        for model in &mut models {
            let out = model.compute(frame).unwrap();
            assert_eq!(out.grid.size(), 10);
            assert!(out.grid.cells().all(|(_, v)| (0.0..=1.0).contains(&v)));
            assert_eq!(out.status.is_some(), model.kind() == ModelKind::Traditional);
        }
    }
}

#[test]
fn zero_grid_size_rejected() {
    let config = ModelConfig::default().with_grid_size(0);

    let err = build_models(&ModelKind::ALL, &config).err().unwrap();
    assert!(err.is_configuration());

    assert!(DeterministicWaveGenerator::new(&config).is_err());
    assert!(ScalarWalker::new(&config).is_err());
    assert!(StochasticStallSimulator::new(&config, StdRng::seed_from_u64(1)).is_err());
}

#[test]
fn parse_model_names() {
    assert_eq!("avx2".parse::<ModelKind>().unwrap(), ModelKind::Avx2);
    assert_eq!("Traditional".parse::<ModelKind>().unwrap(), ModelKind::Traditional);
    assert!("fpga".parse::<ModelKind>().unwrap_err().is_configuration());

    let kinds = ModelKind::parse_list("lpu, traditional,npu").unwrap();
    assert_eq!(kinds, vec![ModelKind::Lpu, ModelKind::Traditional, ModelKind::Npu]);
    assert!(ModelKind::parse_list(" , ").is_err());
    assert_eq!(ModelKind::Tpu.to_string(), "TPU");
}

#[test]
fn palettes_interpolate() {
    assert_eq!(Palette::Flow.colour(0.0), [26, 26, 26]);
    assert_eq!(Palette::Flow.colour(1.0), [0, 204, 255]);
    assert_eq!(Palette::Heat.colour(1.0), [255, 153, 0]);
    assert_eq!(Palette::Marker.colour(0.0), [255, 255, 255]);
    assert_eq!(Palette::Marker.colour(2.0), [255, 0, 0]);
}
