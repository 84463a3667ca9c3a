// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use archflow_core::config::{
    DEFAULT_SEED, DEFAULT_STALL_DURATION, DEFAULT_STALL_PROBABILITY, MAX_GRID_SIZE, ModelConfig,
};
use archflow_core::grid::DEFAULT_GRID_SIZE;

#[test]
fn defaults() {
    let config = ModelConfig::default();
    assert_eq!(config.grid_size(), DEFAULT_GRID_SIZE);
    assert_eq!(config.stall_probability(), DEFAULT_STALL_PROBABILITY);
    assert_eq!(config.stall_duration(), DEFAULT_STALL_DURATION);
    assert_eq!(config.seed(), DEFAULT_SEED);
    assert!(config.validate().is_ok());
}

#[test]
fn zero_grid_size() {
    let err = ModelConfig::new(0, 0.1, 8, 1).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn oversized_grid() {
    assert!(ModelConfig::new(MAX_GRID_SIZE, 0.1, 8, 1).is_ok());
    for size in [MAX_GRID_SIZE + 1, usize::MAX / 2, usize::MAX] {
        let err = ModelConfig::new(size, 0.1, 8, 1).unwrap_err();
        assert!(err.is_configuration());
    }

    let config = ModelConfig::default().with_grid_size(usize::MAX / 2);
    assert!(config.validate().unwrap_err().is_configuration());
}

#[test]
fn probability_out_of_range() {
    for probability in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
        let result = ModelConfig::new(10, probability, 8, 1);
        assert!(result.unwrap_err().is_configuration());
    }
}

#[test]
fn probability_bounds_are_valid() {
    assert!(ModelConfig::new(10, 0.0, 8, 1).is_ok());
    assert!(ModelConfig::new(10, 1.0, 0, 1).is_ok());
}

#[test]
fn builder_changes_are_revalidated() {
    let config = ModelConfig::default().with_grid_size(0).with_seed(7);
    assert_eq!(config.seed(), 7);
    assert!(config.validate().unwrap_err().is_configuration());
}
