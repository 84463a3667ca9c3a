// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use archflow_core::config::ModelConfig;
use archflow_models::vector::VectorRowScanner;
use archflow_models::{ArchModel, ModelKind};

fn scanner() -> VectorRowScanner {
    VectorRowScanner::new(&ModelConfig::default()).unwrap()
}

#[test]
fn sweeps_bottom_to_top() {
    let avx = scanner();
    let rows: Vec<usize> = (0..10).map(|frame| avx.state(frame)).collect();
    assert_eq!(rows, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn one_full_row_per_frame() {
    let avx = scanner();
    for frame in 0..100 {
        let grid = avx.grid(frame);
        assert_eq!(grid.num_active(), 10);
        let row = avx.state(frame);
        assert!(grid.active_cells().all(|cell| cell.row == row));
        assert_eq!(grid, avx.grid(frame + 10));
    }
}

#[test]
fn model_metadata() {
    let mut avx = scanner();
    assert_eq!(avx.kind(), ModelKind::Avx2);
    assert_eq!(avx.summary(), "Total Cycles: 10\n(10 ops / cycle)\n[Vector]");
    assert!(avx.compute(3).unwrap().status.is_none());
}
