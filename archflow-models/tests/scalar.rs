// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use std::collections::HashSet;

use archflow_core::config::{MAX_GRID_SIZE, ModelConfig};
use archflow_core::grid::Cell;
use archflow_models::scalar::ScalarWalker;
use archflow_models::{ArchModel, ModelKind};

fn walker() -> ScalarWalker {
    ScalarWalker::new(&ModelConfig::default()).unwrap()
}

#[test]
fn starts_bottom_left_ends_top_right() {
    let cpu = walker();
    assert_eq!(cpu.state(0), Cell::new(9, 0));
    assert_eq!(cpu.state(1), Cell::new(9, 1));
    assert_eq!(cpu.state(10), Cell::new(8, 0));
    assert_eq!(cpu.state(99), Cell::new(0, 9));
}

#[test]
fn one_active_cell_per_frame() {
    let cpu = walker();
    for frame in 0..250 {
        let grid = cpu.grid(frame);
        let active: Vec<Cell> = grid.active_cells().collect();
        assert_eq!(active, vec![cpu.state(frame)]);
        assert_eq!(grid[cpu.state(frame)], 1.0);
    }
}

#[test]
fn sweep_visits_every_cell_once() {
    let cpu = walker();
    assert_eq!(cpu.period(), 100);
    let visited: HashSet<Cell> = (0..100).map(|frame| cpu.state(frame)).collect();
    assert_eq!(visited.len(), 100);
    for frame in 0..300 {
        assert_eq!(cpu.state(frame), cpu.state(frame + 100));
    }
}

#[test]
fn other_grid_sizes() {
    let cpu = ScalarWalker::new(&ModelConfig::default().with_grid_size(3)).unwrap();
    assert_eq!(cpu.period(), 9);
    assert_eq!(cpu.state(0), Cell::new(2, 0));
    assert_eq!(cpu.state(8), Cell::new(0, 2));
    assert_eq!(cpu.state(9), Cell::new(2, 0));
}

#[test]
fn model_metadata() {
    let mut cpu = walker();
    assert_eq!(cpu.kind(), ModelKind::Cpu);
    assert_eq!(cpu.title(), "CPU: Scalar");
    assert_eq!(cpu.summary(), "Total Cycles: 100\n(1 op / cycle)\n[Baseline]");
    assert_eq!(cpu.compute(42).unwrap().grid, cpu.grid(42));
}

#[test]
fn largest_grid_does_not_overflow() {
    let config = ModelConfig::default().with_grid_size(MAX_GRID_SIZE);
    let cpu = ScalarWalker::new(&config).unwrap();
    let last = (MAX_GRID_SIZE * MAX_GRID_SIZE - 1) as u64;
    assert_eq!(cpu.period(), last + 1);
    assert_eq!(cpu.state(0), Cell::new(MAX_GRID_SIZE - 1, 0));
    assert_eq!(cpu.state(last), Cell::new(0, MAX_GRID_SIZE - 1));
    assert_eq!(cpu.state(u64::MAX), cpu.state(u64::MAX % cpu.period()));

    let config = ModelConfig::default().with_grid_size(usize::MAX / 2);
    assert!(ScalarWalker::new(&config).unwrap_err().is_configuration());
}
