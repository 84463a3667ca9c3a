// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The scalar CPU model: one cell per frame.
//!
//! The walk starts in the bottom-left corner, scans each row left to right and
//! then moves up a row, so a full sweep takes `size * size` frames.

use archflow_core::clock::FrameIndex;
use archflow_core::config::ModelConfig;
use archflow_core::grid::{Cell, Grid};
use archflow_core::types::SimResult;
use log::trace;

use crate::{ArchModel, ModelFrame, ModelKind};

/// Steps a single active cell through the grid.
#[derive(Clone, Debug)]
pub struct ScalarWalker {
    size: usize,
}

impl ScalarWalker {
    pub fn new(config: &ModelConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            size: config.grid_size(),
        })
    }

    /// Number of frames in a full sweep.
    #[must_use]
    pub fn period(&self) -> u64 {
        (self.size * self.size) as u64
    }

    /// The single active cell at `frame`.
    #[must_use]
    pub fn state(&self, frame: FrameIndex) -> Cell {
        let size = self.size as u64;
        let step = frame % self.period();
        let col = step % size;
        let row = size - 1 - step / size;
        Cell::new(row as usize, col as usize)
    }

    /// The grid at `frame`.
    #[must_use]
    pub fn grid(&self, frame: FrameIndex) -> Grid {
        let mut grid = Grid::zeros(self.size);
        grid.activate(self.state(frame));
        grid
    }
}

impl ArchModel for ScalarWalker {
    fn kind(&self) -> ModelKind {
        ModelKind::Cpu
    }

    fn title(&self) -> &'static str {
        "CPU: Scalar"
    }

    fn summary(&self) -> String {
        format!("Total Cycles: {}\n(1 op / cycle)\n[Baseline]", self.period())
    }

    fn grid_size(&self) -> usize {
        self.size
    }

    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame> {
        let cell = self.state(frame);
        trace!("CPU: frame {frame} at {cell}");
        Ok(ModelFrame::new(self.grid(frame)))
    }
}
