// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The systolic array (TPU) model: a column wave moving left to right.

use archflow_core::clock::FrameIndex;
use archflow_core::config::ModelConfig;
use archflow_core::grid::Grid;
use archflow_core::types::SimResult;
use log::trace;

use crate::{ArchModel, ModelFrame, ModelKind};

/// Activates one full column per frame.
#[derive(Clone, Debug)]
pub struct SystolicWaveGenerator {
    size: usize,
}

impl SystolicWaveGenerator {
    pub fn new(config: &ModelConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            size: config.grid_size(),
        })
    }

    /// The active column at `frame`.
    #[must_use]
    pub fn state(&self, frame: FrameIndex) -> usize {
        (frame % self.size as u64) as usize
    }

    /// The grid at `frame`.
    #[must_use]
    pub fn grid(&self, frame: FrameIndex) -> Grid {
        let col = self.state(frame);
        let mut grid = Grid::zeros(self.size);
        grid.activate_block(0..self.size, col..col + 1);
        grid
    }
}

impl ArchModel for SystolicWaveGenerator {
    fn kind(&self) -> ModelKind {
        ModelKind::Tpu
    }

    fn title(&self) -> &'static str {
        "TPU: Systolic"
    }

    fn summary(&self) -> String {
        format!("Total Cycles: {}\n(Flow / Wave)\n[High Throughput]", self.size)
    }

    fn grid_size(&self) -> usize {
        self.size
    }

    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame> {
        trace!("TPU: frame {frame} on column {}", self.state(frame));
        Ok(ModelFrame::new(self.grid(frame)))
    }
}
