// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The vector (AVX2) model: a whole row per frame, sweeping bottom to top.

use archflow_core::clock::FrameIndex;
use archflow_core::config::ModelConfig;
use archflow_core::grid::Grid;
use archflow_core::types::SimResult;
use log::trace;

use crate::{ArchModel, ModelFrame, ModelKind};

/// Activates one full row per frame.
#[derive(Clone, Debug)]
pub struct VectorRowScanner {
    size: usize,
}

impl VectorRowScanner {
    pub fn new(config: &ModelConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            size: config.grid_size(),
        })
    }

    /// The active row (counted from the top) at `frame`.
    #[must_use]
    pub fn state(&self, frame: FrameIndex) -> usize {
        let step = (frame % self.size as u64) as usize;
        self.size - 1 - step
    }

    /// The grid at `frame`.
    #[must_use]
    pub fn grid(&self, frame: FrameIndex) -> Grid {
        let row = self.state(frame);
        let mut grid = Grid::zeros(self.size);
        grid.activate_block(row..row + 1, 0..self.size);
        grid
    }
}

impl ArchModel for VectorRowScanner {
    fn kind(&self) -> ModelKind {
        ModelKind::Avx2
    }

    fn title(&self) -> &'static str {
        "AVX2: SIMD"
    }

    fn summary(&self) -> String {
        format!("Total Cycles: {0}\n({0} ops / cycle)\n[Vector]", self.size)
    }

    fn grid_size(&self) -> usize {
        self.size
    }

    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame> {
        trace!("AVX2: frame {frame} on row {}", self.state(frame));
        Ok(ModelFrame::new(self.grid(frame)))
    }
}
