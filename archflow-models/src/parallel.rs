// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The massively parallel (GPU) model.
//!
//! The whole grid is processed at once for [FLASH_ACTIVE_FRAMES] frames and
//! then sits idle for the rest of each [FLASH_PERIOD].

use archflow_core::clock::FrameIndex;
use archflow_core::config::{FLASH_ACTIVE_FRAMES, FLASH_PERIOD, ModelConfig};
use archflow_core::grid::Grid;
use archflow_core::types::SimResult;
use log::trace;

use crate::{ArchModel, ModelFrame, ModelKind};

/// Toggles every cell on and off together.
#[derive(Clone, Debug)]
pub struct ParallelFlasher {
    size: usize,
}

impl ParallelFlasher {
    pub fn new(config: &ModelConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            size: config.grid_size(),
        })
    }

    /// Whether the grid is active at `frame`.
    #[must_use]
    pub fn state(&self, frame: FrameIndex) -> bool {
        frame % FLASH_PERIOD < FLASH_ACTIVE_FRAMES
    }

    /// The grid at `frame`.
    #[must_use]
    pub fn grid(&self, frame: FrameIndex) -> Grid {
        if self.state(frame) {
            Grid::filled(self.size, 1.0)
        } else {
            Grid::zeros(self.size)
        }
    }
}

impl ArchModel for ParallelFlasher {
    fn kind(&self) -> ModelKind {
        ModelKind::Gpu
    }

    fn title(&self) -> &'static str {
        "GPU: Parallel"
    }

    fn summary(&self) -> String {
        format!(
            "Total Cycles: 1\n({} ops / cycle)\n[Massive Parallel]",
            self.size * self.size
        )
    }

    fn grid_size(&self) -> usize {
        self.size
    }

    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame> {
        let active = self.state(frame);
        trace!("GPU: frame {frame} {}", if active { "active" } else { "idle" });
        Ok(ModelFrame::new(self.grid(frame)))
    }
}
