// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The deterministic flow model ("LPU").
//!
//! A diagonal band of brightness slides across the grid. The intensity of a
//! cell depends only on the frame and the cell position, so the pattern never
//! stalls and repeats every [WAVE_PERIOD] frames.

use archflow_core::clock::FrameIndex;
use archflow_core::config::{ModelConfig, WAVE_PERIOD, WAVE_WIDTH};
use archflow_core::grid::{Cell, Grid};
use archflow_core::types::SimResult;
use log::trace;

use crate::{ArchModel, ModelFrame, ModelKind, Palette};

/// Intensity of `cell` at `frame`.
///
/// With `val = (frame - col - row) mod WAVE_PERIOD` the cell is lit at
/// `1 - val / WAVE_WIDTH` while `val < WAVE_WIDTH` and dark otherwise.
#[must_use]
pub fn wave_intensity(frame: FrameIndex, cell: Cell) -> f64 {
    let offset = (cell.row as u64 + cell.col as u64) % WAVE_PERIOD;
    let val = (frame % WAVE_PERIOD + WAVE_PERIOD - offset) % WAVE_PERIOD;
    if val < WAVE_WIDTH {
        1.0 - val as f64 / WAVE_WIDTH as f64
    } else {
        0.0
    }
}

/// Produces a smooth diagonal travelling wave.
#[derive(Clone, Debug)]
pub struct DeterministicWaveGenerator {
    size: usize,
}

impl DeterministicWaveGenerator {
    pub fn new(config: &ModelConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            size: config.grid_size(),
        })
    }

    /// The grid at `frame`.
    #[must_use]
    pub fn state(&self, frame: FrameIndex) -> Grid {
        Grid::from_fn(self.size, |cell| wave_intensity(frame, cell))
    }
}

impl ArchModel for DeterministicWaveGenerator {
    fn kind(&self) -> ModelKind {
        ModelKind::Lpu
    }

    fn title(&self) -> &'static str {
        "LPU (Deterministic)"
    }

    fn summary(&self) -> String {
        "No Stalls, Perfect Flow".to_string()
    }

    fn palette(&self) -> Palette {
        Palette::Flow
    }

    fn grid_size(&self) -> usize {
        self.size
    }

    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame> {
        trace!("LPU: frame {frame}, wave phase {}", frame % WAVE_PERIOD);
        Ok(ModelFrame::new(self.state(frame)))
    }
}
