// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The tiled (NPU) model.
//!
//! The grid is split into four equal quadrants. Each quadrant is processed as
//! a single block for [TILE_FRAMES] frames before the scheduler moves on, in
//! the fixed order given by [Quadrant::ALL].

use std::fmt;
use std::ops::Range;

use archflow_core::clock::FrameIndex;
use archflow_core::config::{ModelConfig, TILE_FRAMES};
use archflow_core::config_error;
use archflow_core::grid::{Cell, Grid};
use archflow_core::types::SimResult;
use log::{debug, trace};

use crate::{ArchModel, ModelFrame, ModelKind};

/// One of the four equal sub-blocks of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// The quadrants in scheduling order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// The quadrant at position `index` of the schedule (wrapping).
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Rows covered by this quadrant in a grid of side `size`.
    #[must_use]
    pub fn rows(&self, size: usize) -> Range<usize> {
        let half = size / 2;
        match self {
            Quadrant::TopLeft | Quadrant::TopRight => 0..half,
            Quadrant::BottomLeft | Quadrant::BottomRight => half..size,
        }
    }

    /// Columns covered by this quadrant in a grid of side `size`.
    #[must_use]
    pub fn cols(&self, size: usize) -> Range<usize> {
        let half = size / 2;
        match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => 0..half,
            Quadrant::TopRight | Quadrant::BottomRight => half..size,
        }
    }

    /// Returns true when `cell` lies inside this quadrant.
    #[must_use]
    pub fn contains(&self, size: usize, cell: Cell) -> bool {
        self.rows(size).contains(&cell.row) && self.cols(size).contains(&cell.col)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Quadrant::TopLeft => "Top-Left",
            Quadrant::TopRight => "Top-Right",
            Quadrant::BottomLeft => "Bottom-Left",
            Quadrant::BottomRight => "Bottom-Right",
        };
        write!(f, "{name}")
    }
}

/// Activates one quadrant at a time.
#[derive(Clone, Debug)]
pub struct TileBlockScheduler {
    size: usize,
}

impl TileBlockScheduler {
    /// The grid size must be even so the quadrants are equal.
    pub fn new(config: &ModelConfig) -> SimResult<Self> {
        config.validate()?;
        let size = config.grid_size();
        if size % 2 != 0 {
            return config_error!("NPU: tile scheduling needs an even grid size, got {size}");
        }
        Ok(Self { size })
    }

    /// Frames taken to visit every quadrant once.
    #[must_use]
    pub fn period(&self) -> u64 {
        TILE_FRAMES * Quadrant::ALL.len() as u64
    }

    /// The active quadrant at `frame`.
    #[must_use]
    pub fn state(&self, frame: FrameIndex) -> Quadrant {
        let cycle_frame = frame % self.period();
        Quadrant::from_index((cycle_frame / TILE_FRAMES) as usize)
    }

    /// The grid at `frame`.
    #[must_use]
    pub fn grid(&self, frame: FrameIndex) -> Grid {
        let quadrant = self.state(frame);
        let mut grid = Grid::zeros(self.size);
        grid.activate_block(quadrant.rows(self.size), quadrant.cols(self.size));
        grid
    }
}

impl ArchModel for TileBlockScheduler {
    fn kind(&self) -> ModelKind {
        ModelKind::Npu
    }

    fn title(&self) -> &'static str {
        "NPU: Tile/Block"
    }

    fn summary(&self) -> String {
        let half = self.size / 2;
        format!(
            "Total Cycles: {}\n({} ops / cycle)\n[Efficient Inference]",
            Quadrant::ALL.len(),
            half * half
        )
    }

    fn grid_size(&self) -> usize {
        self.size
    }

    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame> {
        let quadrant = self.state(frame);
        if frame % TILE_FRAMES == 0 {
            debug!("NPU: frame {frame} switching to {quadrant}");
        } else {
            trace!("NPU: frame {frame} in {quadrant}");
        }
        Ok(ModelFrame::new(self.grid(frame)))
    }
}
