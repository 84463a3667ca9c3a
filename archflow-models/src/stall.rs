// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The traditional processor model, which randomly stalls.
//!
//! While running normally the model shows sparse random activity: every cell
//! gets a uniform value scaled by [NOISE_SCALE], and anything below
//! [NOISE_THRESHOLD] is cleared. On each frame that is not already stalled
//! there is a fixed chance of a stall. A stall freezes the previous grid for
//! the frame that triggered it plus `stall_duration` further frames.
//!
//! The frame that triggers a stall reports `STALLING (<duration>)` and each
//! following frozen frame reports the number of frozen frames still to come:
//!
//! ```text
//! Processing, STALLING (8), STALLING (7), ..., STALLING (0), Processing
//! ```
//!
//! No random values are drawn while a stall is in progress.

use std::fmt;

use archflow_core::clock::FrameIndex;
use archflow_core::config::{ModelConfig, NOISE_SCALE, NOISE_THRESHOLD};
use archflow_core::grid::Grid;
use archflow_core::random::RandomSource;
use archflow_core::state_error;
use archflow_core::types::SimResult;
use log::{debug, trace};
use rand::rngs::StdRng;

use crate::{ArchModel, ModelFrame, ModelKind, Palette};

/// The stall counter of a [StochasticStallSimulator].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StallState {
    /// Frozen frames still to come.
    pub stall_frames_remaining: u32,
}

impl StallState {
    /// A state with `stall_frames_remaining` frozen frames still to come.
    #[must_use]
    pub fn new(stall_frames_remaining: u32) -> Self {
        Self {
            stall_frames_remaining,
        }
    }

    /// Returns true while frozen frames remain.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.stall_frames_remaining > 0
    }
}

/// Status label reported alongside each grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// A fresh grid was drawn.
    Processing,

    /// The grid is frozen; the value is the number of frozen frames still to
    /// come.
    Stalling(u32),
}

impl Status {
    /// Returns true when the grid was frozen.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        matches!(self, Status::Stalling(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Processing => write!(f, "Processing"),
            Status::Stalling(remaining) => write!(f, "STALLING ({remaining})"),
        }
    }
}

/// Result of advancing the stochastic model by one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Advance {
    /// The grid to show, the previous one while stalled.
    pub grid: Grid,

    /// The stall counter after this frame.
    pub state: StallState,

    /// Label for this frame.
    pub status: Status,
}

/// Draw a sparse noise grid, one value per cell in row-major order.
pub fn noise_grid<R>(size: usize, rng: &mut R) -> Grid
where
    R: RandomSource + ?Sized,
{
    Grid::from_fn(size, |_| {
        let v = rng.next_unit() * NOISE_SCALE;
        if v < NOISE_THRESHOLD { 0.0 } else { v }
    })
}

/// Random sparse activity interrupted by multi-frame stalls.
///
/// The random source is owned by the model so independent instances never
/// share a generator.
pub struct StochasticStallSimulator<R = StdRng>
where
    R: RandomSource,
{
    size: usize,
    stall_probability: f64,
    stall_duration: u32,

    // State
    state: StallState,
    previous: Option<Grid>,
    rng: R,
}

impl<R> StochasticStallSimulator<R>
where
    R: RandomSource,
{
    /// Create a model whose first frozen grid (if the very first frame
    /// stalls) is all zeros.
    pub fn new(config: &ModelConfig, rng: R) -> SimResult<Self> {
        let size = config.grid_size();
        Self::with_state(config, rng, StallState::default(), Some(Grid::zeros(size)))
    }

    /// Create a model resuming from an existing stall state.
    ///
    /// `previous` is the grid to show while frozen. Passing `None` is allowed,
    /// but advancing before a grid is available is an error.
    pub fn with_state(
        config: &ModelConfig,
        rng: R,
        state: StallState,
        previous: Option<Grid>,
    ) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            size: config.grid_size(),
            stall_probability: config.stall_probability(),
            stall_duration: config.stall_duration(),
            state,
            previous,
            rng,
        })
    }

    /// The current stall state.
    #[must_use]
    pub fn state(&self) -> StallState {
        self.state
    }

    /// The grid shown by the most recent frame.
    #[must_use]
    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    /// Access the random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the random source, e.g. to extend a scripted one.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Advance the model by one frame.
    ///
    /// Must be called with frames in increasing order.
    pub fn advance(&mut self, frame: FrameIndex) -> SimResult<Advance> {
        let Some(previous) = self.previous.as_ref() else {
            return state_error!("Traditional: no previous grid to show at frame {frame}");
        };

        if self.state.is_stalled() {
            self.state.stall_frames_remaining -= 1;
            let status = Status::Stalling(self.state.stall_frames_remaining);
            trace!("Traditional: frame {frame} {status}");
            return Ok(Advance {
                grid: previous.clone(),
                state: self.state,
                status,
            });
        }

        if self.rng.next_unit() < self.stall_probability {
            self.state.stall_frames_remaining = self.stall_duration;
            debug!(
                "Traditional: stall triggered at frame {frame} for {} frames",
                self.stall_duration
            );
            return Ok(Advance {
                grid: previous.clone(),
                state: self.state,
                status: Status::Stalling(self.stall_duration),
            });
        }

        let grid = noise_grid(self.size, &mut self.rng);
        trace!(
            "Traditional: frame {frame} processing, {} cells active",
            grid.num_active()
        );
        self.previous = Some(grid.clone());
        Ok(Advance {
            grid,
            state: self.state,
            status: Status::Processing,
        })
    }
}

impl<R> ArchModel for StochasticStallSimulator<R>
where
    R: RandomSource,
{
    fn kind(&self) -> ModelKind {
        ModelKind::Traditional
    }

    fn title(&self) -> &'static str {
        "CPU/GPU (Traditional)"
    }

    fn summary(&self) -> String {
        "Random Access & Memory Stalls".to_string()
    }

    fn palette(&self) -> Palette {
        Palette::Heat
    }

    fn grid_size(&self) -> usize {
        self.size
    }

    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame> {
        let advance = self.advance(frame)?;
        Ok(ModelFrame::with_status(advance.grid, advance.status))
    }
}
