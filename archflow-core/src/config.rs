// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Validated settings shared by the whole model family.
//!
//! The constants in this module fix the shape of each deterministic pattern.
//! The values carried by [ModelConfig] are the ones the driver exposes as
//! options.

use crate::config_error;
use crate::grid::DEFAULT_GRID_SIZE;
use crate::types::SimResult;

/// Largest grid side length accepted, so `grid_size * grid_size` always fits
/// in a `usize`.
pub const MAX_GRID_SIZE: usize = 1 << 12;

/// Chance that the stochastic model starts a stall on an eligible frame.
pub const DEFAULT_STALL_PROBABILITY: f64 = 0.10;

/// Frames frozen once a stall has been triggered.
pub const DEFAULT_STALL_DURATION: u32 = 8;

/// Seed for the stochastic model when none is given.
pub const DEFAULT_SEED: u64 = 123;

/// Period (in frames and in cells along the diagonal) of the flow wave.
pub const WAVE_PERIOD: u64 = 10;

/// Number of cells behind the wave front that are still lit.
pub const WAVE_WIDTH: u64 = 4;

/// Period of the parallel flasher.
pub const FLASH_PERIOD: u64 = 10;

/// Frames of each flash period during which every cell is active.
pub const FLASH_ACTIVE_FRAMES: u64 = 5;

/// Frames each quadrant stays active for in the tile scheduler.
pub const TILE_FRAMES: u64 = 5;

/// Scale applied to the uniform noise of the stochastic model.
pub const NOISE_SCALE: f64 = 0.8;

/// Noise values below this threshold are cleared to zero.
pub const NOISE_THRESHOLD: f64 = 0.5;

/// Settings for every architecture model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    grid_size: usize,
    stall_probability: f64,
    stall_duration: u32,
    seed: u64,
}

impl ModelConfig {
    /// Build a configuration, rejecting values no model can run with.
    pub fn new(
        grid_size: usize,
        stall_probability: f64,
        stall_duration: u32,
        seed: u64,
    ) -> SimResult<Self> {
        let config = Self {
            grid_size,
            stall_probability,
            stall_duration,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration.
    ///
    /// Models call this again when they are constructed, so a config can never
    /// reach a model without being checked.
    pub fn validate(&self) -> SimResult {
        if self.grid_size == 0 {
            return config_error!("grid size must be positive, got {}", self.grid_size);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return config_error!(
                "grid size must be at most {MAX_GRID_SIZE}, got {}",
                self.grid_size
            );
        }
        if !(0.0..=1.0).contains(&self.stall_probability) {
            return config_error!(
                "stall probability must be in the range [0, 1], got {}",
                self.stall_probability
            );
        }
        Ok(())
    }

    /// Return a copy of this configuration with a different grid size.
    ///
    /// The result is not validated until it is used to build a model.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Return a copy of this configuration with a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Side length of the square grid.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Chance of a stall on each eligible frame.
    #[must_use]
    pub fn stall_probability(&self) -> f64 {
        self.stall_probability
    }

    /// Frames frozen once a stall is triggered.
    #[must_use]
    pub fn stall_duration(&self) -> u32 {
        self.stall_duration
    }

    /// Seed for the stochastic model's random source.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            stall_probability: DEFAULT_STALL_PROBABILITY,
            stall_duration: DEFAULT_STALL_DURATION,
            seed: DEFAULT_SEED,
        }
    }
}
