// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Models of how different processing units touch the cells of a grid over
//! time.
//!
//! Every model implements [ArchModel] so the driver can hold a list of them
//! and query each one once per frame:
//!
//! | Model                                          | Name          | Pattern |
//! |------------------------------------------------|---------------|---------|
//! | [DeterministicWaveGenerator](wave)             | `LPU`         | diagonal wave, never stalls |
//! | [StochasticStallSimulator](stall)              | `Traditional` | random sparse activity with multi-frame stalls |
//! | [ScalarWalker](scalar)                         | `CPU`         | one cell per frame |
//! | [VectorRowScanner](vector)                     | `AVX2`        | one row per frame, bottom to top |
//! | [ParallelFlasher](parallel)                    | `GPU`         | whole grid on, then off |
//! | [SystolicWaveGenerator](systolic)              | `TPU`         | one column per frame, left to right |
//! | [TileBlockScheduler](tile)                     | `NPU`         | one quadrant at a time |
//!
//! All models except the stochastic one are pure functions of the frame
//! index and can be evaluated in any order.

use std::fmt;
use std::str::FromStr;

use archflow_core::clock::FrameIndex;
use archflow_core::config::ModelConfig;
use archflow_core::config_error;
use archflow_core::grid::Grid;
use archflow_core::types::{SimError, SimResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod parallel;
pub mod scalar;
pub mod stall;
pub mod systolic;
pub mod tile;
pub mod vector;
pub mod wave;

use crate::parallel::ParallelFlasher;
use crate::scalar::ScalarWalker;
use crate::stall::{Status, StochasticStallSimulator};
use crate::systolic::SystolicWaveGenerator;
use crate::tile::TileBlockScheduler;
use crate::vector::VectorRowScanner;
use crate::wave::DeterministicWaveGenerator;

/// The architectures that can be modelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Deterministic flow ([DeterministicWaveGenerator]).
    Lpu,
    /// Traditional processor with memory stalls ([StochasticStallSimulator]).
    Traditional,
    /// Scalar CPU ([ScalarWalker]).
    Cpu,
    /// SIMD vector unit ([VectorRowScanner]).
    Avx2,
    /// Massively parallel GPU ([ParallelFlasher]).
    Gpu,
    /// Systolic array ([SystolicWaveGenerator]).
    Tpu,
    /// Tiled NPU ([TileBlockScheduler]).
    Npu,
}

impl ModelKind {
    /// Every model, in the order they are shown by default.
    pub const ALL: [ModelKind; 7] = [
        ModelKind::Lpu,
        ModelKind::Traditional,
        ModelKind::Cpu,
        ModelKind::Avx2,
        ModelKind::Gpu,
        ModelKind::Tpu,
        ModelKind::Npu,
    ];

    /// Short name of the model.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Lpu => "LPU",
            ModelKind::Traditional => "Traditional",
            ModelKind::Cpu => "CPU",
            ModelKind::Avx2 => "AVX2",
            ModelKind::Gpu => "GPU",
            ModelKind::Tpu => "TPU",
            ModelKind::Npu => "NPU",
        }
    }

    /// Parse a comma-separated list of model names.
    pub fn parse_list(list: &str) -> SimResult<Vec<ModelKind>> {
        let kinds = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ModelKind::from_str)
            .collect::<SimResult<Vec<_>>>()?;
        if kinds.is_empty() {
            return config_error!("no models selected in '{list}'");
        }
        Ok(kinds)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ModelKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ModelKind::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
        {
            Some(kind) => Ok(*kind),
            None => config_error!(
                "unknown model '{s}', expected one of: {}",
                ModelKind::ALL.map(|kind| kind.name()).join(", ")
            ),
        }
    }
}

/// Colour scheme a renderer should use for a model.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Dark grey to cyan.
    Flow,
    /// Dark grey to orange.
    Heat,
    /// White background with red markers on active cells.
    Marker,
}

impl Palette {
    /// RGB colour for an intensity in `[0, 1]`.
    #[must_use]
    pub fn colour(&self, intensity: f64) -> [u8; 3] {
        let (low, high) = match self {
            Palette::Flow => ([0.1, 0.1, 0.1], [0.0, 0.8, 1.0]),
            Palette::Heat => ([0.1, 0.1, 0.1], [1.0, 0.6, 0.0]),
            Palette::Marker => ([1.0, 1.0, 1.0], [1.0, 0.0, 0.0]),
        };
        let t = intensity.clamp(0.0, 1.0);
        std::array::from_fn(|i| {
            let v = low[i] + (high[i] - low[i]) * t;
            (v * 255.0).round() as u8
        })
    }
}

/// The output of a model for a single frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelFrame {
    /// The activation pattern.
    pub grid: Grid,

    /// Status label, only reported by models with internal state.
    pub status: Option<Status>,
}

impl ModelFrame {
    /// A frame from a stateless model.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid, status: None }
    }

    /// A frame carrying a status label.
    #[must_use]
    pub fn with_status(grid: Grid, status: Status) -> Self {
        Self {
            grid,
            status: Some(status),
        }
    }

    /// Returns true when the model was frozen for this frame.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.status.is_some_and(|status| status.is_stalled())
    }
}

/// The capability shared by every architecture model.
pub trait ArchModel {
    /// Which architecture this is.
    fn kind(&self) -> ModelKind;

    /// Heading shown above the model.
    fn title(&self) -> &'static str;

    /// Caption describing the cost of processing the whole grid. May span
    /// several lines.
    fn summary(&self) -> String;

    /// Colour scheme for rendering.
    fn palette(&self) -> Palette {
        Palette::Marker
    }

    /// Side length of the grids this model produces.
    fn grid_size(&self) -> usize;

    /// Compute the grid for `frame`.
    ///
    /// Stateful models must be called with frames in increasing order.
    fn compute(&mut self, frame: FrameIndex) -> SimResult<ModelFrame>;
}

/// Build the requested models from a single configuration.
///
/// The configuration is checked before any model is built.
pub fn build_models(
    kinds: &[ModelKind],
    config: &ModelConfig,
) -> SimResult<Vec<Box<dyn ArchModel>>> {
    config.validate()?;
    let mut models: Vec<Box<dyn ArchModel>> = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let model: Box<dyn ArchModel> = match kind {
            ModelKind::Lpu => Box::new(DeterministicWaveGenerator::new(config)?),
            ModelKind::Traditional => Box::new(StochasticStallSimulator::new(
                config,
                StdRng::seed_from_u64(config.seed()),
            )?),
            ModelKind::Cpu => Box::new(ScalarWalker::new(config)?),
            ModelKind::Avx2 => Box::new(VectorRowScanner::new(config)?),
            ModelKind::Gpu => Box::new(ParallelFlasher::new(config)?),
            ModelKind::Tpu => Box::new(SystolicWaveGenerator::new(config)?),
            ModelKind::Npu => Box::new(TileBlockScheduler::new(config)?),
        };
        models.push(model);
    }
    Ok(models)
}
