// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Configuration of the driver.
//!
//! Settings are merged from several sources, each overriding the last:
//!
//!  1. built-in defaults ([SimConfig::default]),
//!  2. `archflow.toml` in the working directory, if present,
//!  3. the TOML file named by `--conf-file`, which must exist,
//!  4. environment variables prefixed with `ARCHFLOW_` (e.g.
//!     `ARCHFLOW_GRID_SIZE=12`),
//!  5. command-line arguments.
//!
//! For example, a configuration file could contain:
//! ```toml
//! grid_size = 10
//! total_frames = 200
//! stall_probability = 0.2
//! models = "lpu,traditional"
//! ```

use std::path::PathBuf;

use archflow_core::clock::{DEFAULT_TOTAL_FRAMES, FrameIndex};
use archflow_core::config::{
    DEFAULT_SEED, DEFAULT_STALL_DURATION, DEFAULT_STALL_PROBABILITY, ModelConfig,
};
use archflow_core::config_error;
use archflow_core::grid::DEFAULT_GRID_SIZE;
use archflow_core::types::{SimError, SimResult};
use archflow_models::ModelKind;
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONF_FILE: &str = "archflow.toml";

/// Prefix of the environment variables read.
pub const ENV_PREFIX: &str = "ARCHFLOW_";

/// Default playback rate handed to the renderer.
pub const DEFAULT_FPS: u32 = 10;

/// Command-line arguments and merged configuration.
///
/// Every field is optional so that a value that is not given on the command
/// line does not override one from a file or the environment.
#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(about = "Compare how processing-unit architectures work through a grid")]
pub struct SimConfig {
    /// Side length of the square grid.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<usize>,

    /// Number of frames to run for.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_frames: Option<FrameIndex>,

    /// Chance that the traditional model stalls on each frame, in the range
    /// [0, 1].
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stall_probability: Option<f64>,

    /// Number of frames the traditional model stays frozen once a stall has
    /// been triggered.
    #[arg(long, allow_negative_numbers = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stall_duration: Option<i64>,

    /// Seed for the random source of the traditional model.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Playback rate (frames per second) of the rendered output.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,

    /// Comma-separated list of models to show, in order.
    ///
    /// Choose from LPU, Traditional, CPU, AVX2, GPU, TPU and NPU.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<String>,

    /// Where to write the rendered frames. Use '-' to write to stdout.
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Colour the output with ANSI escape codes.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<bool>,

    /// Level of log message to display.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Show a progress bar while frames are computed.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<bool>,

    /// Path to additional configuration file
    ///
    /// This additional configuration file must contain TOML, and set values for
    /// fields of this struct.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_file: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: Some(DEFAULT_GRID_SIZE),
            total_frames: Some(DEFAULT_TOTAL_FRAMES),
            stall_probability: Some(DEFAULT_STALL_PROBABILITY),
            stall_duration: Some(DEFAULT_STALL_DURATION.into()),
            seed: Some(DEFAULT_SEED),
            fps: Some(DEFAULT_FPS),
            models: Some(
                ModelKind::ALL
                    .iter()
                    .map(ModelKind::name)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            output: Some("-".to_string()),
            colour: Some(false),
            log_level: Some("warn".to_string()),
            progress: Some(false),
            conf_file: None,
        }
    }
}

fn figment_error(e: figment::Error) -> SimError {
    SimError::Configuration(e.to_string())
}

impl SimConfig {
    /// A configuration with nothing set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            grid_size: None,
            total_frames: None,
            stall_probability: None,
            stall_duration: None,
            seed: None,
            fps: None,
            models: None,
            output: None,
            colour: None,
            log_level: None,
            progress: None,
            conf_file: None,
        }
    }

    /// Parse the command line and merge it with every other source.
    pub fn parse_all_sources() -> SimResult<Self> {
        Self::resolve(Self::parse())
    }

    /// Merge `cli` (the highest-priority source) with the defaults, files and
    /// environment.
    pub fn resolve(cli: SimConfig) -> SimResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(SimConfig::default()))
            .merge(Toml::file(DEFAULT_CONF_FILE));

        let conf_file = cli.conf_file.clone().or_else(|| {
            Figment::from(Env::prefixed(ENV_PREFIX))
                .extract_inner::<PathBuf>("conf_file")
                .ok()
        });
        if let Some(conf_file) = conf_file {
            if !conf_file.is_file() {
                return config_error!("configuration file '{}' not found", conf_file.display());
            }
            figment = figment.merge(Toml::file(conf_file));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(cli))
            .extract()
            .map_err(figment_error)
    }

    /// Build the validated model settings.
    pub fn model_config(&self) -> SimResult<ModelConfig> {
        let stall_duration = self.stall_duration.unwrap_or(DEFAULT_STALL_DURATION.into());
        let Ok(stall_duration) = u32::try_from(stall_duration) else {
            return config_error!(
                "stall duration must be a non-negative number of frames, got {stall_duration}"
            );
        };
        ModelConfig::new(
            self.grid_size.unwrap_or(DEFAULT_GRID_SIZE),
            self.stall_probability.unwrap_or(DEFAULT_STALL_PROBABILITY),
            stall_duration,
            self.seed.unwrap_or(DEFAULT_SEED),
        )
    }

    /// The models to run, in display order.
    pub fn model_kinds(&self) -> SimResult<Vec<ModelKind>> {
        match &self.models {
            Some(list) => ModelKind::parse_list(list),
            None => Ok(ModelKind::ALL.to_vec()),
        }
    }

    /// Number of frames to run for.
    #[must_use]
    pub fn total_frames(&self) -> FrameIndex {
        self.total_frames.unwrap_or(DEFAULT_TOTAL_FRAMES)
    }

    /// Playback rate for the renderer.
    pub fn fps(&self) -> SimResult<u32> {
        match self.fps.unwrap_or(DEFAULT_FPS) {
            0 => config_error!("fps must be positive"),
            fps => Ok(fps),
        }
    }

    /// Output destination, `-` for stdout.
    #[must_use]
    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or("-")
    }

    #[must_use]
    pub fn colour(&self) -> bool {
        self.colour.unwrap_or(false)
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }

    #[must_use]
    pub fn progress(&self) -> bool {
        self.progress.unwrap_or(false)
    }
}
