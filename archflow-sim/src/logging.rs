// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Console logging for the driver.
//!
//! Models emit `debug` messages for notable events (a stall being triggered,
//! the tile scheduler moving to a new quadrant) and `trace` messages for the
//! state of every frame. Log output goes to stderr so that it never mixes
//! with rendered frames written to stdout.

use std::str::FromStr;

use archflow_core::config_error;
use archflow_core::types::SimResult;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Take the configured string and convert it to a level filter.
///
/// Accepts the level names understood by [log] (case-insensitive) and `off`.
pub fn str_to_level(lvl: &str) -> SimResult<LevelFilter> {
    match LevelFilter::from_str(lvl) {
        Ok(level) => Ok(level),
        Err(_) => config_error!("unable to parse log level '{lvl}'"),
    }
}

/// Install the global logger.
///
/// Fails if the level is invalid or a logger has already been installed.
pub fn init_logging(lvl: &str) -> SimResult {
    let level = str_to_level(lvl)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    match TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        Ok(()) => Ok(()),
        Err(e) => config_error!("unable to install logger: {e}"),
    }
}
