// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Render the architecture models side by side.
//!
//! See `lib.rs` for details.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use archflow_core::types::SimError;
use archflow_sim::config::SimConfig;
use archflow_sim::logging::init_logging;
use archflow_sim::render::TextRenderer;
use archflow_sim::simulation::Simulation;
use indicatif::ProgressBar;
use log::info;

fn main() -> Result<(), SimError> {
    let config = SimConfig::parse_all_sources()?;
    init_logging(config.log_level())?;

    let model_config = config.model_config()?;
    let kinds = config.model_kinds()?;
    let total_frames = config.total_frames();
    info!(
        "Grid {0}x{0}, {1} frames, stall probability {2}, stall duration {3}, seed {4}",
        model_config.grid_size(),
        total_frames,
        model_config.stall_probability(),
        model_config.stall_duration(),
        model_config.seed()
    );

    let writer: Box<dyn Write> = match config.output() {
        "-" => Box::new(io::stdout().lock()),
        path => Box::new(BufWriter::new(File::create(path)?)),
    };
    let renderer = TextRenderer::new(writer, config.colour());

    let mut simulation = Simulation::new(
        &model_config,
        &kinds,
        total_frames,
        config.fps()?,
        renderer,
    )?;
    if config.progress() {
        simulation = simulation.with_progress(ProgressBar::new(total_frames));
    }

    let summary = simulation.run()?;
    info!("Pass ({} frames)", summary.frames);
    Ok(())
}
