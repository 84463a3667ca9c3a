// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The frame loop.
//!
//! A [Simulation] owns the clock, the models and the renderer. Each tick it
//! asks every model for its grid, in the configured order, and passes the
//! resulting panels to the renderer.

use archflow_core::clock::{FrameClock, FrameIndex};
use archflow_core::config::ModelConfig;
use archflow_core::config_error;
use archflow_core::types::SimResult;
use archflow_models::{ArchModel, ModelKind, build_models};
use indicatif::ProgressBar;
use log::{debug, info};

use crate::render::{Panel, Render, RunInfo};

/// What happened during a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Number of frames issued.
    pub frames: FrameIndex,

    /// For each model, the number of frames it spent frozen.
    pub stalled_frames: Vec<(ModelKind, FrameIndex)>,
}

impl RunSummary {
    /// Frozen frames for one model, if it was part of the run.
    #[must_use]
    pub fn stalled(&self, kind: ModelKind) -> Option<FrameIndex> {
        self.stalled_frames
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
    }
}

pub struct Simulation<R>
where
    R: Render,
{
    clock: FrameClock,
    models: Vec<Box<dyn ArchModel>>,
    renderer: R,
    info: RunInfo,
    stalled_frames: Vec<FrameIndex>,
    progress: Option<ProgressBar>,
    started: bool,
}

impl<R> Simulation<R>
where
    R: Render,
{
    /// Build every requested model from `config`.
    ///
    /// Fails with a configuration error, before any frame is computed, if the
    /// configuration or the model list is unusable.
    pub fn new(
        config: &ModelConfig,
        kinds: &[ModelKind],
        total_frames: FrameIndex,
        fps: u32,
        renderer: R,
    ) -> SimResult<Self> {
        if kinds.is_empty() {
            return config_error!("at least one model must be selected");
        }
        if fps == 0 {
            return config_error!("fps must be positive");
        }
        let models = build_models(kinds, config)?;
        let heading = kinds.iter().map(ModelKind::name).collect::<Vec<_>>().join(" vs ");
        let info = RunInfo {
            total_frames,
            fps,
            grid_size: config.grid_size(),
            heading: format!("{heading} Processing ({0}x{0} Matrix)", config.grid_size()),
        };
        Ok(Self {
            clock: FrameClock::new(total_frames),
            stalled_frames: vec![0; models.len()],
            models,
            renderer,
            info,
            progress: None,
            started: false,
        })
    }

    /// Report progress on the given bar.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn info(&self) -> &RunInfo {
        &self.info
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Give back the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Compute and render a single frame.
    ///
    /// Returns the frame rendered, or `None` once every frame has been issued.
    pub fn step(&mut self) -> SimResult<Option<FrameIndex>> {
        if !self.started {
            self.renderer.begin(&self.info)?;
            self.started = true;
        }
        let Some(frame) = self.clock.tick() else {
            return Ok(None);
        };

        let mut panels = Vec::with_capacity(self.models.len());
        for (model, stalled) in self.models.iter_mut().zip(self.stalled_frames.iter_mut()) {
            let out = model.compute(frame)?;
            if out.is_stalled() {
                *stalled += 1;
            }
            panels.push(Panel {
                kind: model.kind(),
                title: model.title(),
                summary: model.summary(),
                palette: model.palette(),
                grid: out.grid,
                status: out.status,
            });
        }
        self.renderer.frame(frame, &panels)?;

        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
        Ok(Some(frame))
    }

    /// Run every remaining frame and finish the renderer.
    pub fn run(&mut self) -> SimResult<RunSummary> {
        info!(
            "Running {} models for {} frames",
            self.models.len(),
            self.clock.remaining()
        );
        while let Some(frame) = self.step()? {
            debug!("frame {frame} rendered");
        }
        self.renderer.finish()?;
        if let Some(progress) = &self.progress {
            progress.finish();
        }

        let summary = RunSummary {
            frames: self.clock.total(),
            stalled_frames: self
                .models
                .iter()
                .map(|m| m.kind())
                .zip(self.stalled_frames.iter().copied())
                .collect(),
        };
        for (kind, stalled) in &summary.stalled_frames {
            info!("{kind}: {stalled}/{} frames stalled", summary.frames);
        }
        Ok(summary)
    }
}
