// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The boundary between the models and whatever presents them.
//!
//! The driver hands a [Panel] per model to a [Render] implementation once per
//! frame. Two are provided:
//!
//!  - [TextRenderer] draws the panels side by side as text, optionally
//!    coloured using each model's [Palette].
//!  - [Recorder] keeps every panel in memory.

use std::io::Write;

use archflow_core::clock::FrameIndex;
use archflow_core::grid::Grid;
use archflow_core::types::SimResult;
use archflow_models::stall::Status;
use archflow_models::{ModelKind, Palette};
use itertools::Itertools;

/// Glyphs used for increasing intensity.
const SHADES: [char; 5] = ['.', '-', '+', '*', '#'];

/// Space between panels.
const GUTTER: &str = "   ";

/// What a renderer is told before the first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RunInfo {
    /// Number of frames that will be rendered.
    pub total_frames: FrameIndex,

    /// Playback rate.
    pub fps: u32,

    /// Side length of every grid.
    pub grid_size: usize,

    /// Heading shown above all panels.
    pub heading: String,
}

impl RunInfo {
    /// Time each frame should be shown for.
    #[must_use]
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }
}

/// The output of one model for one frame, with what is needed to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub kind: ModelKind,
    pub title: &'static str,
    pub summary: String,
    pub palette: Palette,
    pub grid: Grid,
    pub status: Option<Status>,
}

/// Something that presents panels.
pub trait Render {
    /// Called once before the first frame.
    fn begin(&mut self, _info: &RunInfo) -> SimResult {
        Ok(())
    }

    /// Present every panel for one frame.
    fn frame(&mut self, frame: FrameIndex, panels: &[Panel]) -> SimResult;

    /// Called once after the last frame.
    fn finish(&mut self) -> SimResult {
        Ok(())
    }
}

/// Keeps everything it is given.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub info: Option<RunInfo>,
    pub frames: Vec<(FrameIndex, Vec<Panel>)>,
    pub finished: bool,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every panel recorded for one model, in frame order.
    pub fn panels_for(&self, kind: ModelKind) -> impl Iterator<Item = &Panel> + '_ {
        self.frames
            .iter()
            .filter_map(move |(_, panels)| panels.iter().find(|p| p.kind == kind))
    }
}

impl Render for Recorder {
    fn begin(&mut self, info: &RunInfo) -> SimResult {
        self.info = Some(info.clone());
        Ok(())
    }

    fn frame(&mut self, frame: FrameIndex, panels: &[Panel]) -> SimResult {
        self.frames.push((frame, panels.to_vec()));
        Ok(())
    }

    fn finish(&mut self) -> SimResult {
        self.finished = true;
        Ok(())
    }
}

/// Draws panels side by side as lines of text.
///
/// Each cell takes two characters. A frame is a header line, one title line,
/// one status line and then one line per grid row.
pub struct TextRenderer<W>
where
    W: Write,
{
    writer: W,
    colour: bool,
}

impl<W> TextRenderer<W>
where
    W: Write,
{
    pub fn new(writer: W, colour: bool) -> Self {
        Self { writer, colour }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn cell(&self, palette: Palette, intensity: f64) -> String {
        let level = (intensity.clamp(0.0, 1.0) * (SHADES.len() - 1) as f64).round() as usize;
        let glyph = SHADES[level];
        if self.colour {
            let [r, g, b] = palette.colour(intensity);
            format!("\x1b[38;2;{r};{g};{b}m{glyph}\x1b[0m ")
        } else {
            format!("{glyph} ")
        }
    }
}

fn fit(text: &str, width: usize) -> String {
    format!("{text:<width$.width$}")
}

impl<W> Render for TextRenderer<W>
where
    W: Write,
{
    fn begin(&mut self, info: &RunInfo) -> SimResult {
        writeln!(
            self.writer,
            "{} ({} frames @ {} fps)",
            info.heading, info.total_frames, info.fps
        )?;
        Ok(())
    }

    fn frame(&mut self, frame: FrameIndex, panels: &[Panel]) -> SimResult {
        let width = panels.first().map_or(0, |p| p.grid.size() * 2);
        writeln!(self.writer, "frame {frame}")?;

        let titles = panels.iter().map(|p| fit(p.title, width)).join(GUTTER);
        writeln!(self.writer, "{}", titles.trim_end())?;

        let status = panels
            .iter()
            .map(|p| match p.status {
                Some(status) => fit(&status.to_string(), width),
                None => fit(p.summary.lines().next().unwrap_or(""), width),
            })
            .join(GUTTER);
        writeln!(self.writer, "{}", status.trim_end())?;

        let rows = panels.iter().map(|p| p.grid.size()).max().unwrap_or(0);
        for row in 0..rows {
            let line = panels
                .iter()
                .map(|p| match p.grid.rows().nth(row) {
                    Some(values) => values.iter().map(|v| self.cell(p.palette, *v)).join(""),
                    None => " ".repeat(width),
                })
                .join(GUTTER);
            writeln!(self.writer, "{}", line.trim_end())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> SimResult {
        self.writer.flush()?;
        Ok(())
    }
}
