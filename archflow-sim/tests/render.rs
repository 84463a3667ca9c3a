// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use std::fs;
use std::io::BufWriter;

use archflow_core::config::ModelConfig;
use archflow_models::ModelKind;
use archflow_sim::render::TextRenderer;
use archflow_sim::simulation::Simulation;

fn render_to_string(kinds: &[ModelKind], grid_size: usize, frames: u64) -> String {
    let config = ModelConfig::default().with_grid_size(grid_size);
    let renderer = TextRenderer::new(Vec::new(), false);
    let mut sim = Simulation::new(&config, kinds, frames, 10, renderer).unwrap();
    sim.run().unwrap();
    String::from_utf8(sim.into_renderer().into_inner()).unwrap()
}

#[test]
fn side_by_side_panels() {
    let text = render_to_string(&[ModelKind::Cpu, ModelKind::Gpu], 4, 1);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "CPU vs GPU Processing (4x4 Matrix) (1 frames @ 10 fps)");
    assert_eq!(lines[1], "frame 0");
    assert_eq!(lines[2], "CPU: Sca   GPU: Par");
    assert_eq!(lines[3], "Total Cy   Total Cy");
    // The scalar walker starts bottom-left, the flasher lights everything
    assert_eq!(lines[4], ". . . .    # # # #");
    assert_eq!(lines[7], "# . . .    # # # #");
    assert_eq!(lines[8], "");
}

#[test]
fn shows_stall_status() {
    let config = ModelConfig::new(4, 1.0, 8, 1).unwrap();
    let renderer = TextRenderer::new(Vec::new(), false);
    let mut sim = Simulation::new(&config, &[ModelKind::Traditional], 2, 10, renderer).unwrap();
    sim.run().unwrap();
    let text = String::from_utf8(sim.into_renderer().into_inner()).unwrap();
    assert!(text.contains("STALLING (8)"));
    assert!(text.contains("STALLING (7)"));
}

#[test]
fn wave_shading() {
    let text = render_to_string(&[ModelKind::Lpu], 4, 2);
    let frames: Vec<&str> = text.split("frame ").collect();
    // At frame 1 the top row is 0.75, 1.0, 0, 0
    let frame1: Vec<&str> = frames[2].lines().collect();
    assert_eq!(frame1[3], "* # . .");
}

#[test]
fn colour_output() {
    let config = ModelConfig::default().with_grid_size(2);
    let renderer = TextRenderer::new(Vec::new(), true);
    let mut sim = Simulation::new(&config, &[ModelKind::Gpu], 1, 10, renderer).unwrap();
    sim.run().unwrap();
    let text = String::from_utf8(sim.into_renderer().into_inner()).unwrap();
    assert!(text.contains("\x1b[38;2;255;0;0m#\x1b[0m"));
}

#[test]
fn writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.txt");
    let file = fs::File::create(&path).unwrap();

    let config = ModelConfig::default();
    let renderer = TextRenderer::new(BufWriter::new(file), false);
    let mut sim = Simulation::new(&config, &ModelKind::ALL, 20, 10, renderer).unwrap();
    sim.run().unwrap();
    drop(sim);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("frame ").count(), 20);
}
