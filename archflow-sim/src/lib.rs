// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Run the architecture models side by side.
//!
//! The driver advances a frame clock, asks every selected model for its grid
//! and hands the grids to a renderer. The models themselves live in
//! [archflow_models].
//!
//! # Examples
//!
//! Show every model for the default 100 frames:
//! ```txt
//! cargo run --bin archflow-sim --release
//! ```
//!
//! Compare only the flow model with the stalling one, stalling more often,
//! and write the frames to a file:
//! ```txt
//! cargo run --bin archflow-sim --release -- --models lpu,traditional \
//!     --stall-probability 0.3 --output frames.txt
//! ```
//!
//! Settings can also come from `archflow.toml` or `ARCHFLOW_*` environment
//! variables; see [config].

pub mod config;
pub mod logging;
pub mod render;
pub mod simulation;
