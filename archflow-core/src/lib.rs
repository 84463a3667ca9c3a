// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Types shared by every architecture model and by the driver that renders
//! them.
//!
//! Each model maps a [frame index](clock::FrameIndex) to a [grid](grid::Grid)
//! of activation intensities. The driver advances a [clock](clock::FrameClock)
//! and hands each grid to a renderer.
//!
//! Configuration is validated once, when a [ModelConfig](config::ModelConfig)
//! is built, so no model has to deal with an invalid grid size or stall
//! probability while frames are being computed.

// Enable warnings for missing documentation
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod grid;
pub mod random;
pub mod test_helpers;
pub mod types;
