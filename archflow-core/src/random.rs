// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The source of randomness used by the stochastic models.
//!
//! Models never reach for a process-wide generator. They are handed a
//! [RandomSource] at construction so a fixed seed (or a scripted sequence in
//! tests) reproduces a run exactly.

use rand::Rng;

/// A source of uniformly distributed values.
pub trait RandomSource {
    /// Return the next value in the range `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R> RandomSource for R
where
    R: Rng,
{
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}
