// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Helpers for writing deterministic tests of the stochastic models.

use std::collections::VecDeque;

use crate::random::RandomSource;

/// A [RandomSource] that replays a fixed list of values.
///
/// It panics once the values run out, which makes tests fail loudly if a
/// model draws more values than expected.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: VecDeque<f64>,
    draws: usize,
}

impl ScriptedSource {
    /// Create a source that returns `values` in order.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Append more values to the end of the script.
    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.values.extend(values);
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of values still to be drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.draws += 1;
        match self.values.pop_front() {
            Some(value) => value,
            None => panic!("ScriptedSource exhausted after {} draws", self.draws - 1),
        }
    }
}
