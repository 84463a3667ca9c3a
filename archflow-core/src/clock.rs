// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The frame clock advanced by the driver.
//!
//! Frames are numbered from 0 and increase by one per tick. Models wrap the
//! index with their own modulo arithmetic, so the clock itself imposes no
//! upper bound other than the number of frames the driver asks for.

/// Index of a single frame (tick) of the simulation.
pub type FrameIndex = u64;

/// Default number of frames issued by the driver.
pub const DEFAULT_TOTAL_FRAMES: FrameIndex = 100;

/// Issues frame indices `0..total` in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameClock {
    /// Total number of frames to issue.
    total: FrameIndex,

    /// The next frame to be issued.
    next: FrameIndex,
}

impl FrameClock {
    /// Create a clock that will issue `total` frames.
    #[must_use]
    pub fn new(total: FrameIndex) -> Self {
        Self { total, next: 0 }
    }

    /// Advance the clock, returning the frame to compute or `None` once every
    /// frame has been issued.
    pub fn tick(&mut self) -> Option<FrameIndex> {
        if self.next < self.total {
            let frame = self.next;
            self.next += 1;
            Some(frame)
        } else {
            None
        }
    }

    /// The most recently issued frame.
    #[must_use]
    pub fn now(&self) -> Option<FrameIndex> {
        self.next.checked_sub(1)
    }

    /// Total number of frames this clock issues.
    #[must_use]
    pub fn total(&self) -> FrameIndex {
        self.total
    }

    /// Number of frames still to be issued.
    #[must_use]
    pub fn remaining(&self) -> FrameIndex {
        self.total - self.next
    }

    /// Returns true once every frame has been issued.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.total
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_FRAMES)
    }
}

impl Iterator for FrameClock {
    type Item = FrameIndex;
    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameClock {}
