// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

use archflow_core::clock::{DEFAULT_TOTAL_FRAMES, FrameClock};

#[test]
fn issues_frames_in_order() {
    let mut clock = FrameClock::new(3);
    assert_eq!(clock.now(), None);
    assert_eq!(clock.tick(), Some(0));
    assert_eq!(clock.now(), Some(0));
    assert_eq!(clock.tick(), Some(1));
    assert_eq!(clock.remaining(), 1);
    assert_eq!(clock.tick(), Some(2));
    assert!(clock.is_finished());
    assert_eq!(clock.tick(), None);
    assert_eq!(clock.now(), Some(2));
}

#[test]
fn default_runs_for_default_total() {
    let clock = FrameClock::default();
    assert_eq!(clock.total(), DEFAULT_TOTAL_FRAMES);
    assert_eq!(clock.len(), DEFAULT_TOTAL_FRAMES as usize);
    let frames: Vec<u64> = clock.collect();
    assert_eq!(frames, (0..DEFAULT_TOTAL_FRAMES).collect::<Vec<_>>());
}

#[test]
fn zero_frames() {
    let mut clock = FrameClock::new(0);
    assert!(clock.is_finished());
    assert_eq!(clock.tick(), None);
}
