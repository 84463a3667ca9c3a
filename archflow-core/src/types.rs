// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! Shared types.

use std::error::Error;
use std::fmt;
use std::io;

// Simulation errors

#[macro_export]
/// Build a [SimError::Configuration] result from `format!`-style arguments
macro_rules! config_error {
    ($($arg:tt)+) => {
        Err($crate::types::SimError::Configuration(format!($($arg)+)))
    };
}

#[macro_export]
/// Build a [SimError::StateConsistency] result from `format!`-style arguments
macro_rules! state_error {
    ($($arg:tt)+) => {
        Err($crate::types::SimError::StateConsistency(format!($($arg)+)))
    };
}

/// The `SimError` is what should be returned in the case of an error
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// A model or the driver was given settings it cannot run with.
    ///
    /// Raised at construction, before any frame has been computed.
    Configuration(String),

    /// A stateful model was asked to advance without the state it needs.
    StateConsistency(String),

    /// Writing rendered output failed.
    Io(String),
}

impl SimError {
    /// Returns true for [SimError::Configuration].
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, SimError::Configuration(_))
    }

    /// Returns true for [SimError::StateConsistency].
    #[must_use]
    pub fn is_state_consistency(&self) -> bool {
        matches!(self, SimError::StateConsistency(_))
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::Configuration(msg) => {
                write!(f, "Configuration error: {msg}")
            }
            SimError::StateConsistency(msg) => {
                write!(f, "State consistency error: {msg}")
            }
            SimError::Io(msg) => {
                write!(f, "I/O error: {msg}")
            }
        }
    }
}

impl Error for SimError {}

impl From<io::Error> for SimError {
    fn from(e: io::Error) -> Self {
        SimError::Io(e.to_string())
    }
}

/// The SimResult is the return type for most simulation functions
pub type SimResult<T = ()> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn too_small(size: usize) -> SimResult<usize> {
        if size == 0 {
            return config_error!("grid size must be positive, got {size}");
        }
        Ok(size)
    }

    #[test]
    fn macro_builds_configuration_error() {
        let err = too_small(0).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Configuration error: grid size must be positive, got 0"
        );
        assert_eq!(too_small(3), Ok(3));
    }

    #[test]
    fn io_errors_convert() {
        let err: SimError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err, SimError::Io("pipe closed".to_string()));
        assert!(!err.is_configuration());
    }
}
