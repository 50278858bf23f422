// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::LinkRankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config, malformed graph).
    Error = 1,
    /// Input validation failed (bad manifest, bad metadata, degenerate parameters).
    InvalidInput = 2,
    /// Strict mode was requested and the solver hit its iteration cap.
    NotConverged = 3,
    /// A query ran but matched nothing.
    NoResults = 4,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a handler error to the most specific exit code.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LinkRankError>() {
            Some(LinkRankError::NotConverged { .. }) => Self::NotConverged,
            Some(
                LinkRankError::Manifest(_)
                | LinkRankError::MalformedRecord { .. }
                | LinkRankError::EmptyGraph
                | LinkRankError::InvalidDamping(_)
                | LinkRankError::InvalidThreshold(_)
                | LinkRankError::InvalidIterationBounds { .. }
                | LinkRankError::StartVectorSize { .. }
                | LinkRankError::DimensionMismatch { .. }
                | LinkRankError::Config { .. },
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let strict = anyhow::Error::new(LinkRankError::NotConverged {
            iterations: 4,
            delta: 0.1,
        });
        assert_eq!(LinkRankExit::from_error(&strict).code(), 3);
        let damping = anyhow::Error::new(LinkRankError::InvalidDamping(1.5));
        assert_eq!(LinkRankExit::from_error(&damping), LinkRankExit::InvalidInput);
        let other = anyhow::anyhow!("Config file not found: x.toml");
        assert_eq!(LinkRankExit::from_error(&other), LinkRankExit::Error);
    }
}
