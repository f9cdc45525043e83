//! Error taxonomy for the simulation boundary.
//!
//! Failures here are fatal at the boundary where they occur; nothing is
//! retried. A failed probability roll is not an error, just the absence of
//! an event.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::LevelId;

/// Errors raised while constructing or transitioning to a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelError {
    /// The level factory has no entry for this id.
    UnknownLevel(LevelId),
    /// The factory produced a plan the engine cannot run.
    InvalidPlan { level: LevelId, reason: String },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::UnknownLevel(id) => {
                write!(f, "no level registered for {id:?}")
            }
            LevelError::InvalidPlan { level, reason } => {
                write!(f, "invalid plan for {level:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for LevelError {}
