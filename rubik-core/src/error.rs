/// Error types for gesture intake and configuration
use std::path::PathBuf;

use thiserror::Error;

use crate::lattice::Axis;
use crate::registry::CubeletId;

/// Reasons a gesture or turn request did not start a turn.
///
/// None of these are fatal; the engine state is untouched when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureRejected {
    #[error("pointer released without a recorded drag")]
    NoDragInProgress,
    #[error("a turn is already in progress")]
    Busy,
    #[error("drag of {distance:.1}px is below the {threshold:.1}px threshold")]
    BelowThreshold { distance: f32, threshold: f32 },
    #[error("drag did not start on a cubelet")]
    NoPickTarget,
    #[error("picked cubelet {0} is not in the registry")]
    UnknownCubelet(CubeletId),
    #[error("no cubelets at {axis} = {value}")]
    EmptyLayer { axis: Axis, value: i32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
