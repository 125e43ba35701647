/// Engine configuration
///
/// Every field has a default matching the reference behaviour, so an empty
/// TOML document is a valid configuration.
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::tween::Easing;

/// Default minimum |dx| + |dy| for a drag to count as a turn, in pixels
pub const DEFAULT_DRAG_THRESHOLD: f32 = 10.0;

/// Default quarter-turn animation length in seconds
pub const DEFAULT_TURN_DURATION_SECS: f32 = 0.4;

/// Default fraction of the remaining angle covered per idle tick
pub const DEFAULT_FOLLOW_DAMPING: f32 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum Manhattan drag length, in pixels
    pub drag_threshold: f32,
    /// Length of one quarter-turn animation, in seconds
    pub turn_duration_secs: f32,
    /// Easing of the turn animation
    pub easing: Easing,
    /// Per-tick interpolation factor of the idle orientation
    pub follow_damping: f32,
    /// Target angle at the viewport edge, in radians
    pub pointer_sensitivity: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            turn_duration_secs: DEFAULT_TURN_DURATION_SECS,
            easing: Easing::default(),
            follow_damping: DEFAULT_FOLLOW_DAMPING,
            pointer_sensitivity: PI,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // A zero threshold would accept a zero-length drag, which has no sign.
        if !(self.drag_threshold > 0.0) {
            return Err(invalid("drag_threshold", "must be greater than zero"));
        }
        if !(self.turn_duration_secs > 0.0 && self.turn_duration_secs.is_finite()) {
            return Err(invalid("turn_duration_secs", "must be a positive number of seconds"));
        }
        if !(self.follow_damping > 0.0 && self.follow_damping <= 1.0) {
            return Err(invalid("follow_damping", "must be in (0, 1]"));
        }
        if !self.pointer_sensitivity.is_finite() {
            return Err(invalid("pointer_sensitivity", "must be finite"));
        }
        Ok(())
    }

    /// Turn duration, rounded to whole microseconds
    pub fn turn_duration(&self) -> Duration {
        Duration::from_micros((self.turn_duration_secs * 1_000_000.0).round() as u64)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
