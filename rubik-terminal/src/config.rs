/// Terminal host configuration
///
/// ```toml
/// [engine]
/// drag_threshold = 10.0
/// turn_duration_secs = 0.4
///
/// [display]
/// fps = 30
/// cell_width_px = 8.0
/// cell_height_px = 16.0
/// ```
use rubik_core::{ConfigError, EngineConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Frame rate and the pixel size assumed for one terminal cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub fps: u32,
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fps: 30,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

impl DisplaySettings {
    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Pixel coordinates of a cell's centre
    pub fn to_pixels(&self, column: u16, row: u16) -> (f32, f32) {
        (
            (column as f32 + 0.5) * self.cell_width_px,
            (row as f32 + 0.5) * self.cell_height_px,
        )
    }

    /// Pixel extent of a terminal of `columns` x `rows` cells
    pub fn viewport_px(&self, columns: u16, rows: u16) -> (f32, f32) {
        (
            columns as f32 * self.cell_width_px,
            rows as f32 * self.cell_height_px,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub engine: EngineConfig,
    pub display: DisplaySettings,
}

impl TerminalConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        if self.display.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.display.cell_width_px > 0.0 && self.display.cell_height_px > 0.0) {
            return Err(ConfigError::Invalid {
                field: "cell_width_px",
                reason: "cell dimensions must be positive".to_string(),
            });
        }
        Ok(())
    }
}
