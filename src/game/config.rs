use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use super::grid::{Playfield, Position};

/// Largest accepted playfield side, in logical units
pub const MAX_EXTENT: i32 = 100_000;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the drawing surface in logical units
    pub width: i32,
    /// Height of the drawing surface in logical units
    pub height: i32,
    /// Side of one cell, and the distance covered by one step
    pub grid_size: i32,
    /// Simulated time between two steps
    pub step_interval_ms: u64,
    /// Starting cell of the head, as (column, row)
    pub start_cell: (i32, i32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            grid_size: 25,
            step_interval_ms: 150,
            start_cell: (5, 5),
        }
    }
}

impl GameConfig {
    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid size must be positive");
        ensure!(
            self.width > 0 && self.height > 0,
            "playfield must be at least one cell in each direction"
        );
        ensure!(
            self.width <= MAX_EXTENT && self.height <= MAX_EXTENT,
            "playfield {}x{} exceeds {MAX_EXTENT} units",
            self.width,
            self.height
        );
        ensure!(
            self.width % self.grid_size == 0 && self.height % self.grid_size == 0,
            "playfield {}x{} is not a multiple of grid size {}",
            self.width,
            self.height,
            self.grid_size
        );
        ensure!(self.step_interval_ms > 0, "step interval must be positive");
        // Checked on indices so the conversion to units cannot overflow
        let (column, row) = self.start_cell;
        let playfield = self.playfield();
        ensure!(
            (0..playfield.columns()).contains(&column) && (0..playfield.rows()).contains(&row),
            "start cell {:?} is outside the playfield",
            self.start_cell
        );
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height, self.grid_size)
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    pub fn start_position(&self) -> Position {
        let (column, row) = self.start_cell;
        self.playfield().cell(column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.playfield(), Playfield::new(1200, 800, 25));
        assert_eq!(config.step_interval(), Duration::from_millis(150));
        assert_eq!(config.start_position(), Position::new(125, 125));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_misaligned_playfield() {
        let config = GameConfig {
            width: 1210,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_grid = GameConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(zero_grid.validate().is_err());

        let zero_interval = GameConfig {
            step_interval_ms: 0,
            ..Default::default()
        };
        assert!(zero_interval.validate().is_err());

        let outside = GameConfig {
            start_cell: (48, 0),
            ..Default::default()
        };
        assert!(outside.validate().is_err());
    }

    #[test]
    fn test_rejects_huge_start_cell() {
        let far = GameConfig {
            start_cell: (100_000_000, 0),
            ..Default::default()
        };
        assert!(far.validate().is_err());

        let negative = GameConfig {
            start_cell: (0, i32::MIN),
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_playfield() {
        let wide = GameConfig {
            width: 1_000_000_000,
            ..Default::default()
        };
        assert!(wide.validate().is_err());

        let largest = GameConfig {
            width: MAX_EXTENT,
            height: MAX_EXTENT,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "width": 500, "height": 300, "step_interval_ms": 100 }}"#).unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.width, 500);
        assert_eq!(config.height, 300);
        assert_eq!(config.grid_size, 25);
        assert_eq!(config.step_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_from_file_validates() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_size": 7 }}"#).unwrap();

        assert!(GameConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
