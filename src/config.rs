use crate::analyzer::{DEFAULT_SIZE_THRESHOLD_MB, DEFAULT_VALUE_THRESHOLD};
use crate::error::{FrameCheckError, Result};
use crate::grid::{DEFAULT_GRID_COLUMNS, DEFAULT_THUMBNAIL_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub size_threshold_mb: f64,
    pub value_threshold: f64,
    pub grid_columns: u32,
    pub thumbnail_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size_threshold_mb: DEFAULT_SIZE_THRESHOLD_MB,
            value_threshold: DEFAULT_VALUE_THRESHOLD,
            grid_columns: DEFAULT_GRID_COLUMNS,
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FrameCheckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("frame-check").join("config.json"))
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.size_threshold_mb, 0.2);
        assert_eq!(config.value_threshold, 0.02);
        assert_eq!(config.grid_columns, 4);
        assert_eq!(config.thumbnail_width, 100);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_default() {
        let config = Config::load_from(Path::new("/nonexistent/config.json")).unwrap();
        assert_eq!(config.size_threshold_mb, 0.2);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = std::env::temp_dir().join("frame-check-test-config");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let path = temp_dir.join("config.json");

        let config = Config {
            size_threshold_mb: 0.5,
            value_threshold: 0.05,
            grid_columns: 6,
            thumbnail_width: 120,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.size_threshold_mb, 0.5);
        assert_eq!(loaded.value_threshold, 0.05);
        assert_eq!(loaded.grid_columns, 6);
        assert_eq!(loaded.thumbnail_width, 120);

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
