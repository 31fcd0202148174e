use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    Result,
    fs::{config_dir, data_home},
};

const FILE_NAME: &str = "core.toml";

pub const DEFAULT_STORAGE_KEY: &str = "hrtool_horses";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/80x80.png?text=HR";

/// Handle to the library's core configuration
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// The library's core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Directory holding the persisted horse collection
    data_dir: PathBuf,
    /// Key the whole collection is stored under
    storage_key: String,
    /// Avatar shown for horses without an image
    placeholder_image: String,
}

impl CoreConfig {
    /// Load the configuration from the HR Tool config directory, writing out the defaults if the
    /// file doesn't exist yet. A file that can't be read or parsed falls back to the defaults.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(FILE_NAME);
        Ok(Self::load_from(&path))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            let cfg = Self::default();
            if let Err(e) = cfg.save_to(path) {
                warn!("Failed to write default configuration to {}: {e}", path.display());
            }
            return cfg;
        }

        match fs::read_to_string(path)
            .map_err(crate::Error::from)
            .and_then(|contents| Ok(toml::from_str::<Self>(&contents)?))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Ignoring configuration at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_dir()?.join(FILE_NAME))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;

        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[cfg(test)]
    /// Configuration that never touches the user's directories.
    pub(crate) fn mock() -> Self {
        Self {
            data_dir: std::env::temp_dir().join("hrtool-test"),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.into(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            // Relative fallback only used when no home directory can be found
            data_dir: data_home().unwrap_or_else(|| PathBuf::from("hrtool-data")),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = CoreConfig::load_from(&path);

        assert!(path.exists());
        assert_eq!(cfg.storage_key(), DEFAULT_STORAGE_KEY);
        assert_eq!(CoreConfig::load_from(&path), cfg);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "storage_key = \"stable\"\n").unwrap();

        let cfg = CoreConfig::load_from(&path);

        assert_eq!(cfg.storage_key(), "stable");
        assert_eq!(cfg.placeholder_image(), DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "storage_key = [").unwrap();

        let cfg = CoreConfig::load_from(&path);

        assert_eq!(cfg.storage_key(), DEFAULT_STORAGE_KEY);
    }
}
