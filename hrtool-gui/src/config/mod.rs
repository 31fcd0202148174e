use std::{
    fs,
    path::Path,
    sync::Arc,
};

use hrtool_lib::fs::config_dir;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::theme::Theme;

pub mod theme;

const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// Settings that only matter to the desktop app, serialized to TOML.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Theme,
}

impl GuiConfig {
    pub fn load() -> Self {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join(FILE_NAME)),
            Err(e) => {
                warn!("No configuration directory, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(path);
            return cfg;
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Unable to read {}: {e}", path.display());
                return Self::default();
            }
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            warn!("Ignoring malformed {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn save(&self) {
        match config_dir() {
            Ok(dir) => self.save_to(&dir.join(FILE_NAME)),
            Err(e) => warn!("Unable to save the GUI configuration: {e}"),
        }
    }

    /// Failures are logged; the running app keeps its settings either way.
    pub fn save_to(&self, path: &Path) {
        let result = toml::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|contents| fs::write(path, contents).map_err(|e| e.to_string()));

        if let Err(e) = result {
            warn!("Unable to write {}: {e}", path.display());
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        let cfg = GuiConfig { theme: Theme::Dark };

        cfg.save_to(&path);

        assert_eq!(GuiConfig::load_from(&path), cfg);
    }

    #[test]
    fn test_malformed_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "theme = 3").unwrap();

        assert_eq!(GuiConfig::load_from(&path), GuiConfig::default());
    }
}
