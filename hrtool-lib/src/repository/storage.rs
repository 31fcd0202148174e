//! Local key-value persistence for the horse collection.
//!
//! The whole collection lives under a single key as one JSON array. A missing
//! key, or a blob that isn't a JSON array, yields an empty collection. Within
//! the array, badly typed fields read as defaults and entries that aren't
//! records at all are skipped. Failed saves are logged and otherwise ignored.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{Result, repository::entities::Horse};

/// A local, persistent key-value store.
pub trait Storage: Send + Sync {
    /// Returns `None` if nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Write next to the target and rename over it so a failed write leaves the last good
        // blob in place
        let path = self.path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}

/// Keeps everything in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.into(), value.into());
        Ok(())
    }
}

/// Load the horse collection stored under `key`.
///
/// Never fails: read errors and corrupt data are logged and treated as an empty collection.
pub fn load(storage: &dyn Storage, key: &str) -> Vec<Horse> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            error!("Failed to read horses from storage: {e}");
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to parse horses from storage: {e}");
            return Vec::new();
        }
    };

    let total = entries.len();
    let horses: Vec<Horse> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(horse) => Some(horse),
            Err(e) => {
                warn!("Skipping stored entry {index}: {e}");
                None
            }
        })
        .collect();

    debug!("Loaded {} of {total} horses", horses.len());
    horses
}

/// Persist the whole horse collection under `key`. Returns `false` if the save failed, which has
/// already been logged.
pub fn save(storage: &dyn Storage, key: &str, horses: &[Horse]) -> bool {
    let result = serde_json::to_string(horses)
        .map_err(crate::Error::from)
        .and_then(|raw| storage.write(key, &raw));

    match result {
        Ok(()) => {
            debug!("Saved {} horses", horses.len());
            true
        }
        Err(e) => {
            error!("Failed to save horses to storage: {e}");
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use super::*;
    use crate::{
        Error,
        repository::entities::{Role, Score, Sex},
    };

    const KEY: &str = "hrtool_horses";

    /// Storage whose writes always fail, like a full browser quota.
    pub(crate) struct FullStorage;

    impl Storage for FullStorage {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::other("quota exceeded")))
        }
    }

    fn herd() -> Vec<Horse> {
        let mut bella = Horse::new("1", "Bella")
            .with_sex(Sex::Mare)
            .with_breed("Arabian")
            .with_life_number("123")
            .with_gp_overall(812.5)
            .with_role(Role::Broodmare)
            .with_notes("Quiet");
        bella.updated_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());

        let mut storm = Horse::new("2", "Storm").with_sex(Sex::Stallion);
        storm.gp_overall = Score::Null;

        vec![bella, storm, Horse::new("3", "Pip").with_sex(Sex::Foal)]
    }

    #[test]
    fn test_round_trip() {
        let storage = MemoryStorage::new();
        let horses = herd();

        assert!(save(&storage, KEY, &horses));

        assert_eq!(load(&storage, KEY), horses);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));
        let horses = herd();

        assert!(save(&storage, KEY, &horses));

        assert!(storage.path(KEY).exists());
        assert_eq!(load(&storage, KEY), horses);
    }

    #[test]
    fn test_missing_key() {
        let dir = tempdir().unwrap();

        assert!(load(&MemoryStorage::new(), KEY).is_empty());
        assert!(load(&FileStorage::new(dir.path()), KEY).is_empty());
    }

    #[test]
    fn test_corrupt_blob() {
        let storage = MemoryStorage::new();

        storage.write(KEY, "[{\"id\": \"1\", \"name\": ").unwrap();
        assert!(load(&storage, KEY).is_empty());

        storage.write(KEY, "{\"id\": \"1\"}").unwrap();
        assert!(load(&storage, KEY).is_empty());
    }

    #[test]
    fn test_odd_record_keeps_the_rest() {
        let storage = MemoryStorage::new();

        storage
            .write(
                KEY,
                r#"[{"id": "1", "name": "Bella"}, {"id": 2, "name": "Storm", "sex": null}]"#,
            )
            .unwrap();

        let horses = load(&storage, KEY);
        assert_eq!(
            horses,
            vec![Horse::new("1", "Bella"), Horse::new("2", "Storm")]
        );
    }

    #[test]
    fn test_non_record_entries_are_skipped() {
        let storage = MemoryStorage::new();

        storage
            .write(KEY, r#"[{"id": "1", "name": "Bella"}, "junk", 7, null]"#)
            .unwrap();

        assert_eq!(load(&storage, KEY), vec![Horse::new("1", "Bella")]);
    }

    #[test]
    fn test_non_finite_score_round_trips() {
        let storage = MemoryStorage::new();
        let mut horse = Horse::new("1", "Bella");
        horse.gp_overall = Score::parse("1e999");

        assert!(save(&storage, KEY, std::slice::from_ref(&horse)));

        assert_eq!(load(&storage, KEY), vec![horse]);
    }

    #[test]
    fn test_failed_save() {
        assert!(!save(&FullStorage, KEY, &herd()));
    }

    #[test]
    fn test_file_write_replaces_previous() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(save(&storage, KEY, &herd()));
        assert!(save(&storage, KEY, &[]));

        assert!(load(&storage, KEY).is_empty());
        assert_eq!(fs::read_to_string(storage.path(KEY)).unwrap(), "[]");
    }
}
