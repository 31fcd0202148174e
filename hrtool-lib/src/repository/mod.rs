use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use chrono::Utc;
use parking_lot::RwLock;

use crate::{
    Result,
    repository::{
        config::{Cfg, CoreConfig},
        ids::{IdGenerator, TimestampIds},
        storage::{FileStorage, MemoryStorage, Storage},
        store::Store,
    },
    views::{breeding::BreedingOptions, list::ListView, search},
};

pub mod config;
pub mod entities;
pub mod form;
pub mod ids;
pub mod storage;
pub mod store;

pub use entities::{Horse, HorseId, Role, Score, Sex};
pub use form::HorseForm;

/// Result of a mutation. The in-memory change always sticks; `persisted` reports whether the
/// follow-up save reached storage.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Committed<T> {
    pub value: T,
    pub persisted: bool,
}

/// Central access point for the horse records.
///
/// The [`Repository`] owns the in-memory [`Store`] and saves the whole collection to its
/// [`Storage`] after every mutation. Clones share the same store.
#[derive(Clone)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
    storage: Arc<dyn Storage>,
    ids: Arc<dyn IdGenerator>,
    cfg: Cfg,
}

impl Repository {
    /// Open the repository described by the user's configuration file.
    pub fn new() -> Result<Self> {
        Ok(Self::open(CoreConfig::load()?))
    }

    /// Open a file-backed repository in the configured data directory.
    pub fn open(cfg: CoreConfig) -> Self {
        let storage = FileStorage::new(cfg.data_dir());
        Self::with_storage(Arc::new(storage), Arc::new(TimestampIds::default()), cfg)
    }

    /// A repository that lives only as long as the process.
    pub fn in_memory(cfg: CoreConfig) -> Self {
        Self::with_storage(
            Arc::new(MemoryStorage::new()),
            Arc::new(TimestampIds::default()),
            cfg,
        )
    }

    pub fn with_storage(
        storage: Arc<dyn Storage>,
        ids: Arc<dyn IdGenerator>,
        cfg: CoreConfig,
    ) -> Self {
        let horses = storage::load(storage.as_ref(), cfg.storage_key());

        Self {
            store: Arc::new(RwLock::new(Store::new(horses))),
            storage,
            ids,
            cfg: Arc::new(RwLock::new(cfg)),
        }
    }

    /// Throw away the in-memory collection and load it again from storage.
    pub fn reload(&self) {
        let horses = storage::load(self.storage.as_ref(), self.cfg.read().storage_key());
        self.store.write().replace_all(horses);
    }

    pub fn cfg(&self) -> Cfg {
        self.cfg.clone()
    }

    /// Every horse, in insertion order.
    pub fn horses(&self) -> Vec<Horse> {
        self.store.read().as_slice().to_vec()
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    pub fn find(&self, id: &HorseId) -> Option<Horse> {
        self.store.read().find_by_id(id).cloned()
    }

    /// Horses matching a free-text query, in insertion order.
    pub fn search(&self, query: &str) -> Vec<Horse> {
        search::filter(self.store.read().as_slice(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Display rows for the horses matching `query`.
    pub fn list_view(&self, query: &str) -> ListView {
        let store = self.store.read();
        let matches = search::filter(store.as_slice(), query);

        ListView::render(matches, self.cfg.read().placeholder_image())
    }

    /// Selection lists for the breeding page. Always built from the whole collection.
    pub fn breeding_options(&self) -> BreedingOptions {
        BreedingOptions::project(self.store.read().as_slice())
    }

    /// Add or update the horse described by a submitted form.
    ///
    /// Fails with [`Error::NameRequired`](crate::Error::NameRequired) before touching anything
    /// if the name is blank. New horses never reuse an id already in the store.
    pub fn submit(&self, form: &HorseForm) -> Result<Committed<Horse>> {
        let mut store = self.store.write();
        let horse = form.to_horse(self.ids.as_ref(), Utc::now(), |id| {
            store.find_by_id(id).is_some()
        })?;
        store.upsert(horse.clone());

        Ok(Committed {
            value: horse,
            persisted: self.persist(&store),
        })
    }

    /// Insert or replace a horse as-is, then save.
    pub fn put(&self, horse: Horse) -> Committed<()> {
        let mut store = self.store.write();
        store.upsert(horse);

        Committed {
            value: (),
            persisted: self.persist(&store),
        }
    }

    /// Remove a horse, then save. Removing an unknown id isn't an error; `value` reports
    /// whether anything was removed.
    pub fn remove(&self, id: &HorseId) -> Committed<bool> {
        let mut store = self.store.write();
        let removed = store.remove(id);

        Committed {
            value: removed,
            persisted: self.persist(&store),
        }
    }

    fn persist(&self, store: &Store) -> bool {
        storage::save(
            self.storage.as_ref(),
            self.cfg.read().storage_key(),
            store.as_slice(),
        )
    }

    #[cfg(test)]
    /// Return a mock version of a [`Repository`] with in-memory storage and predictable ids.
    pub(crate) fn mock() -> Self {
        Self::with_storage(
            Arc::new(MemoryStorage::new()),
            Arc::new(ids::SequentialIds::default()),
            CoreConfig::mock(),
        )
    }
}

impl Debug for Repository {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("horses", &self.len())
            .field("cfg", &self.cfg.read())
            .finish_non_exhaustive()
    }
}
