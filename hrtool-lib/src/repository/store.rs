use tracing::debug;

use crate::repository::entities::{Horse, HorseId};

/// In-memory, insertion-ordered collection of horses.
///
/// The store never persists anything itself; [`Repository`](crate::Repository) saves after
/// every mutation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Store {
    horses: Vec<Horse>,
}

impl Store {
    pub fn new(horses: Vec<Horse>) -> Self {
        Self { horses }
    }

    /// Replace the horse with the same id where it stands, or append it.
    pub fn upsert(&mut self, horse: Horse) {
        match self.horses.iter_mut().find(|h| h.id == horse.id) {
            Some(existing) => {
                debug!("Updated horse {}", horse.id);
                *existing = horse;
            }
            None => {
                debug!("Added horse {}", horse.id);
                self.horses.push(horse);
            }
        }
    }

    /// Remove the horse with the given id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &HorseId) -> bool {
        let before = self.horses.len();
        self.horses.retain(|h| &h.id != id);

        let removed = self.horses.len() != before;
        if removed {
            debug!("Removed horse {id}");
        }

        removed
    }

    pub fn find_by_id(&self, id: &HorseId) -> Option<&Horse> {
        self.horses.iter().find(|h| &h.id == id)
    }

    /// Swap in a freshly loaded collection.
    pub fn replace_all(&mut self, horses: Vec<Horse>) {
        self.horses = horses;
    }

    pub fn as_slice(&self) -> &[Horse] {
        &self.horses
    }

    pub fn len(&self) -> usize {
        self.horses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.horses.is_empty()
    }
}
