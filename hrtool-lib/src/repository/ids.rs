use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::Utc;

use crate::repository::entities::HorseId;

/// Allocates identifiers for newly created horses.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> HorseId;
}

/// Millisecond timestamps, bumped forward when two horses are created within the same
/// millisecond so identifiers stay unique.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicI64,
}

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> HorseId {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or(now);

        HorseId::new(now.max(previous.saturating_add(1)).to_string())
    }
}

/// A plain counter. Deterministic, so handy in tests and scripted imports.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> HorseId {
        HorseId::new(self.next.fetch_add(1, Ordering::SeqCst).to_string())
    }
}
