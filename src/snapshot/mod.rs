//! The most recent published list of listings.
//!
//! A `Snapshot` is immutable once built. The store only ever swaps one
//! `Arc<Snapshot>` for another, so a reader holds either the old list or the
//! new one, never a mix.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Local};

use crate::listings::Listing;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    listings: Vec<Listing>,
    refreshed_at: Option<DateTime<Local>>,
}

impl Snapshot {
    /// The state before the first pipeline run completes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(listings: Vec<Listing>, refreshed_at: DateTime<Local>) -> Self {
        Self {
            listings,
            refreshed_at: Some(refreshed_at),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.refreshed_at.is_some()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.refreshed_at
    }

    /// Refresh time as shown to clients, e.g. `2024-05-01 14:03:59`.
    pub fn last_updated(&self) -> Option<String> {
        self.refreshed_at
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Shared holder of the current snapshot.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot current at the time of the call.
    pub fn read(&self) -> Arc<Snapshot> {
        // A panicking writer cannot leave a half-written Arc behind
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publishes `snapshot`, replacing whatever was there.
    pub fn replace(&self, snapshot: Arc<Snapshot>) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;
    }
}
