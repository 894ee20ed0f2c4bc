//! Favorites tracking
//!
//! The favorites set is stored under the `favorites` key as a JSON array of
//! ids and rewritten in full on every toggle. Storage failures are logged and
//! otherwise ignored: favorites then only live for the current session.

use std::collections::HashSet;

use super::storage::Persistence;
use crate::error::StorageError;

/// Storage key holding the favorites array
pub const FAVORITES_KEY: &str = "favorites";

/// Set of favorited outfit ids, in the order they were favorited
pub struct Favorites {
    ids: Vec<u32>,
    store: Box<dyn Persistence>,
}

impl Favorites {
    /// Load favorites from `store`, keeping only ids accepted by `is_known`.
    ///
    /// Missing, unreadable or malformed data yields an empty set.
    pub fn load(store: Box<dyn Persistence>, is_known: impl Fn(u32) -> bool) -> Self {
        let stored = match read_ids(store.as_ref()) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("⚠️  Ignoring stored favorites: {}", e);
                Vec::new()
            }
        };

        let mut seen = HashSet::new();
        let ids: Vec<u32> = stored
            .into_iter()
            .filter(|id| is_known(*id) && seen.insert(*id))
            .collect();

        log::debug!("Loaded {} favorites", ids.len());

        Favorites { ids, store }
    }

    /// Add `id` if absent, remove it if present, then persist the whole set.
    ///
    /// `id` must be a catalog id; unlike `load`, this does not filter unknown ids.
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        let now_favorite = match self.ids.iter().position(|fav| *fav == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };

        if let Err(e) = self.persist() {
            log::warn!("⚠️  Failed to save favorites: {}", e);
        }

        now_favorite
    }

    /// Membership test
    pub fn is_favorite(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.ids)?;
        self.store.save(FAVORITES_KEY, &json)
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites").field("ids", &self.ids).finish()
    }
}

/// Anything but an array of non-negative integers below 2^32 is malformed,
/// including integer-valued floats such as `1.0`.
fn read_ids(store: &dyn Persistence) -> Result<Vec<u32>, StorageError> {
    match store.load(FAVORITES_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}
