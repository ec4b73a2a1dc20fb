//! In-memory progress store

use super::codec::{deserialize_state, serialize_state};
use super::store::{ProgressStore, StoreError};
use crate::core::GameState;
use rustc_hash::FxHashMap;

/// A store keeping serialized records in a map
///
/// Records are held in their serialized form so the memory store exercises
/// the same codec as the file-backed one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw record, bypassing the codec
    ///
    /// Lets tests stage corrupt records the way a damaged backing file
    /// would present them.
    #[cfg(test)]
    pub(crate) fn insert_raw(&mut self, id: &str, record: &str) {
        self.records.insert(id.to_string(), record.to_string());
    }
}

impl ProgressStore for MemoryStore {
    fn save(&mut self, id: &str, state: &GameState) -> Result<(), StoreError> {
        let record = serialize_state(state)?;
        self.records.insert(id.to_string(), record);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<GameState>, StoreError> {
        Ok(self
            .records
            .get(id)
            .and_then(|record| deserialize_state(record).ok()))
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.records.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut ids: Vec<String> = self.records.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
