//! Game state persistence
//!
//! A small keyed store boundary around the engine: JSON codec helpers, the
//! [`ProgressStore`] trait, and two reference implementations (in-memory
//! and file-backed). The engine itself never touches storage.

mod codec;
mod file;
mod memory;
mod store;

pub use codec::{deserialize_state, generate_game_id, is_valid_state_json, serialize_state};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{ProgressStore, StoreError};
