//! Persistence collaborator interface and the bundled stores.
//!
//! The ledger never touches a storage medium itself. A [`SnapshotStore`]
//! hands it the initial list of entries and receives the full list again
//! after every mutation.

mod json_file;
mod memory;
mod sqlite;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::SnapshotStore;
