pub mod config;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use config::{Config, resolve_data_dir};
pub use snapshot::{STORAGE_KEY, SnapshotStore};
pub use storage::{FileStore, MemoryStore, StringStore};
pub use store::{ItemPatch, TodoStore};
