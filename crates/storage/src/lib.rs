#![forbid(unsafe_code)]

pub mod persistence;
pub mod repository;
pub mod sqlite;

pub use persistence::Persistence;
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError, StoreKey};
