#![forbid(unsafe_code)]

pub mod progress_codec;
pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, KeyValueStore, KvProgressRepository, ProgressRepository, Storage,
    StorageError,
};
