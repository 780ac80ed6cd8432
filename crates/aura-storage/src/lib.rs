//! aura-storage
//!
//! On-device persistence. A small key-value layer holding JSON values, and
//! the health data service built on top of it.

pub mod error;
pub mod health;
pub mod objects;
pub mod state;

pub use error::StorageError;
pub use health::HealthStore;
pub use objects::{FileStore, KeyValueStore, MemoryStore, default_data_dir};
