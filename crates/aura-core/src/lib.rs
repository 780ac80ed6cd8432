//! aura-core
//!
//! Pure domain types, cycle prediction, and storage key conventions.
//! No I/O — this is the shared vocabulary of the Aura system.

pub mod cycle;
pub mod error;
pub mod models;
pub mod storage_keys;
