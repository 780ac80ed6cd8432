//! aura-cli library root.
//!
//! Re-exports internal modules so integration tests can exercise the
//! command layer and config handling without spawning the binary.

pub mod commands;
pub mod config;
pub mod state;
