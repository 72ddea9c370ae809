//! # ProptyOS App
//!
//! Application layer - commands and context wiring.
//!
//! This crate contains:
//! - Commands backing the sales dashboard (frontend → backend bridge)
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Commands return `Result<T, String>` so the UI layer can display errors

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
