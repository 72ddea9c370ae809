//! # ProptyOS Infrastructure
//!
//! Infrastructure implementations around the core store.
//!
//! This crate contains:
//! - Configuration loading (environment, TOML, JSON)
//! - Logging bootstrap
//! - Tracing-backed audit observer for the sales pipeline
//!
//! ## Architecture
//! - Implements traits defined in `proptyos-core`
//! - Depends on `proptyos-domain` and `proptyos-core`
//! - Contains all "impure" code (environment, files, global subscriber)

pub mod config;
pub mod observability;

// Re-export commonly used items
pub use observability::logging;
pub use observability::TracingSalesObserver;
