//! # ProptyOS Domain
//!
//! Business domain types and models for the ProptyOS sales pipeline.
//!
//! This crate contains:
//! - Sales pipeline data types (SalesRecord, PendingOffer, PendingAllocation)
//! - Status enums and their legal transitions
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other ProptyOS crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
