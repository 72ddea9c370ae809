//! # ProptyOS Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The sales-allocation store and its read-only view
//! - Port interfaces (clock, id generation, change observers)
//! - Seed data for demo sessions
//!
//! ## Architecture Principles
//! - Only depends on `proptyos-domain`
//! - No HTTP, storage, or UI code
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod sales;

// Re-export specific items to avoid ambiguity
pub use sales::{
    Clock, IdGenerator, PipelineCounter, RecordedSale, SalesAllocationStore,
    SalesAllocationStoreBuilder, SalesAllocationView, SalesError, SalesEvent, SalesObserver,
    SalesSnapshot,
};
