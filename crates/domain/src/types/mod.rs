//! Domain types and models

pub mod sales;

// Re-export sales types for convenience
pub use sales::{
    AllocationStatus, ApprovalAction, OfferStatus, PendingAllocation, PendingOffer,
    PipelineCounts, SalesRecord, SalesType,
};
