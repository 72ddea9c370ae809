//! Store error types

use std::fmt;

use proptyos_domain::ProptyError;
use thiserror::Error;

/// Collection an id-addressed operation targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEntity {
    Offer,
    Allocation,
}

impl fmt::Display for PipelineEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offer => f.write_str("offer"),
            Self::Allocation => f.write_str("allocation"),
        }
    }
}

/// Rejected store mutation. The store is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalesError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: PipelineEntity, id: String },

    #[error("{entity} {id} cannot move from {from} to {to}")]
    InvalidTransition { entity: PipelineEntity, id: String, from: String, to: String },
}

impl From<SalesError> for ProptyError {
    fn from(err: SalesError) -> Self {
        match err {
            SalesError::NotFound { .. } => Self::NotFound(err.to_string()),
            SalesError::InvalidTransition { .. } => Self::InvalidTransition(err.to_string()),
        }
    }
}

/// Result type alias for store operations
pub type SalesResult<T> = std::result::Result<T, SalesError>;
