//! Read-only access to the sales pipeline

use std::sync::Arc;

use proptyos_domain::{
    AllocationStatus, PendingAllocation, PendingOffer, PipelineCounts, SalesRecord,
};
use serde::Serialize;

use super::store::StoreInner;

/// Owned copy of the whole pipeline at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSnapshot {
    pub counts: PipelineCounts,
    pub sales_records: Vec<SalesRecord>,
    pub pending_offers: Vec<PendingOffer>,
    pub pending_allocations: Vec<PendingAllocation>,
}

/// Read-only handle for passive consumers (dashboards, tables).
///
/// Every getter returns owned data; callers never hold references into the
/// store.
#[derive(Clone)]
pub struct SalesAllocationView {
    inner: Arc<StoreInner>,
}

impl SalesAllocationView {
    pub(crate) const fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn counts(&self) -> PipelineCounts {
        self.inner.state.read().counts
    }

    #[must_use]
    pub fn sales_records(&self) -> Vec<SalesRecord> {
        self.inner.state.read().sales_records.clone()
    }

    #[must_use]
    pub fn pending_offers(&self) -> Vec<PendingOffer> {
        self.inner.state.read().pending_offers.clone()
    }

    #[must_use]
    pub fn pending_allocations(&self) -> Vec<PendingAllocation> {
        self.inner.state.read().pending_allocations.clone()
    }

    #[must_use]
    pub fn offer(&self, offer_id: &str) -> Option<PendingOffer> {
        self.inner.state.read().pending_offers.iter().find(|o| o.id == offer_id).cloned()
    }

    #[must_use]
    pub fn allocation(&self, allocation_id: &str) -> Option<PendingAllocation> {
        self.inner
            .state
            .read()
            .pending_allocations
            .iter()
            .find(|a| a.id == allocation_id)
            .cloned()
    }

    /// Allocations whose status is one of `statuses`, in insertion order
    #[must_use]
    pub fn allocations_with_status(&self, statuses: &[AllocationStatus]) -> Vec<PendingAllocation> {
        self.inner
            .state
            .read()
            .pending_allocations
            .iter()
            .filter(|a| statuses.contains(&a.status))
            .cloned()
            .collect()
    }

    /// Allocations currently in `pending_approval`
    #[must_use]
    pub fn derived_pending_approvals(&self) -> u32 {
        self.inner.state.read().derived_pending_approvals()
    }

    #[must_use]
    pub fn approvals_drift(&self) -> i64 {
        let state = self.inner.state.read();
        i64::from(state.counts.pending_approvals) - i64::from(state.derived_pending_approvals())
    }

    #[must_use]
    pub fn snapshot(&self) -> SalesSnapshot {
        let state = self.inner.state.read();
        SalesSnapshot {
            counts: state.counts,
            sales_records: state.sales_records.clone(),
            pending_offers: state.pending_offers.clone(),
            pending_allocations: state.pending_allocations.clone(),
        }
    }
}
