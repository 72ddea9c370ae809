//! Audit trail for sales pipeline changes
//!
//! Logs every [`SalesEvent`] as a structured tracing event and keeps a
//! relaxed atomic count of what it has seen.

use std::sync::atomic::{AtomicU64, Ordering};

use proptyos_core::{SalesEvent, SalesObserver};
use tracing::{debug, info};

/// Observer that writes pipeline changes to the log
#[derive(Debug, Default)]
pub struct TracingSalesObserver {
    events_logged: AtomicU64,
}

impl TracingSalesObserver {
    #[must_use]
    pub const fn new() -> Self {
        Self { events_logged: AtomicU64::new(0) }
    }

    /// Number of events logged so far
    #[must_use]
    pub fn events_logged(&self) -> u64 {
        self.events_logged.load(Ordering::Relaxed)
    }
}

impl SalesObserver for TracingSalesObserver {
    fn on_event(&self, event: &SalesEvent) {
        // Relaxed OK: independent counter
        self.events_logged.fetch_add(1, Ordering::Relaxed);

        match event {
            SalesEvent::SaleRecorded {
                offer_id,
                allocation_id,
                client_name,
                project_name,
                sales_type,
            } => info!(
                target: "proptyos::audit",
                offer_id = %offer_id,
                allocation_id = ?allocation_id,
                client = %client_name,
                project = %project_name,
                sales_type = %sales_type,
                "sale recorded"
            ),
            SalesEvent::OfferStatusChanged { offer_id, from, to } => info!(
                target: "proptyos::audit",
                offer_id = %offer_id,
                from = %from,
                to = %to,
                "offer status changed"
            ),
            SalesEvent::AllocationStatusChanged { allocation_id, from, to } => info!(
                target: "proptyos::audit",
                allocation_id = %allocation_id,
                from = %from,
                to = %to,
                "allocation status changed"
            ),
            SalesEvent::MovedToApproval { allocation_id, pending_approvals } => info!(
                target: "proptyos::audit",
                allocation_id = %allocation_id,
                pending_approvals,
                "allocation moved to approval"
            ),
            SalesEvent::ApprovalProcessed { allocation_id, action, pending_approvals } => info!(
                target: "proptyos::audit",
                allocation_id = %allocation_id,
                action = %action,
                pending_approvals,
                "approval processed"
            ),
            SalesEvent::CounterAdjusted { counter, value } => debug!(
                target: "proptyos::audit",
                counter = ?counter,
                value,
                "counter adjusted"
            ),
            SalesEvent::CountsSynced { counts } => debug!(
                target: "proptyos::audit",
                pending_offers = counts.pending_offers,
                pending_allocations = counts.pending_allocations,
                pending_approvals = counts.pending_approvals,
                "counts synced"
            ),
        }
    }
}
