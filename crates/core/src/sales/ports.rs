//! Port interfaces for the sales-allocation store
//!
//! These traits define the boundaries between the store and whatever
//! supplies time, identifiers, and change notifications.

use chrono::{DateTime, Utc};
use proptyos_domain::{AllocationStatus, ApprovalAction, OfferStatus, PipelineCounts, SalesType};
use serde::Serialize;
use uuid::Uuid;

/// Source of the current time for `submitted_at` stamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Generator for offer and allocation ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Time-ordered UUIDv7 ids. Two ids minted within the same millisecond
/// still differ.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7IdGenerator;

impl IdGenerator for UuidV7IdGenerator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Counter addressed by the manual increment/decrement helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineCounter {
    PendingOffers,
    PendingAllocations,
    PendingApprovals,
}

/// Change notification delivered to subscribed observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SalesEvent {
    SaleRecorded {
        offer_id: String,
        allocation_id: Option<String>,
        client_name: String,
        project_name: String,
        sales_type: SalesType,
    },
    OfferStatusChanged {
        offer_id: String,
        from: OfferStatus,
        to: OfferStatus,
    },
    AllocationStatusChanged {
        allocation_id: String,
        from: AllocationStatus,
        to: AllocationStatus,
    },
    MovedToApproval {
        allocation_id: String,
        pending_approvals: u32,
    },
    ApprovalProcessed {
        allocation_id: String,
        action: ApprovalAction,
        pending_approvals: u32,
    },
    CounterAdjusted {
        counter: PipelineCounter,
        value: u32,
    },
    CountsSynced {
        counts: PipelineCounts,
    },
}

/// Subscriber notified after every committed store mutation.
///
/// Events arrive one at a time, in the order their mutations committed.
/// Callbacks run after the store lock is released, so an observer may read
/// or mutate the store from inside `on_event`; events caused by such a
/// mutation are delivered after the current one.
pub trait SalesObserver: Send + Sync {
    fn on_event(&self, event: &SalesEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_v7_ids_are_unique_and_ordered() {
        let ids = UuidV7IdGenerator;
        let first = ids.next_id();
        let second = ids.next_id();

        assert_ne!(first, second);
        assert_eq!(Uuid::parse_str(&first).unwrap().get_version_num(), 7);
        assert!(first < second);
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = SalesEvent::MovedToApproval {
            allocation_id: "allocation-1".to_string(),
            pending_approvals: 4,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "moved_to_approval");
        assert_eq!(json["allocation_id"], "allocation-1");
        assert_eq!(json["pending_approvals"], 4);
    }
}
