//! Sales-allocation store - core business logic
//!
//! Single source of truth for the offer -> allocation -> approval pipeline
//! of one session. State lives in memory only.
//!
//! `pending_offers` and `pending_allocations` counters are derived from the
//! collections and recomputed inside the same write lock as every mutation.
//! `pending_approvals` is tracked independently through
//! [`SalesAllocationStore::move_to_approval`] and
//! [`SalesAllocationStore::process_approval`]; use
//! [`SalesAllocationStore::approvals_drift`] to compare it with the
//! allocations actually awaiting approval.
//!
//! Events are queued inside the write lock and delivered after it is
//! released, one at a time and in commit order. When another thread is
//! already delivering, a call may return before its own event has been
//! delivered; that thread drains it.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use proptyos_domain::{
    AllocationStatus, ApprovalAction, OfferStatus, PendingAllocation, PendingOffer,
    PipelineCounts, SalesRecord,
};
use tracing::{debug, info, warn};

use super::errors::{PipelineEntity, SalesError, SalesResult};
use super::ports::{
    Clock, IdGenerator, PipelineCounter, SalesEvent, SalesObserver, SystemClock,
    UuidV7IdGenerator,
};
use super::seed::{self, SeedState};
use super::view::{SalesAllocationView, SalesSnapshot};

/// Ids created by [`SalesAllocationStore::add_sales_record`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSale {
    pub offer_id: String,
    pub allocation_id: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct PipelineState {
    pub(crate) sales_records: Vec<SalesRecord>,
    pub(crate) pending_offers: Vec<PendingOffer>,
    pub(crate) pending_allocations: Vec<PendingAllocation>,
    pub(crate) counts: PipelineCounts,
}

impl PipelineState {
    fn from_seed(seed: SeedState) -> Self {
        let mut state = Self {
            sales_records: Vec::new(),
            pending_offers: seed.pending_offers,
            pending_allocations: seed.pending_allocations,
            counts: PipelineCounts { pending_approvals: seed.pending_approvals, ..Default::default() },
        };
        state.sync_counts();
        state
    }

    /// Recompute the two derived counters. `pending_approvals` is left alone.
    fn sync_counts(&mut self) {
        self.counts.pending_offers = count_u32(
            self.pending_offers.iter().filter(|o| o.status == OfferStatus::PendingOffer),
        );
        self.counts.pending_allocations = count_u32(
            self.pending_allocations.iter().filter(|a| a.status == AllocationStatus::Pending),
        );
    }

    pub(crate) fn derived_pending_approvals(&self) -> u32 {
        count_u32(
            self.pending_allocations
                .iter()
                .filter(|a| a.status == AllocationStatus::PendingApproval),
        )
    }

    fn allocation_mut(&mut self, allocation_id: &str) -> SalesResult<&mut PendingAllocation> {
        self.pending_allocations.iter_mut().find(|a| a.id == allocation_id).ok_or_else(|| {
            SalesError::NotFound { entity: PipelineEntity::Allocation, id: allocation_id.to_string() }
        })
    }

    fn offer_mut(&mut self, offer_id: &str) -> SalesResult<&mut PendingOffer> {
        self.pending_offers.iter_mut().find(|o| o.id == offer_id).ok_or_else(|| {
            SalesError::NotFound { entity: PipelineEntity::Offer, id: offer_id.to_string() }
        })
    }

    fn counter_mut(&mut self, counter: PipelineCounter) -> &mut u32 {
        match counter {
            PipelineCounter::PendingOffers => &mut self.counts.pending_offers,
            PipelineCounter::PendingAllocations => &mut self.counts.pending_allocations,
            PipelineCounter::PendingApprovals => &mut self.counts.pending_approvals,
        }
    }
}

fn count_u32<I: Iterator>(items: I) -> u32 {
    u32::try_from(items.count()).unwrap_or(u32::MAX)
}

fn invalid_transition(
    entity: PipelineEntity,
    id: &str,
    from: impl ToString,
    to: impl ToString,
) -> SalesError {
    SalesError::InvalidTransition {
        entity,
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    }
}

pub(crate) struct StoreInner {
    pub(crate) state: RwLock<PipelineState>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    observers: RwLock<Vec<Arc<dyn SalesObserver>>>,
    /// Committed, undelivered events. Only pushed to under the state write lock.
    outbox: Mutex<VecDeque<SalesEvent>>,
    /// Held by the thread currently draining `outbox`.
    delivering: Mutex<()>,
}

impl StoreInner {
    /// Queue an event. Call with the state write guard held.
    fn enqueue(&self, event: SalesEvent) {
        self.outbox.lock().push_back(event);
    }

    /// Deliver queued events in order. Call after the state guard is dropped.
    ///
    /// If another thread (or an outer frame on this thread) is already
    /// delivering, this returns at once and that drainer picks the events up.
    fn deliver_pending(&self) {
        loop {
            let Some(turn) = self.delivering.try_lock() else {
                return;
            };
            loop {
                let next = self.outbox.lock().pop_front();
                let Some(event) = next else {
                    break;
                };
                let observers = self.observers.read().clone();
                for observer in &observers {
                    observer.on_event(&event);
                }
            }
            drop(turn);
            // an event queued between the last pop and the unlock
            if self.outbox.lock().is_empty() {
                return;
            }
        }
    }
}

/// Builder for [`SalesAllocationStore`]
pub struct SalesAllocationStoreBuilder {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    observers: Vec<Arc<dyn SalesObserver>>,
    seed: Option<SeedState>,
}

impl Default for SalesAllocationStoreBuilder {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidV7IdGenerator),
            observers: Vec::new(),
            seed: None,
        }
    }
}

impl SalesAllocationStoreBuilder {
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Register an observer before the store is shared
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn SalesObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Start from the mock pipeline when `enabled` is true
    #[must_use]
    pub fn seeded(mut self, enabled: bool) -> Self {
        self.seed = enabled.then(seed::mock_state);
        self
    }

    /// Start from an explicit seed
    #[must_use]
    pub fn seed(mut self, seed: SeedState) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn build(self) -> SalesAllocationStore {
        let state = self.seed.map(PipelineState::from_seed).unwrap_or_default();
        debug!(
            offers = state.pending_offers.len(),
            allocations = state.pending_allocations.len(),
            pending_approvals = state.counts.pending_approvals,
            "Sales-allocation store initialised"
        );

        SalesAllocationStore {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                clock: self.clock,
                ids: self.ids,
                observers: RwLock::new(self.observers),
                outbox: Mutex::new(VecDeque::new()),
                delivering: Mutex::new(()),
            }),
        }
    }
}

/// Mutation-capable handle to the sales pipeline.
///
/// Cloning is cheap and every clone addresses the same state. Hand
/// [`SalesAllocationView`] to code that should only read.
#[derive(Clone)]
pub struct SalesAllocationStore {
    inner: Arc<StoreInner>,
}

impl Default for SalesAllocationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesAllocationStore {
    /// Empty store with the system clock and UUIDv7 ids
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Store preloaded with [`seed::mock_state`]
    #[must_use]
    pub fn seeded() -> Self {
        Self::builder().seeded(true).build()
    }

    #[must_use]
    pub fn builder() -> SalesAllocationStoreBuilder {
        SalesAllocationStoreBuilder::default()
    }

    /// Read-only handle over the same state
    #[must_use]
    pub fn view(&self) -> SalesAllocationView {
        SalesAllocationView::new(Arc::clone(&self.inner))
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self, observer: Arc<dyn SalesObserver>) {
        self.inner.observers.write().push(observer);
    }

    // ------------------------------------------------------------------
    // Recording
    // ------------------------------------------------------------------

    /// Append a sales record and derive its pipeline entries.
    ///
    /// Always creates a `pending_offer`; an `offer_allocation` sale also
    /// creates a `pending` allocation of type `sales_offer`. Cannot fail.
    pub fn add_sales_record(&self, record: SalesRecord) -> RecordedSale {
        let offer_id = self.inner.ids.next_id();
        let offer = PendingOffer::from_record(offer_id.clone(), &record);
        let allocation = record.creates_allocation().then(|| {
            PendingAllocation::from_record(self.inner.ids.next_id(), &record, self.inner.clock.now())
        });
        let allocation_id = allocation.as_ref().map(|a| a.id.clone());

        let event = SalesEvent::SaleRecorded {
            offer_id: offer_id.clone(),
            allocation_id: allocation_id.clone(),
            client_name: record.client_name.clone(),
            project_name: record.project_name.clone(),
            sales_type: record.sales_type,
        };

        {
            let mut state = self.inner.state.write();
            state.sales_records.push(record);
            state.pending_offers.push(offer);
            if let Some(allocation) = allocation {
                state.pending_allocations.push(allocation);
            }
            state.sync_counts();
            self.inner.enqueue(event);
        }

        info!(
            offer_id = %offer_id,
            allocation_id = ?allocation_id,
            "Sales record added"
        );
        self.inner.deliver_pending();

        RecordedSale { offer_id, allocation_id }
    }

    // ------------------------------------------------------------------
    // Status transitions
    // ------------------------------------------------------------------

    /// Set an offer's status.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `InvalidTransition` when the offer has
    /// already left `pending_offer`.
    pub fn update_offer_status(&self, offer_id: &str, status: OfferStatus) -> SalesResult<()> {
        let from = {
            let mut state = self.inner.state.write();
            let offer = state
                .offer_mut(offer_id)
                .inspect_err(|err| warn!(error = %err, "Offer update rejected"))?;
            let from = offer.status;
            if !from.can_transition_to(status) {
                let err = invalid_transition(PipelineEntity::Offer, offer_id, from, status);
                warn!(error = %err, "Offer update rejected");
                return Err(err);
            }
            offer.status = status;
            state.sync_counts();
            if from != status {
                self.inner.enqueue(SalesEvent::OfferStatusChanged {
                    offer_id: offer_id.to_string(),
                    from,
                    to: status,
                });
            }
            from
        };

        if from != status {
            info!(offer_id, from = %from, to = %status, "Offer status updated");
        }
        self.inner.deliver_pending();
        Ok(())
    }

    /// Set an allocation's status, moving forward through the lifecycle.
    ///
    /// This does not touch `pending_approvals`; use
    /// [`Self::move_to_approval`] and [`Self::process_approval`] for the
    /// reviewed path.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `InvalidTransition` for a backwards
    /// move or a change to a decided allocation.
    pub fn update_allocation_status(
        &self,
        allocation_id: &str,
        status: AllocationStatus,
    ) -> SalesResult<()> {
        let from = self.transition_allocation(
            allocation_id,
            |from| from.can_transition_to(status).then_some(status),
            status,
            |from, _| {
                (from != status).then(|| SalesEvent::AllocationStatusChanged {
                    allocation_id: allocation_id.to_string(),
                    from,
                    to: status,
                })
            },
        )?;

        if from != status {
            info!(allocation_id, from = %from, to = %status, "Allocation status updated");
        }
        Ok(())
    }

    /// Escalate a `pending` allocation to `pending_approval` and bump the
    /// approvals counter.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `InvalidTransition` unless the
    /// allocation is `pending`.
    pub fn move_to_approval(&self, allocation_id: &str) -> SalesResult<()> {
        let target = AllocationStatus::PendingApproval;
        let mut pending_approvals = 0;
        self.transition_allocation(
            allocation_id,
            |from| (from == AllocationStatus::Pending).then_some(target),
            target,
            |_, counts| {
                counts.pending_approvals = counts.pending_approvals.saturating_add(1);
                pending_approvals = counts.pending_approvals;
                Some(SalesEvent::MovedToApproval {
                    allocation_id: allocation_id.to_string(),
                    pending_approvals,
                })
            },
        )?;

        info!(allocation_id, pending_approvals, "Allocation moved to approval");
        Ok(())
    }

    /// Record the reviewer's decision on an allocation awaiting approval.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `InvalidTransition` unless the
    /// allocation is `pending_approval`.
    pub fn process_approval(&self, allocation_id: &str, action: ApprovalAction) -> SalesResult<()> {
        let target = action.resulting_status();
        let mut pending_approvals = 0;
        self.transition_allocation(
            allocation_id,
            |from| (from == AllocationStatus::PendingApproval).then_some(target),
            target,
            |_, counts| {
                counts.pending_approvals = counts.pending_approvals.saturating_sub(1);
                pending_approvals = counts.pending_approvals;
                Some(SalesEvent::ApprovalProcessed {
                    allocation_id: allocation_id.to_string(),
                    action,
                    pending_approvals,
                })
            },
        )?;

        info!(allocation_id, action = %action, pending_approvals, "Approval processed");
        Ok(())
    }

    /// Apply one allocation transition, its counter side effect and its
    /// event under a single write lock, then deliver. Returns the previous
    /// status.
    fn transition_allocation(
        &self,
        allocation_id: &str,
        next: impl FnOnce(AllocationStatus) -> Option<AllocationStatus>,
        requested: AllocationStatus,
        on_commit: impl FnOnce(AllocationStatus, &mut PipelineCounts) -> Option<SalesEvent>,
    ) -> SalesResult<AllocationStatus> {
        let mut state = self.inner.state.write();
        let allocation = state
            .allocation_mut(allocation_id)
            .inspect_err(|err| warn!(error = %err, "Allocation update rejected"))?;
        let from = allocation.status;
        let Some(to) = next(from) else {
            let err = invalid_transition(PipelineEntity::Allocation, allocation_id, from, requested);
            warn!(error = %err, "Allocation update rejected");
            return Err(err);
        };
        allocation.status = to;
        let event = on_commit(from, &mut state.counts);
        state.sync_counts();
        if let Some(event) = event {
            self.inner.enqueue(event);
        }
        drop(state);

        self.inner.deliver_pending();
        Ok(from)
    }

    // ------------------------------------------------------------------
    // Counters
    // ------------------------------------------------------------------

    pub fn increment_pending_offers(&self) {
        self.adjust_counter(PipelineCounter::PendingOffers, |v| v.saturating_add(1));
    }

    pub fn decrement_pending_offers(&self) {
        self.adjust_counter(PipelineCounter::PendingOffers, |v| v.saturating_sub(1));
    }

    pub fn increment_pending_allocations(&self) {
        self.adjust_counter(PipelineCounter::PendingAllocations, |v| v.saturating_add(1));
    }

    pub fn decrement_pending_allocations(&self) {
        self.adjust_counter(PipelineCounter::PendingAllocations, |v| v.saturating_sub(1));
    }

    pub fn increment_pending_approvals(&self) {
        self.adjust_counter(PipelineCounter::PendingApprovals, |v| v.saturating_add(1));
    }

    /// Never goes below zero.
    pub fn decrement_pending_approvals(&self) {
        self.adjust_counter(PipelineCounter::PendingApprovals, |v| v.saturating_sub(1));
    }

    /// Manual adjustment. The two derived counters are overwritten again on
    /// the next collection change or [`Self::sync_counts`].
    fn adjust_counter(&self, counter: PipelineCounter, apply: impl FnOnce(u32) -> u32) {
        let value = {
            let mut state = self.inner.state.write();
            let slot = state.counter_mut(counter);
            *slot = apply(*slot);
            let value = *slot;
            self.inner.enqueue(SalesEvent::CounterAdjusted { counter, value });
            value
        };
        debug!(counter = ?counter, value, "Pipeline counter adjusted");
        self.inner.deliver_pending();
    }

    /// Recompute `pending_offers` and `pending_allocations` from the
    /// collections. Idempotent; `pending_approvals` is not touched.
    pub fn sync_counts(&self) -> PipelineCounts {
        let (counts, derived_approvals) = {
            let mut state = self.inner.state.write();
            state.sync_counts();
            self.inner.enqueue(SalesEvent::CountsSynced { counts: state.counts });
            (state.counts, state.derived_pending_approvals())
        };

        debug!(
            pending_offers = counts.pending_offers,
            pending_allocations = counts.pending_allocations,
            pending_approvals = counts.pending_approvals,
            "Pipeline counts synced"
        );
        if counts.pending_approvals != derived_approvals {
            warn!(
                tracked = counts.pending_approvals,
                derived = derived_approvals,
                "Approvals counter differs from allocations awaiting approval"
            );
        }
        self.inner.deliver_pending();
        counts
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    #[must_use]
    pub fn counts(&self) -> PipelineCounts {
        self.view().counts()
    }

    #[must_use]
    pub fn sales_records(&self) -> Vec<SalesRecord> {
        self.view().sales_records()
    }

    #[must_use]
    pub fn pending_offers(&self) -> Vec<PendingOffer> {
        self.view().pending_offers()
    }

    #[must_use]
    pub fn pending_allocations(&self) -> Vec<PendingAllocation> {
        self.view().pending_allocations()
    }

    #[must_use]
    pub fn derived_pending_approvals(&self) -> u32 {
        self.view().derived_pending_approvals()
    }

    /// Tracked minus derived approvals; zero when the counter agrees with
    /// the allocations awaiting approval.
    #[must_use]
    pub fn approvals_drift(&self) -> i64 {
        self.view().approvals_drift()
    }

    #[must_use]
    pub fn snapshot(&self) -> SalesSnapshot {
        self.view().snapshot()
    }
}
