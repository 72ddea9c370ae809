//! Shared test helpers for `proptyos-core` integration tests.
//!
//! Deterministic clocks, id generators and a recording observer so store
//! tests can assert on exact ids, timestamps and event order.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::Mutex;
use proptyos_core::sales::{Clock, IdGenerator, SalesEvent, SalesObserver};
use proptyos_core::SalesAllocationStore;
use proptyos_domain::{SalesRecord, SalesType};

/// Clock frozen at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(rfc3339: &str) -> Self {
        Self(DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Produces `gen-1`, `gen-2`, ...
#[derive(Default)]
pub struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("gen-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Observer that keeps every event it sees.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SalesEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<SalesEvent> {
        self.events.lock().clone()
    }
}

impl SalesObserver for RecordingObserver {
    fn on_event(&self, event: &SalesEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Record matching the dashboard's "Record Sale" form.
pub fn sale(client: &str, project: &str, sales_type: SalesType) -> SalesRecord {
    SalesRecord::new(
        client,
        project,
        sales_type,
        "₦10,000,000",
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        "Kemi Adebayo",
    )
}

/// Seeded store with deterministic ids and clock.
pub fn seeded_store() -> SalesAllocationStore {
    SalesAllocationStore::builder()
        .clock(Arc::new(FixedClock::at("2024-02-01T09:00:00Z")))
        .id_generator(Arc::new(SequentialIds::default()))
        .seeded(true)
        .build()
}

/// Empty store with deterministic ids and clock.
pub fn empty_store() -> SalesAllocationStore {
    SalesAllocationStore::builder()
        .clock(Arc::new(FixedClock::at("2024-02-01T09:00:00Z")))
        .id_generator(Arc::new(SequentialIds::default()))
        .build()
}
