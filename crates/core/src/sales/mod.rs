//! Sales-to-allocation workflow
//!
//! Recording a sale derives an offer (and, for `offer_allocation` sales, an
//! allocation request). Allocations then move `pending` ->
//! `pending_approval` -> `approved` | `declined`.

pub mod errors;
pub mod ports;
pub mod seed;
pub mod store;
pub mod view;

pub use errors::{PipelineEntity, SalesError, SalesResult};
pub use ports::{
    Clock, IdGenerator, PipelineCounter, SalesEvent, SalesObserver, SystemClock,
    UuidV7IdGenerator,
};
pub use seed::{mock_state, SeedState};
pub use store::{RecordedSale, SalesAllocationStore, SalesAllocationStoreBuilder};
pub use view::{SalesAllocationView, SalesSnapshot};
