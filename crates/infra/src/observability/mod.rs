//! Observability infrastructure
//!
//! - [`logging`]: tracing subscriber setup driven by [`LoggingConfig`]
//! - [`sales_audit`]: observer that logs every sales pipeline change
//!
//! [`LoggingConfig`]: proptyos_domain::LoggingConfig

pub mod logging;
pub mod sales_audit;

pub use sales_audit::TracingSalesObserver;
