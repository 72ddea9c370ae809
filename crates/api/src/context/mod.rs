//! Application context - dependency injection container

use std::sync::Arc;

use proptyos_core::{SalesAllocationStore, SalesAllocationView};
use proptyos_domain::{Config, Result};
use proptyos_infra::{config, TracingSalesObserver};

/// Application context - holds the configuration and the session's store
pub struct AppContext {
    pub config: Config,
    /// Mutation-capable handle; forms and action buttons go through this
    pub sales: SalesAllocationStore,
    pub audit: Arc<TracingSalesObserver>,
}

impl AppContext {
    /// Load configuration via the standard loader and build the context.
    ///
    /// Logging is not initialised here; call
    /// [`proptyos_infra::logging::init`] first when running as a program.
    ///
    /// # Errors
    /// Returns `ProptyError::Config` when configuration cannot be loaded.
    pub fn new() -> Result<Self> {
        let config = config::load()?;
        Ok(Self::with_config(config))
    }

    /// Build the context from an explicit configuration
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let audit = Arc::new(TracingSalesObserver::new());
        let sales = SalesAllocationStore::builder()
            .seeded(config.store.seed_mock_data)
            .observer(audit.clone())
            .build();

        tracing::info!(
            seeded = config.store.seed_mock_data,
            api = %config.api.versioned_url(""),
            "ProptyOS context initialised"
        );

        Self { config, sales, audit }
    }

    /// Read-only handle for dashboards and tables
    #[must_use]
    pub fn sales_view(&self) -> SalesAllocationView {
        self.sales.view()
    }
}
