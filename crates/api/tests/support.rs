//! Shared helpers for command integration tests.

#![allow(dead_code)]

use proptyos_domain::{Config, StoreConfig};
use proptyos_lib::commands::RecordSaleRequest;
use proptyos_lib::context::AppContext;

/// Context with the demo data loaded, as the dashboard starts.
pub fn seeded_context() -> AppContext {
    AppContext::with_config(Config::default())
}

/// Context with no mock data.
pub fn empty_context() -> AppContext {
    AppContext::with_config(Config {
        store: StoreConfig { seed_mock_data: false },
        ..Config::default()
    })
}

/// Form payload as submitted from the "Record Sale" dialog.
pub fn sale_request(client: &str, sales_type: &str) -> RecordSaleRequest {
    RecordSaleRequest {
        client_name: client.to_string(),
        project_name: "Test Tower".to_string(),
        sales_type: sales_type.to_string(),
        sale_amount: "₦10,000,000".to_string(),
        initial_payment: None,
        sale_date: "2024-02-01".to_string(),
        marketer_name: "Kemi Adebayo".to_string(),
        unit_number: None,
        notes: Some("Walk-in client".to_string()),
    }
}
