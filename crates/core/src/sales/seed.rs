//! Mock pipeline loaded at session start
//!
//! Two open offers, two allocations awaiting review and three approvals
//! already queued with reviewers.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptyos_domain::constants::SEED_PENDING_APPROVALS;
use proptyos_domain::{
    AllocationStatus, OfferStatus, PendingAllocation, PendingOffer, SalesType,
};

/// Initial collections and approvals counter for a seeded store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedState {
    pub pending_offers: Vec<PendingOffer>,
    pub pending_allocations: Vec<PendingAllocation>,
    pub pending_approvals: u32,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single().unwrap_or_default()
}

/// The mock state every new dashboard session starts with.
#[must_use]
pub fn mock_state() -> SeedState {
    let pending_offers = vec![
        PendingOffer {
            id: "offer-1".to_string(),
            client_name: "Chinedu Okafor".to_string(),
            project_name: "Palm Springs Estate".to_string(),
            sales_type: SalesType::OfferOnly,
            sale_amount: "₦15,000,000".to_string(),
            initial_payment: Some("₦3,000,000".to_string()),
            sale_date: date(2024, 1, 15),
            status: OfferStatus::PendingOffer,
            marketer: "Amaka Eze".to_string(),
            unit_number: None,
            notes: None,
        },
        PendingOffer {
            id: "offer-2".to_string(),
            client_name: "Fatima Bello".to_string(),
            project_name: "Harbour View Towers".to_string(),
            sales_type: SalesType::OfferAllocation,
            sale_amount: "₦22,500,000".to_string(),
            initial_payment: None,
            sale_date: date(2024, 1, 18),
            status: OfferStatus::PendingOffer,
            marketer: "Segun Adeyemi".to_string(),
            unit_number: Some("HV-07".to_string()),
            notes: Some("Client requested sea-facing unit".to_string()),
        },
    ];

    let pending_allocations = vec![
        PendingAllocation {
            id: "allocation-1".to_string(),
            client_name: "Ibrahim Musa".to_string(),
            project_name: "Palm Springs Estate".to_string(),
            unit: "PS-12".to_string(),
            sales_type: SalesType::SalesOffer,
            submitted_by: "Amaka Eze".to_string(),
            submitted_at: at(2024, 1, 20, 10, 0),
            status: AllocationStatus::Pending,
            amount: "₦18,000,000".to_string(),
            notes: None,
        },
        PendingAllocation {
            id: "allocation-2".to_string(),
            client_name: "Grace Nwosu".to_string(),
            project_name: "Harbour View Towers".to_string(),
            unit: "HV-03".to_string(),
            sales_type: SalesType::SalesOffer,
            submitted_by: "Segun Adeyemi".to_string(),
            submitted_at: at(2024, 1, 22, 14, 30),
            status: AllocationStatus::Pending,
            amount: "₦30,000,000".to_string(),
            notes: Some("Awaiting proof of initial deposit".to_string()),
        },
    ];

    SeedState { pending_offers, pending_allocations, pending_approvals: SEED_PENDING_APPROVALS }
}
