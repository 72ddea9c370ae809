//! Sales pipeline types
//!
//! A recorded sale ([`SalesRecord`]) always produces a [`PendingOffer`] and,
//! for `offer_allocation` sales, a [`PendingAllocation`] that then moves
//! through the approval workflow.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::UNASSIGNED_UNIT;

// ============================================================================
// Status enums
// ============================================================================

/// How a sale enters the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesType {
    /// Offer only, no unit reserved yet
    OfferOnly,
    /// Offer plus an immediate unit allocation request
    OfferAllocation,
    /// Type stamped on allocations derived from a recorded sale
    SalesOffer,
}

crate::impl_domain_status_conversions!(SalesType {
    OfferOnly => "offer_only",
    OfferAllocation => "offer_allocation",
    SalesOffer => "sales_offer",
});

/// Offer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    PendingOffer,
    Accepted,
    Rejected,
    Withdrawn,
}

crate::impl_domain_status_conversions!(OfferStatus {
    PendingOffer => "pending_offer",
    Accepted => "accepted",
    Rejected => "rejected",
    Withdrawn => "withdrawn",
});

impl OfferStatus {
    /// Only `pending_offer` can still change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::PendingOffer)
    }

    /// Whether moving from `self` to `next` is legal. Re-applying the
    /// current status is always allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || !self.is_terminal()
    }
}

/// Allocation lifecycle: `pending` -> `pending_approval` -> `approved` |
/// `declined`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    Pending,
    PendingApproval,
    Approved,
    Declined,
}

crate::impl_domain_status_conversions!(AllocationStatus {
    Pending => "pending",
    PendingApproval => "pending_approval",
    Approved => "approved",
    Declined => "declined",
});

impl AllocationStatus {
    const fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::PendingApproval => 1,
            Self::Approved | Self::Declined => 2,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Declined)
    }

    /// The lifecycle only moves forward; decided allocations stay decided.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || (!self.is_terminal() && next.rank() > self.rank())
    }
}

/// Reviewer decision on an allocation awaiting approval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalAction {
    Approve,
    Decline,
}

crate::impl_domain_status_conversions!(ApprovalAction {
    Approve => "approve",
    Decline => "decline",
});

impl ApprovalAction {
    #[must_use]
    pub const fn resulting_status(self) -> AllocationStatus {
        match self {
            Self::Approve => AllocationStatus::Approved,
            Self::Decline => AllocationStatus::Declined,
        }
    }
}

// ============================================================================
// Pipeline entities
// ============================================================================

/// Immutable event logging that a sale was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub client_name: String,
    pub project_name: String,
    pub sales_type: SalesType,
    /// Display-formatted amount, e.g. `₦10,000,000`
    pub sale_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_payment: Option<String>,
    pub sale_date: NaiveDate,
    pub marketer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SalesRecord {
    pub fn new(
        client_name: impl Into<String>,
        project_name: impl Into<String>,
        sales_type: SalesType,
        sale_amount: impl Into<String>,
        sale_date: NaiveDate,
        marketer_name: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            project_name: project_name.into(),
            sales_type,
            sale_amount: sale_amount.into(),
            initial_payment: None,
            sale_date,
            marketer_name: marketer_name.into(),
            unit_number: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_initial_payment(mut self, amount: impl Into<String>) -> Self {
        self.initial_payment = Some(amount.into());
        self
    }

    #[must_use]
    pub fn with_unit_number(mut self, unit: impl Into<String>) -> Self {
        self.unit_number = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Only `offer_allocation` sales request a unit allocation.
    #[must_use]
    pub fn creates_allocation(&self) -> bool {
        self.sales_type == SalesType::OfferAllocation
    }
}

/// Offer extended to a client, not yet allocated a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOffer {
    pub id: String,
    pub client_name: String,
    pub project_name: String,
    pub sales_type: SalesType,
    pub sale_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_payment: Option<String>,
    pub sale_date: NaiveDate,
    pub status: OfferStatus,
    pub marketer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PendingOffer {
    /// Derive the offer for a freshly recorded sale. The status is always
    /// `pending_offer`.
    #[must_use]
    pub fn from_record(id: String, record: &SalesRecord) -> Self {
        Self {
            id,
            client_name: record.client_name.clone(),
            project_name: record.project_name.clone(),
            sales_type: record.sales_type,
            sale_amount: record.sale_amount.clone(),
            initial_payment: record.initial_payment.clone(),
            sale_date: record.sale_date,
            status: OfferStatus::PendingOffer,
            marketer: record.marketer_name.clone(),
            unit_number: record.unit_number.clone(),
            notes: record.notes.clone(),
        }
    }
}

/// Unit allocation awaiting review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingAllocation {
    pub id: String,
    pub client_name: String,
    pub project_name: String,
    pub unit: String,
    pub sales_type: SalesType,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
    pub status: AllocationStatus,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PendingAllocation {
    /// Derive the allocation request for an `offer_allocation` sale.
    ///
    /// The sales type is fixed to `sales_offer` and the status to `pending`;
    /// a record without a unit number gets [`UNASSIGNED_UNIT`].
    #[must_use]
    pub fn from_record(id: String, record: &SalesRecord, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            client_name: record.client_name.clone(),
            project_name: record.project_name.clone(),
            unit: record.unit_number.clone().unwrap_or_else(|| UNASSIGNED_UNIT.to_string()),
            sales_type: SalesType::SalesOffer,
            submitted_by: record.marketer_name.clone(),
            submitted_at,
            status: AllocationStatus::Pending,
            amount: record.sale_amount.clone(),
            notes: record.notes.clone(),
        }
    }
}

/// Badge counters shown on the sales dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineCounts {
    pub pending_offers: u32,
    pub pending_allocations: u32,
    pub pending_approvals: u32,
}
