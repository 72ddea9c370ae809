//! Sales pipeline commands
//!
//! Backing for the "Record Sale" form, the allocation tabs (active,
//! revoked) and the approval queue. Status and action strings coming from
//! the UI are parsed here; the store only sees typed values.

use chrono::NaiveDate;
use proptyos_core::SalesSnapshot;
use proptyos_domain::{
    AllocationStatus, ApprovalAction, OfferStatus, PendingAllocation, PipelineCounts,
    ProptyError, Result as DomainResult, SalesRecord, SalesType,
};
use serde::{Deserialize, Serialize};

use crate::utils::execute_command;
use crate::AppContext;

/// Statuses listed on the "Active Allocations" tab
const ACTIVE_ALLOCATION_STATUSES: [AllocationStatus; 3] =
    [AllocationStatus::Pending, AllocationStatus::PendingApproval, AllocationStatus::Approved];

/// Statuses listed on the "Revoked Allocations" tab
const REVOKED_ALLOCATION_STATUSES: [AllocationStatus; 1] = [AllocationStatus::Declined];

/// Payload submitted by the "Record Sale" form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleRequest {
    pub client_name: String,
    pub project_name: String,
    pub sales_type: String,
    pub sale_amount: String,
    #[serde(default)]
    pub initial_payment: Option<String>,
    /// `YYYY-MM-DD`
    pub sale_date: String,
    pub marketer_name: String,
    #[serde(default)]
    pub unit_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Ids created for a recorded sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleResponse {
    pub offer_id: String,
    pub allocation_id: Option<String>,
}

/// Blank form inputs arrive as empty strings.
fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse<T>(raw: &str) -> DomainResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>().map_err(ProptyError::InvalidInput)
}

impl TryFrom<RecordSaleRequest> for SalesRecord {
    type Error = ProptyError;

    fn try_from(request: RecordSaleRequest) -> DomainResult<Self> {
        let sales_type: SalesType = parse(&request.sales_type)?;
        let sale_date = NaiveDate::parse_from_str(request.sale_date.trim(), "%Y-%m-%d").map_err(|e| {
            ProptyError::InvalidInput(format!("Invalid sale date '{}': {e}", request.sale_date))
        })?;

        Ok(Self {
            client_name: request.client_name,
            project_name: request.project_name,
            sales_type,
            sale_amount: request.sale_amount,
            initial_payment: non_blank(request.initial_payment),
            sale_date,
            marketer_name: request.marketer_name,
            unit_number: non_blank(request.unit_number),
            notes: non_blank(request.notes),
        })
    }
}

/// Record a sale and derive its offer (and allocation request).
///
/// # Errors
/// Fails only when the sales type or date cannot be parsed.
pub fn record_sale(ctx: &AppContext, request: RecordSaleRequest) -> Result<RecordSaleResponse, String> {
    execute_command("sales::record_sale", || {
        let record = SalesRecord::try_from(request)?;
        let created = ctx.sales.add_sales_record(record);
        Ok(RecordSaleResponse { offer_id: created.offer_id, allocation_id: created.allocation_id })
    })
}

/// # Errors
/// Unknown status string, unknown offer id, or an offer already decided.
pub fn update_offer_status(ctx: &AppContext, offer_id: &str, status: &str) -> Result<(), String> {
    execute_command("sales::update_offer_status", || {
        let status: OfferStatus = parse(status)?;
        ctx.sales.update_offer_status(offer_id, status).map_err(Into::into)
    })
}

/// # Errors
/// Unknown status string, unknown allocation id, or a backwards move.
pub fn update_allocation_status(
    ctx: &AppContext,
    allocation_id: &str,
    status: &str,
) -> Result<(), String> {
    execute_command("sales::update_allocation_status", || {
        let status: AllocationStatus = parse(status)?;
        ctx.sales.update_allocation_status(allocation_id, status).map_err(Into::into)
    })
}

/// # Errors
/// Unknown allocation id or an allocation that is not `pending`.
pub fn move_to_approval(ctx: &AppContext, allocation_id: &str) -> Result<(), String> {
    execute_command("sales::move_to_approval", || {
        ctx.sales.move_to_approval(allocation_id).map_err(Into::into)
    })
}

/// `action` is `approve` or `decline`.
///
/// # Errors
/// Unknown action, unknown allocation id, or an allocation that is not
/// awaiting approval.
pub fn process_approval(ctx: &AppContext, allocation_id: &str, action: &str) -> Result<(), String> {
    execute_command("sales::process_approval", || {
        let action: ApprovalAction = parse(action)?;
        ctx.sales.process_approval(allocation_id, action).map_err(Into::into)
    })
}

/// # Errors
/// Never fails; the `Result` keeps the command signature uniform.
pub fn sync_counts(ctx: &AppContext) -> Result<PipelineCounts, String> {
    execute_command("sales::sync_counts", || Ok(ctx.sales.sync_counts()))
}

/// # Errors
/// Never fails; the `Result` keeps the command signature uniform.
pub fn get_pipeline_counts(ctx: &AppContext) -> Result<PipelineCounts, String> {
    execute_command("sales::get_pipeline_counts", || Ok(ctx.sales_view().counts()))
}

/// # Errors
/// Never fails; the `Result` keeps the command signature uniform.
pub fn get_pipeline_snapshot(ctx: &AppContext) -> Result<SalesSnapshot, String> {
    execute_command("sales::get_pipeline_snapshot", || Ok(ctx.sales_view().snapshot()))
}

/// # Errors
/// Never fails; the `Result` keeps the command signature uniform.
pub fn list_active_allocations(ctx: &AppContext) -> Result<Vec<PendingAllocation>, String> {
    execute_command("sales::list_active_allocations", || {
        Ok(ctx.sales_view().allocations_with_status(&ACTIVE_ALLOCATION_STATUSES))
    })
}

/// # Errors
/// Never fails; the `Result` keeps the command signature uniform.
pub fn list_revoked_allocations(ctx: &AppContext) -> Result<Vec<PendingAllocation>, String> {
    execute_command("sales::list_revoked_allocations", || {
        Ok(ctx.sales_view().allocations_with_status(&REVOKED_ALLOCATION_STATUSES))
    })
}
