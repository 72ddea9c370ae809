//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Backend coordinates (consumed by the UI shell, never called from the store)
pub const DEFAULT_API_BASE_URL: &str = "https://api.proptyos.com";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

// Browser storage keys holding the bearer tokens
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Unit label used when a sale is recorded before a unit number is known.
pub const UNASSIGNED_UNIT: &str = "Unassigned";

/// Approvals already waiting in the seeded mock pipeline.
pub const SEED_PENDING_APPROVALS: u32 = 3;
