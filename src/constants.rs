//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// MEMBER ROLES
// =============================================================================

/// Person role identifiers
pub mod roles {
    pub const USER: &str = "user";
    pub const COACH: &str = "coach";
    pub const ADMIN: &str = "admin";

    /// All person roles
    pub const ALL: &[&str] = &[USER, COACH, ADMIN];

    /// Role assigned when none is supplied
    pub const DEFAULT: &str = USER;
}

// =============================================================================
// PAYMENT STATUSES
// =============================================================================

/// Payment status values
pub mod payment_status {
    pub const PAID: &str = "Paid";
    pub const PENDING: &str = "Pending";

    /// All accepted payment statuses
    pub const ALL: &[&str] = &[PAID, PENDING];
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
