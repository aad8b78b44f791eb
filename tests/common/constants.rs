//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (curated fixtures, timeouts), update only this file.

// ============================================================================
// Timeouts
// ============================================================================

/// Timeout for individual HTTP requests in tests
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum time to wait for the test server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

// ============================================================================
// Curated Fixture Data
// ============================================================================

/// Title of the renaissance artwork in the test curated gallery
pub const CURATED_RENAISSANCE_TITLE: &str = "Curated Venus";

/// Title of the baroque artwork in the test curated gallery
pub const CURATED_BAROQUE_TITLE: &str = "Curated Night Watch";

/// Artist of the baroque artwork in the test curated gallery
pub const CURATED_BAROQUE_ARTIST: &str = "Rembrandt van Rijn";
