// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Analysis**: Simulated analysis delay
//! - **Intake**: Accepted file size

// ==========================================================================
// Analysis Defaults
// ==========================================================================

/// Default delay before an analysis completes (in milliseconds).
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;

/// Minimum analysis delay (in milliseconds).
pub const MIN_ANALYSIS_DELAY_MS: u64 = 0;

/// Maximum analysis delay (in milliseconds).
pub const MAX_ANALYSIS_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Intake Defaults
// ==========================================================================

/// Default maximum accepted image size (in megabytes).
pub const DEFAULT_MAX_FILE_SIZE_MB: u32 = 20;

/// Minimum configurable image size limit (in megabytes).
pub const MIN_MAX_FILE_SIZE_MB: u32 = 1;

/// Maximum configurable image size limit (in megabytes).
pub const MAX_MAX_FILE_SIZE_MB: u32 = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ANALYSIS_DELAY_MS >= MIN_ANALYSIS_DELAY_MS);
    assert!(DEFAULT_ANALYSIS_DELAY_MS <= MAX_ANALYSIS_DELAY_MS);
    assert!(DEFAULT_MAX_FILE_SIZE_MB >= MIN_MAX_FILE_SIZE_MB);
    assert!(DEFAULT_MAX_FILE_SIZE_MB <= MAX_MAX_FILE_SIZE_MB);
};
