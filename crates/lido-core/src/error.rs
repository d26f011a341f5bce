//! # Error Types
//!
//! Domain-specific error types for lido-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  lido-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                       │
//! │  ├── ValidationError  - Rate-schedule validation failures           │
//! │  └── RowError         - Per-row date-range violations               │
//! │                                                                     │
//! │  RowError is special: it never aborts anything. The engine          │
//! │  returns the offending rows as `RowIssue` pairs and prices          │
//! │  NOTHING until the user fixes them (all-or-nothing).                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// General domain errors.
///
/// The pricing engine itself never fails — malformed input degrades to a
/// zero contribution. `CoreError` covers the surrounding concerns: parsing
/// a rate-schedule document, rejecting an invalid schedule.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A rate-schedule JSON document could not be parsed or written.
    #[error("invalid rate schedule document: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rate-schedule validation errors.
///
/// These occur when admin-entered settings don't meet requirements. The
/// settings editor runs this before letting any row become billable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid content (e.g. periods out of order, duplicate category name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Row Error
// =============================================================================

/// Which input field of the row an error points at.
///
/// Mirrors the inline-message placement in the calculator form: `From`
/// underlines the start-date field, `Both` underlines the whole range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ErrorField {
    From,
    Both,
}

/// Date-range violations on an Entrances / Private-booth row.
///
/// Extra rows are billed independently of stay categories but must fall
/// inside a declared stay. There is no fatal variant here — every row
/// error is a re-edit-and-retry condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum RowError {
    /// The row's start date lies outside the overall stay window.
    #[error("the start date must fall within the declared stay periods")]
    StartOutsideStay,

    /// The row's range is not contained within any single stay row.
    ///
    /// Containment is per stay row, not per union: a range bridging the
    /// gap between two stays is rejected even though the union covers it.
    #[error("the range must fall within the declared stay periods")]
    RangeOutsideStays,
}

impl RowError {
    /// The form field this error is anchored to.
    pub const fn field(&self) -> ErrorField {
        match self {
            RowError::StartOutsideStay => ErrorField::From,
            RowError::RangeOutsideStays => ErrorField::Both,
        }
    }
}

/// A row error paired with the row it belongs to.
///
/// The validator returns these instead of writing into caller-owned rows,
/// so the engine's only output is its return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RowIssue {
    /// Id of the offending row.
    pub row_id: String,
    /// What is wrong with it.
    pub error: RowError,
}

impl RowIssue {
    pub fn new(row_id: impl Into<String>, error: RowError) -> Self {
        RowIssue {
            row_id: row_id.into(),
            error,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
