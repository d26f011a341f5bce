//! # lido-core: Pure Pricing Logic for Lido Calc
//!
//! This crate is the **heart** of Lido Calc, the seasonal beach
//! establishment calculator. It computes the price a guest owes from the
//! rows they entered and the rate schedule the admin configured — as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Lido Calc Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Frontend (calculator page)                    │  │
//! │  │   Section panels ──► Row forms ──► Settings editor ──► Total  │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │ rows + window + schedule            │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │                ★ lido-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌────────┐ ┌───────┐ ┌───────────┐ ┌───────────┐ ┌────────┐  │  │
//! │  │  │ money  │ │ dates │ │ schedule  │ │ breakdown │ │ engine │  │  │
//! │  │  │ Money  │ │ split │ │ RateSched │ │ accumulate│ │ total  │  │  │
//! │  │  └────────┘ └───────┘ └───────────┘ └───────────┘ └────────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO STORAGE • NO RENDERING • PURE FUNCTIONS          │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │ breakdown + grand total + issues    │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │            Presentation (itemized summary, toasts)            │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rows`] - Guest-entered rows, sections, the derived stay window
//! - [`schedule`] - The admin rate schedule (periods, categories, prices)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`dates`] - Inclusive day counts and the per-period split
//! - [`breakdown`] - The itemized total accumulator
//! - [`engine`] - `calculate_total`, the pricing pass
//! - [`validation`] - Extra-row containment and schedule validation
//! - [`format`] - Receipt-style summary lines
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same rows + window + schedule = same result, every time
//! 2. **No I/O**: storage, network, rendering are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are euro cents (i64), never floats
//! 4. **Explicit Errors**: row issues are returned, never written into caller data
//!
//! ## Example Usage
//!
//! ```rust
//! use lido_core::engine::calculate_total;
//! use lido_core::rows::{find_min_max_dates, RowSections};
//! use lido_core::schedule::RateSchedule;
//!
//! let rows = RowSections::new();           // blank form
//! let window = find_min_max_dates(&rows.stays);
//! let schedule = RateSchedule::default();  // draft settings
//!
//! let calculation = calculate_total(&rows, &window, &schedule);
//! assert!(calculation.is_valid());
//! assert!(calculation.grand_total.is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod dates;
pub mod engine;
pub mod error;
pub mod format;
pub mod money;
pub mod rows;
pub mod schedule;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lido_core::Money` instead of
// `use lido_core::money::Money`

pub use breakdown::{Breakdown, BreakdownEntry, EntranceTotals, Totals};
pub use engine::{calculate_total, Calculation};
pub use error::{CoreError, CoreResult, ErrorField, RowError, RowIssue, ValidationError};
pub use money::Money;
pub use rows::{find_min_max_dates, Row, RowSections, Section, StayWindow};
pub use schedule::{Category, Period, RateSchedule};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Breakdown key of the long-stay discount entry.
///
/// ## Why a constant?
/// "Sconto" shares the breakdown namespace with category names and the
/// section labels; keeping the literal in one place keeps the engine and
/// the summary renderer agreeing on it.
pub const DISCOUNT_KEY: &str = "Sconto";

/// Default daily long-stay discount, in cents (5.00 €).
///
/// ## Business Reason
/// Seed value of a fresh settings draft; the admin tunes it per season.
pub const DEFAULT_PRICE_DISCOUNT_CENTS: i64 = 500;

/// Default number of stay days before the long-stay discount kicks in.
///
/// ## Business Reason
/// Stays up to two weeks pay the full rate; the discount rewards guests
/// who book longer. Admin-tunable per season.
pub const DEFAULT_DAYS_NO_DISCOUNT: i64 = 15;
