//! # Pricing Engine
//!
//! Orchestrates the per-section totals and the long-stay discount into the
//! final breakdown and grand total.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  calculate_total(rows, window, schedule)                            │
//! │                                                                     │
//! │  1. validate_extra_rows ──► any issue? ──► { {}, 0.00 €, issues }   │
//! │         │ none                                                      │
//! │         ▼                                                           │
//! │  2. Stay rows    ──► days_in_each_period ──► category × days        │
//! │  3. Discount     ──► permanence_days > threshold ──► "Sconto"       │
//! │  4. Entrate rows ──► price × days × entrances, per row              │
//! │  5. Booth rows   ──► price × days, one merged bucket                │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  { breakdown, grand_total, [] }                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! The engine is a synchronous, side-effect-free function of its three
//! inputs: no I/O, no hidden state, no mutation of caller data. It is safe
//! to call on every keystroke; callers debounce if they care. Malformed
//! input never panics — it degrades to a zero contribution.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::breakdown::{Breakdown, EntranceTotals, Totals};
use crate::dates::{days_in_each_period, inclusive_day_count};
use crate::error::RowIssue;
use crate::money::Money;
use crate::rows::{Row, RowSections, Section, StayWindow};
use crate::schedule::RateSchedule;
use crate::validation::validate_extra_rows;
use crate::DISCOUNT_KEY;

// =============================================================================
// Calculation Result
// =============================================================================

/// The outcome of one pricing pass.
///
/// When `issues` is non-empty the breakdown is empty and the total is
/// zero: validation is all-or-nothing, one bad extra row blocks the whole
/// computation rather than just its own contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub breakdown: Breakdown,
    pub grand_total: Money,
    pub issues: Vec<RowIssue>,
}

impl Calculation {
    /// Whether the pass priced anything (no validation issues).
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    fn rejected(issues: Vec<RowIssue>) -> Self {
        Calculation {
            breakdown: Breakdown::new(),
            grand_total: Money::zero(),
            issues,
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Computes the price owed for the current row set.
///
/// `window` must be the stay window the caller derived from the current
/// Stay rows via [`crate::rows::find_min_max_dates`] — the engine does not
/// recompute it.
///
/// Exact integer-cent arithmetic throughout; rounding for display is the
/// presentation layer's concern.
///
/// ## Example
/// ```rust,ignore
/// let window = find_min_max_dates(&rows.stays);
/// let calculation = calculate_total(&rows, &window, &schedule);
/// if calculation.is_valid() {
///     show_total(calculation.grand_total);
/// }
/// ```
pub fn calculate_total(
    rows: &RowSections,
    window: &StayWindow,
    schedule: &RateSchedule,
) -> Calculation {
    let issues = validate_extra_rows(rows, window);
    if !issues.is_empty() {
        debug!(issues = issues.len(), "extra rows invalid, pricing skipped");
        return Calculation::rejected(issues);
    }

    let mut breakdown = Breakdown::new();
    let mut grand_total = Money::zero();
    let mut permanence_days: i64 = 0;

    for row in rows.rows(Section::Stay) {
        grand_total += stay_total(row, schedule, &mut breakdown, &mut permanence_days);
    }

    grand_total += discount_total(permanence_days, schedule, &mut breakdown);

    for row in rows.rows(Section::Entrances) {
        grand_total += entrance_total(row, schedule, &mut breakdown);
    }

    for row in rows.rows(Section::PrivateBooth) {
        grand_total += booth_total(row, schedule, &mut breakdown);
    }

    debug!(%grand_total, permanence_days, "pricing pass complete");

    Calculation {
        breakdown,
        grand_total,
        issues,
    }
}

// =============================================================================
// Per-Section Totals
// =============================================================================

/// One stay row: bill each period's overlap at that period's category
/// rate.
///
/// The category is matched by name per period; a period where the name is
/// missing contributes nothing (0 days, 0 price) — not an error. Days in
/// skipped periods also do not count toward the discount threshold.
fn stay_total(
    row: &Row,
    schedule: &RateSchedule,
    breakdown: &mut Breakdown,
    permanence_days: &mut i64,
) -> Money {
    let Some(category_name) = row.category.as_deref().filter(|name| !name.is_empty()) else {
        return Money::zero();
    };

    let mut row_total = Money::zero();
    for entry in days_in_each_period(row, schedule) {
        if entry.days == 0 {
            continue;
        }
        let Some(category) = schedule.category_in_period(entry.period_id, category_name) else {
            continue;
        };

        let total_price = category.price.multiply_days(entry.days);
        breakdown.accumulate_period(
            &category.name,
            entry.period_id,
            Totals {
                days: entry.days,
                unit_price: category.price,
                total_price,
            },
        );
        *permanence_days += entry.days;
        row_total += total_price;
    }

    row_total
}

/// The long-stay discount: once the total stay days exceed the threshold,
/// EVERY stay day is discounted, not just the excess.
fn discount_total(permanence_days: i64, schedule: &RateSchedule, breakdown: &mut Breakdown) -> Money {
    if permanence_days <= schedule.days_no_discount {
        return Money::zero();
    }

    let unit_price = -schedule.price_discount;
    let total_price = unit_price.multiply_days(permanence_days);
    breakdown.accumulate_flat(
        DISCOUNT_KEY,
        Totals {
            days: permanence_days,
            unit_price,
            total_price,
        },
    );
    total_price
}

/// One extra-entrances row: price × days × entrances, bucketed per row
/// since each entrance row is billed and displayed independently.
fn entrance_total(row: &Row, schedule: &RateSchedule, breakdown: &mut Breakdown) -> Money {
    let days = inclusive_day_count(row.from, row.to);
    let entrances = row.extra_entrances.unwrap_or(0);
    if days == 0 || entrances <= 0 {
        return Money::zero();
    }

    let unit_price = schedule.price_entrance;
    let total_price = unit_price.multiply_days(days) * entrances;
    breakdown.accumulate_row(
        Section::Entrances.label(),
        &row.id,
        EntranceTotals {
            days,
            num_entrances: entrances,
            unit_price,
            total_price,
        },
    );
    total_price
}

/// One private-booth row: price × days, merged with every other booth row
/// into the single "Cabina privata" bucket.
fn booth_total(row: &Row, schedule: &RateSchedule, breakdown: &mut Breakdown) -> Money {
    let days = inclusive_day_count(row.from, row.to);
    if days == 0 {
        return Money::zero();
    }

    let unit_price = schedule.price_booth;
    let total_price = unit_price.multiply_days(days);
    breakdown.accumulate_flat(
        Section::PrivateBooth.label(),
        Totals {
            days,
            unit_price,
            total_price,
        },
    );
    total_price
}

// =============================================================================
// Unit Tests
// =============================================================================
