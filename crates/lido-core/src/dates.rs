//! # Date/Period Arithmetic
//!
//! Inclusive day counts and the split of a stay across pricing periods.
//!
//! All dates are [`chrono::NaiveDate`] calendar dates with no time-of-day
//! component, so a day is always exactly one day — daylight-saving shifts
//! cannot bend the arithmetic.
//!
//! ## Splitting a Stay Across Periods
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  schedule: period 0 starts Aug 01, period 1 starts Aug 15,          │
//! │            closing date Aug 31                                      │
//! │                                                                     │
//! │  stay:            Aug 05 ─────────────────────► Aug 20              │
//! │                                                                     │
//! │  period 0 window: Aug 01 ──► Aug 14    ∩ stay = Aug 05..14 = 10 d   │
//! │  period 1 window: Aug 15 ──► Aug 31    ∩ stay = Aug 15..20 =  6 d   │
//! │                                                                     │
//! │  10 + 6 == inclusive_day_count(Aug 05, Aug 20) == 16                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use chrono::NaiveDate;
use ts_rs::TS;

use crate::rows::Row;
use crate::schedule::RateSchedule;

// =============================================================================
// Inclusive Day Count
// =============================================================================

/// Number of calendar days in `[from, to]`, counting both endpoints.
///
/// Returns 0 when either date is missing or when `to` precedes `from`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use lido_core::dates::inclusive_day_count;
///
/// let aug5 = NaiveDate::from_ymd_opt(2021, 8, 5);
/// let aug20 = NaiveDate::from_ymd_opt(2021, 8, 20);
///
/// assert_eq!(inclusive_day_count(aug5, aug20), 16);
/// assert_eq!(inclusive_day_count(aug5, aug5), 1);
/// assert_eq!(inclusive_day_count(aug20, aug5), 0);
/// assert_eq!(inclusive_day_count(aug5, None), 0);
/// ```
pub fn inclusive_day_count(from: Option<NaiveDate>, to: Option<NaiveDate>) -> i64 {
    match (from, to) {
        (Some(from), Some(to)) => ((to - from).num_days() + 1).max(0),
        _ => 0,
    }
}

// =============================================================================
// Per-Period Split
// =============================================================================

/// How many days of a stay fall into one pricing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDays {
    pub period_id: u32,
    pub days: i64,
}

/// Splits a row's date range across every period of the schedule.
///
/// For each period the effective window is `[start, effective_end]`
/// (see [`RateSchedule::effective_end`]); the row range is intersected
/// with it (`start = max`, `end = min`) and counted inclusively. Returns
/// one entry per period **including zero-day entries** — callers filter
/// zeros. A period whose window cannot be derived (missing start or
/// closing date) contributes zero days rather than an error.
///
/// Returns an empty vec when the row is missing either date.
pub fn days_in_each_period(row: &Row, schedule: &RateSchedule) -> Vec<PeriodDays> {
    let (Some(row_from), Some(row_to)) = (row.from, row.to) else {
        return Vec::new();
    };

    schedule
        .periods
        .iter()
        .enumerate()
        .map(|(index, period)| {
            let days = match (period.start, schedule.effective_end(index)) {
                (Some(period_start), Some(period_end)) => {
                    let start = period_start.max(row_from);
                    let end = period_end.min(row_to);
                    inclusive_day_count(Some(start), Some(end))
                }
                _ => 0,
            };

            PeriodDays {
                period_id: period.id,
                days,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
