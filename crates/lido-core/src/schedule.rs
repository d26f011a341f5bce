//! # Rate Schedule
//!
//! The admin-configured settings: seasonal pricing periods, per-category
//! daily rates, extra-entrance and private-booth prices, and the long-stay
//! discount parameters.
//!
//! ## Period Windows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  How Periods Cover the Season                       │
//! │                                                                     │
//! │  period 0           period 1            period 2                    │
//! │  ├─ start Aug 01    ├─ start Aug 15     ├─ start Sep 01             │
//! │  │                  │                   │                           │
//! │  Aug 01 ──────► Aug 14   Aug 15 ──► Aug 31   Sep 01 ──► closing     │
//! │                 (next start − 1 day)         (closing_date)         │
//! │                                                                     │
//! │  Every period prices its categories independently; a stay that      │
//! │  spans a boundary is billed per period at that period's rate.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Category Identity
//! Categories are matched BY NAME across periods. The same name must
//! appear in every period for a continuously-priced stay; a name missing
//! from a period silently bills 0 days there. This mirrors the original
//! product behavior and is intentionally not an error.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_schedule;
use crate::{DEFAULT_DAYS_NO_DISCOUNT, DEFAULT_PRICE_DISCOUNT_CENTS};

// =============================================================================
// Category
// =============================================================================

/// A price category within a period.
///
/// `name` is the business identifier ("1", "2", …) shown in the category
/// picker and used as the breakdown key; `id` is the position the settings
/// editor assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Daily rate for this category in this period.
    pub price: Money,
}

// =============================================================================
// Period
// =============================================================================

/// A date sub-range of the season with its own per-category rates.
///
/// Only the start date is stored; the effective end is derived (see
/// [`RateSchedule::effective_end`]). A freshly created period has no start
/// yet — that is a draft state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Period {
    pub id: u32,
    #[ts(as = "Option<String>")]
    pub start: Option<NaiveDate>,
    pub categories: Vec<Category>,
}

impl Period {
    /// Looks up a category by name within this period.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }
}

// =============================================================================
// Rate Schedule
// =============================================================================

/// The full pricing configuration ("Settings" in the calculator UI).
///
/// ## Invariants
/// - Periods are ordered by ascending `start`; each `start` must exceed
///   the previous one (checked by [`validate_schedule`], the editor keeps
///   drafts in arbitrary completeness).
/// - The last period ends at `closing_date`; every other period ends the
///   day before the next period's start.
///
/// ## Serialization
/// Serializes with the original document field names (`priceEntrance`,
/// `closingDate`, …). Prices are integer cents. This is also the shape of
/// an exported settings file — see [`RateSchedule::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RateSchedule {
    pub periods: Vec<Period>,
    /// Price per day per extra entrance.
    pub price_entrance: Money,
    /// Price per day for the private booth.
    pub price_booth: Money,
    /// Last open day of the season; end of the final period.
    #[ts(as = "Option<String>")]
    pub closing_date: Option<NaiveDate>,
    /// Daily discount applied to long stays (stored positive, billed negative).
    pub price_discount: Money,
    /// Stays of at most this many days get no discount.
    pub days_no_discount: i64,
}

impl RateSchedule {
    /// Effective end date of the period at `index`.
    ///
    /// `next period's start − 1 day` when a next period exists, otherwise
    /// the closing date. `None` when the needed date is not set yet — the
    /// period then simply prices zero days.
    pub fn effective_end(&self, index: usize) -> Option<NaiveDate> {
        match self.periods.get(index + 1) {
            Some(next) => next
                .start
                .and_then(|start| start.checked_sub_days(Days::new(1))),
            None => self.closing_date,
        }
    }

    /// Looks up a category by name inside the period with the given id.
    pub fn category_in_period(&self, period_id: u32, name: &str) -> Option<&Category> {
        self.periods
            .iter()
            .find(|period| period.id == period_id)
            .and_then(|period| period.category(name))
    }

    /// Earliest legal start date for the period at `index`: the day after
    /// the previous period's start. The settings editor uses this as the
    /// date-input lower bound.
    pub fn next_period_min_start(&self, index: usize) -> Option<NaiveDate> {
        if index == 0 {
            return None;
        }
        self.periods
            .get(index - 1)?
            .start?
            .checked_add_days(Days::new(1))
    }

    /// Checks whether the schedule is complete enough to price rows.
    ///
    /// ## Example
    /// ```rust
    /// use lido_core::schedule::RateSchedule;
    ///
    /// // The default draft schedule has no closing date and zero prices.
    /// assert!(!RateSchedule::default().is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        validate_schedule(self).is_ok()
    }

    /// Parses a rate schedule from an exported settings document.
    pub fn from_json(document: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Renders the schedule as a settings document for export.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The draft the settings editor starts from: a single period with one
/// zero-priced category named "1", no dates, default discount parameters.
impl Default for RateSchedule {
    fn default() -> Self {
        RateSchedule {
            periods: vec![Period {
                id: 0,
                start: None,
                categories: vec![Category {
                    id: 0,
                    name: "1".to_string(),
                    price: Money::zero(),
                }],
            }],
            price_entrance: Money::zero(),
            price_booth: Money::zero(),
            closing_date: None,
            price_discount: Money::from_cents(DEFAULT_PRICE_DISCOUNT_CENTS),
            days_no_discount: DEFAULT_DAYS_NO_DISCOUNT,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_period_schedule() -> RateSchedule {
        RateSchedule {
            periods: vec![
                Period {
                    id: 0,
                    start: Some(date(2021, 8, 1)),
                    categories: vec![Category {
                        id: 0,
                        name: "1".to_string(),
                        price: Money::from_cents(500),
                    }],
                },
                Period {
                    id: 1,
                    start: Some(date(2021, 8, 15)),
                    categories: vec![Category {
                        id: 0,
                        name: "1".to_string(),
                        price: Money::from_cents(300),
                    }],
                },
            ],
            price_entrance: Money::from_cents(500),
            price_booth: Money::from_cents(500),
            closing_date: Some(date(2021, 8, 31)),
            price_discount: Money::from_cents(500),
            days_no_discount: 15,
        }
    }

    #[test]
    fn test_effective_end_inner_period() {
        let schedule = two_period_schedule();
        // Period 0 ends the day before period 1 starts.
        assert_eq!(schedule.effective_end(0), Some(date(2021, 8, 14)));
    }

    #[test]
    fn test_effective_end_last_period_is_closing_date() {
        let schedule = two_period_schedule();
        assert_eq!(schedule.effective_end(1), Some(date(2021, 8, 31)));
    }

    #[test]
    fn test_effective_end_missing_next_start() {
        let mut schedule = two_period_schedule();
        schedule.periods[1].start = None;
        assert_eq!(schedule.effective_end(0), None);
    }

    #[test]
    fn test_category_lookup_by_name() {
        let schedule = two_period_schedule();
        assert_eq!(
            schedule.category_in_period(1, "1").map(|c| c.price.cents()),
            Some(300)
        );
        assert!(schedule.category_in_period(0, "missing").is_none());
        assert!(schedule.category_in_period(9, "1").is_none());
    }

    #[test]
    fn test_next_period_min_start() {
        let schedule = two_period_schedule();
        assert_eq!(schedule.next_period_min_start(0), None);
        assert_eq!(schedule.next_period_min_start(1), Some(date(2021, 8, 2)));
    }

    #[test]
    fn test_default_draft() {
        let draft = RateSchedule::default();
        assert_eq!(draft.periods.len(), 1);
        assert_eq!(draft.periods[0].categories[0].name, "1");
        assert!(draft.periods[0].start.is_none());
        assert_eq!(draft.price_discount.cents(), 500);
        assert_eq!(draft.days_no_discount, 15);
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_json_round_trip() {
        let schedule = two_period_schedule();
        let document = schedule.to_json().unwrap();
        // Document field names match the original settings files.
        assert!(document.contains("\"priceEntrance\""));
        assert!(document.contains("\"closingDate\""));

        let restored = RateSchedule::from_json(&document).unwrap();
        assert_eq!(restored, schedule);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(RateSchedule::from_json("not json").is_err());
    }
}
