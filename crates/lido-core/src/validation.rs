//! # Validation Module
//!
//! Two validation concerns live here:
//!
//! 1. **Extra-row containment** — Entrate / Cabina privata rows must fall
//!    inside the declared stays. This gates the whole pricing pass.
//! 2. **Rate-schedule validation** — the settings editor's completeness
//!    rules, mirrored so collaborators can gate input the same way.
//!
//! ## Containment Is Per Stay Row, Not Per Union
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  stays:     Aug 01 ───► Aug 09         Aug 13 ───► Aug 20           │
//! │                                                                     │
//! │  extra:              Aug 08 ──────────► Aug 14                      │
//! │                                                                     │
//! │  REJECTED: no single stay contains the extra range, even though     │
//! │  the union of stays covers most of it. A guest cannot rent a        │
//! │  booth across days they are not at the lido.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any issue blocks computation of the entire total (all-or-nothing): a
//! partially-valid row set never produces a partial price.

use chrono::NaiveDate;

use crate::error::{RowError, RowIssue, ValidationError, ValidationResult};
use crate::rows::{Row, RowSections, Section, StayWindow};
use crate::schedule::RateSchedule;

// =============================================================================
// Extra-Row Containment
// =============================================================================

/// Validates the Entrate and Cabina privata sections against the stay
/// window.
///
/// ## Rules
/// - A row with no start date is never flagged (not yet billable).
/// - A start date outside `[window.from, window.to]` →
///   [`RowError::StartOutsideStay`].
/// - Otherwise, a complete range not contained within any **single**
///   completed stay row → [`RowError::RangeOutsideStays`]. With no
///   completed stay at all, every complete extra range is rejected.
///
/// Returns the full issue list; the engine prices nothing unless it is
/// empty. Rows are read-only here — issues are reported by row id.
pub fn validate_extra_rows(rows: &RowSections, window: &StayWindow) -> Vec<RowIssue> {
    let mut issues = Vec::new();

    for section in [Section::Entrances, Section::PrivateBooth] {
        for row in rows.rows(section) {
            let Some(from) = row.from else {
                continue;
            };

            if let (Some(window_from), Some(window_to)) = (window.from, window.to) {
                if from < window_from || from > window_to {
                    issues.push(RowIssue::new(&row.id, RowError::StartOutsideStay));
                    continue;
                }
            }

            if let Some(to) = row.to {
                if !is_within_any_stay(from, to, &window.sorted) {
                    issues.push(RowIssue::new(&row.id, RowError::RangeOutsideStays));
                }
            }
        }
    }

    issues
}

/// Whether `[from, to]` is fully contained in at least one of the
/// completed stay rows.
fn is_within_any_stay(from: NaiveDate, to: NaiveDate, stays: &[Row]) -> bool {
    stays.iter().any(|stay| {
        matches!(
            (stay.from, stay.to),
            (Some(stay_from), Some(stay_to)) if stay_from <= from && to <= stay_to
        )
    })
}

// =============================================================================
// Rate-Schedule Validation
// =============================================================================

/// Validates a rate schedule for completeness.
///
/// ## Rules
/// - `priceBooth` and `priceEntrance` must be positive
/// - `closingDate` must be set
/// - at least one period, each with a start date
/// - period starts strictly ascending
/// - every period has at least one category; every category has a
///   non-empty name and a positive price
///
/// The engine itself never runs this — an incomplete schedule just prices
/// zero days. Collaborators use it to decide when rows may become
/// billable at all.
pub fn validate_schedule(schedule: &RateSchedule) -> ValidationResult<()> {
    if !schedule.price_booth.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "priceBooth".to_string(),
        });
    }

    if !schedule.price_entrance.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "priceEntrance".to_string(),
        });
    }

    if schedule.closing_date.is_none() {
        return Err(ValidationError::Required {
            field: "closingDate".to_string(),
        });
    }

    if schedule.periods.is_empty() {
        return Err(ValidationError::Required {
            field: "periods".to_string(),
        });
    }

    let mut previous_start: Option<NaiveDate> = None;
    for (index, period) in schedule.periods.iter().enumerate() {
        let Some(start) = period.start else {
            return Err(ValidationError::Required {
                field: format!("periods[{index}].start"),
            });
        };

        if let Some(previous) = previous_start {
            if start <= previous {
                return Err(ValidationError::InvalidFormat {
                    field: format!("periods[{index}].start"),
                    reason: "must be after the previous period's start".to_string(),
                });
            }
        }
        previous_start = Some(start);

        if period.categories.is_empty() {
            return Err(ValidationError::Required {
                field: format!("periods[{index}].categories"),
            });
        }

        for category in &period.categories {
            if category.name.is_empty() {
                return Err(ValidationError::Required {
                    field: format!("periods[{index}].categories.name"),
                });
            }
            if !category.price.is_positive() {
                return Err(ValidationError::MustBePositive {
                    field: format!("periods[{index}].categories[{}].price", category.id),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::rows::find_min_max_dates;
    use crate::schedule::{Category, Period};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stay_row(from: NaiveDate, to: NaiveDate) -> Row {
        let mut row = Row::new();
        row.from = Some(from);
        row.to = Some(to);
        row.category = Some("1".to_string());
        row
    }

    fn extra_row(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Row {
        let mut row = Row::new();
        row.from = from;
        row.to = to;
        row
    }

    fn sections_with_booth(stays: Vec<Row>, booth: Row) -> (RowSections, StayWindow) {
        let window = find_min_max_dates(&stays);
        let sections = RowSections {
            stays,
            entrances: Vec::new(),
            booths: vec![booth],
        };
        (sections, window)
    }

    #[test]
    fn test_contained_extra_row_passes() {
        let (sections, window) = sections_with_booth(
            vec![stay_row(date(2021, 8, 1), date(2021, 8, 20))],
            extra_row(Some(date(2021, 8, 10)), Some(date(2021, 8, 12))),
        );
        assert!(validate_extra_rows(&sections, &window).is_empty());
    }

    #[test]
    fn test_start_outside_window_flags_from_field() {
        let (sections, window) = sections_with_booth(
            vec![stay_row(date(2021, 8, 1), date(2021, 8, 20))],
            extra_row(Some(date(2021, 7, 20)), Some(date(2021, 8, 2))),
        );
        let issues = validate_extra_rows(&sections, &window);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].error, RowError::StartOutsideStay);
        assert_eq!(issues[0].row_id, sections.booths[0].id);
    }

    #[test]
    fn test_union_coverage_is_not_containment() {
        // Two stays cover Aug 1-9 and Aug 13-20; the extra range bridges
        // the gap and must be rejected.
        let (sections, window) = sections_with_booth(
            vec![
                stay_row(date(2021, 8, 1), date(2021, 8, 9)),
                stay_row(date(2021, 8, 13), date(2021, 8, 20)),
            ],
            extra_row(Some(date(2021, 8, 8)), Some(date(2021, 8, 14))),
        );
        let issues = validate_extra_rows(&sections, &window);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].error, RowError::RangeOutsideStays);
    }

    #[test]
    fn test_contained_in_second_stay_passes() {
        let (sections, window) = sections_with_booth(
            vec![
                stay_row(date(2021, 8, 1), date(2021, 8, 9)),
                stay_row(date(2021, 8, 13), date(2021, 8, 20)),
            ],
            extra_row(Some(date(2021, 8, 14)), Some(date(2021, 8, 18))),
        );
        assert!(validate_extra_rows(&sections, &window).is_empty());
    }

    #[test]
    fn test_row_without_start_is_ignored() {
        let (sections, window) = sections_with_booth(
            vec![stay_row(date(2021, 8, 1), date(2021, 8, 20))],
            extra_row(None, Some(date(2021, 8, 12))),
        );
        assert!(validate_extra_rows(&sections, &window).is_empty());
    }

    #[test]
    fn test_start_only_row_within_window_is_ok() {
        let (sections, window) = sections_with_booth(
            vec![stay_row(date(2021, 8, 1), date(2021, 8, 20))],
            extra_row(Some(date(2021, 8, 10)), None),
        );
        assert!(validate_extra_rows(&sections, &window).is_empty());
    }

    #[test]
    fn test_complete_extra_with_no_stays_is_rejected() {
        let (sections, window) = sections_with_booth(
            Vec::new(),
            extra_row(Some(date(2021, 8, 10)), Some(date(2021, 8, 12))),
        );
        let issues = validate_extra_rows(&sections, &window);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].error, RowError::RangeOutsideStays);
    }

    // -------------------------------------------------------------------------
    // Schedule validation
    // -------------------------------------------------------------------------

    fn valid_schedule() -> RateSchedule {
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
    fn test_valid_schedule_passes() {
        assert!(validate_schedule(&valid_schedule()).is_ok());
        assert!(valid_schedule().is_valid());
    }

    #[test]
    fn test_schedule_requires_positive_prices() {
        let mut schedule = valid_schedule();
        schedule.price_entrance = Money::zero();
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::MustBePositive { field }) if field == "priceEntrance"
        ));
    }

    #[test]
    fn test_schedule_requires_closing_date() {
        let mut schedule = valid_schedule();
        schedule.closing_date = None;
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::Required { field }) if field == "closingDate"
        ));
    }

    #[test]
    fn test_schedule_rejects_out_of_order_periods() {
        let mut schedule = valid_schedule();
        schedule.periods[1].start = Some(date(2021, 8, 1));
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_schedule_rejects_zero_priced_category() {
        let mut schedule = valid_schedule();
        schedule.periods[1].categories[0].price = Money::zero();
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_default_schedule_is_a_draft() {
        assert!(validate_schedule(&RateSchedule::default()).is_err());
    }
}
