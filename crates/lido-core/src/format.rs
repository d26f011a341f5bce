//! # Display Formatting
//!
//! Receipt-style rendering of a calculation, line by line, in the wording
//! the calculator page shows. Money renders through [`crate::money::Money`]'s
//! display (`"50.00 €"`), which is the only place rounding to two decimals
//! happens.

use crate::breakdown::BreakdownEntry;
use crate::engine::Calculation;
use crate::rows::Section;
use crate::DISCOUNT_KEY;

/// Picks the singular or plural noun for a day-like count.
///
/// ## Example
/// ```rust
/// use lido_core::format::singular_plural_days;
///
/// assert_eq!(singular_plural_days(1, "giorno", "giorni"), "1 giorno");
/// assert_eq!(singular_plural_days(16, "giorno", "giorni"), "16 giorni");
/// ```
pub fn singular_plural_days(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Renders the itemized summary: one line per stay-category period, the
/// discount, each entrance row, the booth bucket, and the grand total.
///
/// Section order matches the page: stays, sconto, entrate, cabina
/// privata, totale.
pub fn summary_lines(calculation: &Calculation) -> Vec<String> {
    let breakdown = &calculation.breakdown;
    let mut lines = Vec::new();

    for (key, entry) in breakdown.iter() {
        if key == DISCOUNT_KEY
            || key == Section::Entrances.label()
            || key == Section::PrivateBooth.label()
        {
            continue;
        }
        let BreakdownEntry::PerPeriod(periods) = entry else {
            continue;
        };
        for (period_id, totals) in periods {
            lines.push(format!(
                "Permanenza {}º periodo per {} a {}/giorno: {}",
                period_id + 1,
                singular_plural_days(totals.days, "giorno", "giorni"),
                totals.unit_price,
                totals.total_price,
            ));
        }
    }

    if let Some(discount) = breakdown.flat_totals(DISCOUNT_KEY) {
        lines.push(format!(
            "{} a {}/giorno: {}",
            singular_plural_days(discount.days, "giorno scontato", "giorni scontati"),
            discount.unit_price,
            discount.total_price,
        ));
    }

    if let Some(BreakdownEntry::PerRow(rows)) = breakdown.entry(Section::Entrances.label()) {
        for totals in rows.values() {
            lines.push(format!(
                "{} extra per {} a {}/giorno x ingresso: {}",
                singular_plural_days(totals.num_entrances, "ingresso", "ingressi"),
                singular_plural_days(totals.days, "giorno", "giorni"),
                totals.unit_price,
                totals.total_price,
            ));
        }
    }

    if let Some(booth) = breakdown.flat_totals(Section::PrivateBooth.label()) {
        lines.push(format!(
            "Cabina privata per {} a {}/giorno: {}",
            singular_plural_days(booth.days, "giorno", "giorni"),
            booth.unit_price,
            booth.total_price,
        ));
    }

    lines.push(format!("Totale: {}", calculation.grand_total));
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_total;
    use crate::money::Money;
    use crate::rows::{find_min_max_dates, Row, RowSections};
    use crate::schedule::{Category, Period, RateSchedule};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference_schedule() -> RateSchedule {
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
    fn test_pluralization() {
        assert_eq!(singular_plural_days(1, "ingresso", "ingressi"), "1 ingresso");
        assert_eq!(singular_plural_days(2, "ingresso", "ingressi"), "2 ingressi");
        assert_eq!(singular_plural_days(0, "giorno", "giorni"), "0 giorni");
    }

    #[test]
    fn test_summary_of_full_scenario() {
        let mut stay = Row::new();
        stay.from = Some(date(2021, 8, 5));
        stay.to = Some(date(2021, 8, 20));
        stay.category = Some("1".to_string());

        let mut booth = Row::new();
        booth.from = Some(date(2021, 8, 10));
        booth.to = Some(date(2021, 8, 10));

        let stays = vec![stay];
        let window = find_min_max_dates(&stays);
        let rows = RowSections {
            stays,
            entrances: Vec::new(),
            booths: vec![booth],
        };

        let calculation = calculate_total(&rows, &window, &reference_schedule());
        let lines = summary_lines(&calculation);

        assert_eq!(
            lines,
            vec![
                "Permanenza 1º periodo per 10 giorni a 5.00 €/giorno: 50.00 €".to_string(),
                "Permanenza 2º periodo per 6 giorni a 3.00 €/giorno: 18.00 €".to_string(),
                "16 giorni scontati a -5.00 €/giorno: -80.00 €".to_string(),
                "Cabina privata per 1 giorno a 5.00 €/giorno: 5.00 €".to_string(),
                "Totale: -7.00 €".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_of_empty_calculation_is_just_the_total() {
        let rows = RowSections::new();
        let window = find_min_max_dates(&rows.stays);
        let calculation = calculate_total(&rows, &window, &reference_schedule());

        assert_eq!(summary_lines(&calculation), vec!["Totale: 0.00 €".to_string()]);
    }
}
