//! # Breakdown
//!
//! The itemized decomposition of the grand total, keyed by category name or
//! one of the literal section keys.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  {                                                                  │
//! │    "1": {                         ◄── stay category, per period     │
//! │      0: { days: 10, unitPrice: 500, totalPrice: 5000 },             │
//! │      1: { days: 6,  unitPrice: 300, totalPrice: 1800 }              │
//! │    },                                                               │
//! │    "Entrate": {                   ◄── per entrance row              │
//! │      "<row id>": { days: 3, numEntrances: 2, ... }                  │
//! │    },                                                               │
//! │    "Cabina privata": { days: 10, ... },   ◄── single flat record    │
//! │    "Sconto": { days: 16, unitPrice: -500, totalPrice: -8000 }       │
//! │  }                                                                  │
//! │                                                                     │
//! │  The entry shape is a tagged variant selected by section, not       │
//! │  inferred at read time.                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Merge Semantics
//! Accumulating into an occupied slot ADDS `days` and `total_price` and
//! OVERWRITES `unit_price` / `num_entrances`: the unit price cannot vary
//! once a key is known, and the count fields are recomputed fresh on every
//! full pass rather than merged.

use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Totals
// =============================================================================

/// Day/price totals for one breakdown slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub days: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

impl Totals {
    fn merge(&mut self, other: Totals) {
        self.days += other.days;
        self.total_price += other.total_price;
        self.unit_price = other.unit_price;
    }
}

/// Totals for one extra-entrances row, carrying the entrance count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EntranceTotals {
    pub days: i64,
    pub num_entrances: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

impl EntranceTotals {
    fn merge(&mut self, other: EntranceTotals) {
        self.days += other.days;
        self.total_price += other.total_price;
        self.num_entrances = other.num_entrances;
        self.unit_price = other.unit_price;
    }
}

// =============================================================================
// Breakdown Entry
// =============================================================================

/// One value of the breakdown map.
///
/// Untagged serde representation: each variant serializes as its inner
/// shape, so consumers see the same dynamic object the calculator page
/// always rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum BreakdownEntry {
    /// Stay categories: totals keyed by period id.
    PerPeriod(BTreeMap<u32, Totals>),
    /// "Entrate": totals keyed by row id — every entrance row is billed
    /// and displayed independently.
    PerRow(BTreeMap<String, EntranceTotals>),
    /// "Cabina privata" and "Sconto": a single record.
    Flat(Totals),
}

// =============================================================================
// Breakdown
// =============================================================================

/// The accumulated breakdown, keyed by category name or section key.
///
/// `BTreeMap` keeps iteration deterministic, so identical inputs render
/// identical summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Breakdown(BTreeMap<String, BreakdownEntry>);

impl Breakdown {
    /// An empty breakdown.
    pub fn new() -> Self {
        Breakdown(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The entry under `key`, if any.
    pub fn entry(&self, key: &str) -> Option<&BreakdownEntry> {
        self.0.get(key)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BreakdownEntry)> {
        self.0.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Accumulates stay totals under `key` for one period.
    ///
    /// Keys are disciplined by the engine (category names for per-period
    /// entries); a shape clash with an existing entry leaves that entry
    /// untouched.
    pub fn accumulate_period(&mut self, key: &str, period_id: u32, values: Totals) {
        let entry = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| BreakdownEntry::PerPeriod(BTreeMap::new()));
        let BreakdownEntry::PerPeriod(periods) = entry else {
            return;
        };
        match periods.get_mut(&period_id) {
            Some(slot) => slot.merge(values),
            None => {
                periods.insert(period_id, values);
            }
        }
    }

    /// Accumulates entrance totals under `key` for one row.
    pub fn accumulate_row(&mut self, key: &str, row_id: &str, values: EntranceTotals) {
        let entry = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| BreakdownEntry::PerRow(BTreeMap::new()));
        let BreakdownEntry::PerRow(rows) = entry else {
            return;
        };
        match rows.get_mut(row_id) {
            Some(slot) => slot.merge(values),
            None => {
                rows.insert(row_id.to_string(), values);
            }
        }
    }

    /// Accumulates totals into a single flat record under `key`.
    pub fn accumulate_flat(&mut self, key: &str, values: Totals) {
        match self.0.get_mut(key) {
            Some(BreakdownEntry::Flat(slot)) => slot.merge(values),
            Some(_) => {}
            None => {
                self.0.insert(key.to_string(), BreakdownEntry::Flat(values));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Typed read helpers
    // -------------------------------------------------------------------------

    /// Stay totals for `key` in one period.
    pub fn period_totals(&self, key: &str, period_id: u32) -> Option<&Totals> {
        match self.entry(key)? {
            BreakdownEntry::PerPeriod(periods) => periods.get(&period_id),
            _ => None,
        }
    }

    /// Entrance totals for one row.
    pub fn row_totals(&self, key: &str, row_id: &str) -> Option<&EntranceTotals> {
        match self.entry(key)? {
            BreakdownEntry::PerRow(rows) => rows.get(row_id),
            _ => None,
        }
    }

    /// The flat record under `key`.
    pub fn flat_totals(&self, key: &str) -> Option<&Totals> {
        match self.entry(key)? {
            BreakdownEntry::Flat(totals) => Some(totals),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(days: i64, unit_cents: i64) -> Totals {
        Totals {
            days,
            unit_price: Money::from_cents(unit_cents),
            total_price: Money::from_cents(unit_cents * days),
        }
    }

    #[test]
    fn test_accumulate_period_creates_then_merges() {
        let mut breakdown = Breakdown::new();
        breakdown.accumulate_period("1", 0, totals(10, 500));
        breakdown.accumulate_period("1", 0, totals(4, 500));
        breakdown.accumulate_period("1", 1, totals(6, 300));

        let slot = breakdown.period_totals("1", 0).unwrap();
        assert_eq!(slot.days, 14);
        assert_eq!(slot.total_price.cents(), 7000);
        assert_eq!(slot.unit_price.cents(), 500);

        assert_eq!(breakdown.period_totals("1", 1).unwrap().days, 6);
    }

    #[test]
    fn test_merge_overwrites_unit_price() {
        let mut breakdown = Breakdown::new();
        breakdown.accumulate_flat("Cabina privata", totals(3, 500));
        breakdown.accumulate_flat("Cabina privata", totals(2, 400));

        let slot = breakdown.flat_totals("Cabina privata").unwrap();
        assert_eq!(slot.days, 5);
        assert_eq!(slot.total_price.cents(), 2300);
        // unit_price is overwritten, not summed
        assert_eq!(slot.unit_price.cents(), 400);
    }

    #[test]
    fn test_accumulate_row_buckets_per_row() {
        let mut breakdown = Breakdown::new();
        let values = EntranceTotals {
            days: 3,
            num_entrances: 2,
            unit_price: Money::from_cents(500),
            total_price: Money::from_cents(3000),
        };
        breakdown.accumulate_row("Entrate", "row-a", values);
        breakdown.accumulate_row("Entrate", "row-b", values);

        assert_eq!(breakdown.row_totals("Entrate", "row-a").unwrap().days, 3);
        assert_eq!(breakdown.row_totals("Entrate", "row-b").unwrap().days, 3);
        assert!(breakdown.row_totals("Entrate", "row-c").is_none());
    }

    #[test]
    fn test_shape_clash_leaves_existing_entry() {
        let mut breakdown = Breakdown::new();
        breakdown.accumulate_flat("X", totals(3, 500));
        breakdown.accumulate_period("X", 0, totals(1, 100));

        assert!(breakdown.flat_totals("X").is_some());
        assert!(breakdown.period_totals("X", 0).is_none());
    }

    #[test]
    fn test_serialized_shape_is_untagged() {
        let mut breakdown = Breakdown::new();
        breakdown.accumulate_period("1", 0, totals(10, 500));
        breakdown.accumulate_flat("Sconto", Totals {
            days: 16,
            unit_price: Money::from_cents(-500),
            total_price: Money::from_cents(-8000),
        });

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["1"]["0"]["days"], 10);
        assert_eq!(json["1"]["0"]["unitPrice"], 500);
        assert_eq!(json["Sconto"]["totalPrice"], -8000);
    }
}
