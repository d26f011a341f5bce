//! # Rows
//!
//! Guest-entered rows, grouped into the three calculator sections, plus the
//! derived stay window used to bound the extra sections.
//!
//! ## Section Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Calculator Sections                           │
//! │                                                                     │
//! │  "Permanenza"       stay rows      from / to / category             │
//! │  "Entrate"          extra rows     from / to / extra_entrances      │
//! │  "Cabina privata"   extra rows     from / to                        │
//! │                                                                     │
//! │  Stay rows drive everything: their min/max dates form the           │
//! │  StayWindow that Entrate and Cabina privata rows must fall into.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Row Lifecycle
//! A row starts blank, gets filled field by field, and becomes *billable*
//! once its section's required fields are set. Incomplete rows are never
//! errors — the pricing pass just skips them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Section
// =============================================================================

/// The three calculator sections.
///
/// Serialized and displayed under the Italian labels the product uses as
/// its section keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Section {
    /// Guest stays — date range plus price category.
    #[serde(rename = "Permanenza")]
    Stay,
    /// Extra entrances — date range plus how many extra people.
    #[serde(rename = "Entrate")]
    Entrances,
    /// Private booth rental — date range only.
    #[serde(rename = "Cabina privata")]
    PrivateBooth,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 3] = [Section::Stay, Section::Entrances, Section::PrivateBooth];

    /// The section label, also used as a breakdown key for the extra
    /// sections.
    pub const fn label(&self) -> &'static str {
        match self {
            Section::Stay => "Permanenza",
            Section::Entrances => "Entrate",
            Section::PrivateBooth => "Cabina privata",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Row
// =============================================================================

/// One user-entered row of any section.
///
/// All data fields are optional: the form materializes a blank row before
/// the guest types anything. `category` is meaningful only for Stay rows,
/// `extra_entrances` only for Entrances rows.
///
/// Rows carry no error state — validation results are returned as
/// [`crate::error::RowIssue`] pairs keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Unique identifier (UUID v4), assigned at creation and stable across
    /// edits.
    pub id: String,
    #[ts(as = "Option<String>")]
    pub from: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub to: Option<NaiveDate>,
    /// Category name for Stay rows ("1", "2", …).
    pub category: Option<String>,
    /// Number of extra entrances for Entrances rows.
    pub extra_entrances: Option<i64>,
}

impl Row {
    /// Creates a blank row with a fresh id.
    pub fn new() -> Self {
        Row {
            id: Uuid::new_v4().to_string(),
            from: None,
            to: None,
            category: None,
            extra_entrances: None,
        }
    }

    /// Whether the row has enough data to contribute to the total in the
    /// given section.
    ///
    /// - every section needs both dates;
    /// - Stay additionally needs a non-empty category;
    /// - Entrances additionally needs a positive entrance count.
    pub fn is_billable(&self, section: Section) -> bool {
        if self.from.is_none() || self.to.is_none() {
            return false;
        }
        match section {
            Section::Stay => self
                .category
                .as_deref()
                .is_some_and(|category| !category.is_empty()),
            Section::Entrances => self.extra_entrances.unwrap_or(0) > 0,
            Section::PrivateBooth => true,
        }
    }
}

impl Default for Row {
    fn default() -> Self {
        Row::new()
    }
}

// =============================================================================
// Row Sections
// =============================================================================

/// The full row set, one list per section.
///
/// Serializes as a map keyed by the section labels, matching the shape the
/// calculator page persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RowSections {
    #[serde(rename = "Permanenza")]
    pub stays: Vec<Row>,
    #[serde(rename = "Entrate")]
    pub entrances: Vec<Row>,
    #[serde(rename = "Cabina privata")]
    pub booths: Vec<Row>,
}

impl RowSections {
    /// Creates the initial row set: one blank row per section, ready for
    /// input.
    pub fn new() -> Self {
        RowSections {
            stays: vec![Row::new()],
            entrances: vec![Row::new()],
            booths: vec![Row::new()],
        }
    }

    /// The rows of one section.
    pub fn rows(&self, section: Section) -> &[Row] {
        match section {
            Section::Stay => &self.stays,
            Section::Entrances => &self.entrances,
            Section::PrivateBooth => &self.booths,
        }
    }

    /// Mutable access to the rows of one section.
    pub fn rows_mut(&mut self, section: Section) -> &mut Vec<Row> {
        match section {
            Section::Stay => &mut self.stays,
            Section::Entrances => &mut self.entrances,
            Section::PrivateBooth => &mut self.booths,
        }
    }

    /// Appends a blank row to a section and returns a reference to it.
    pub fn add_row(&mut self, section: Section) -> &mut Row {
        let rows = self.rows_mut(section);
        rows.push(Row::new());
        rows.last_mut().expect("row was just pushed")
    }

    /// Removes the row at `index` from a section.
    ///
    /// Returns the removed row, or `None` when the index is out of range.
    /// After removing a Stay row the caller must recompute the stay window
    /// with [`find_min_max_dates`].
    pub fn remove_row(&mut self, section: Section, index: usize) -> Option<Row> {
        let rows = self.rows_mut(section);
        if index < rows.len() {
            Some(rows.remove(index))
        } else {
            None
        }
    }
}

impl Default for RowSections {
    fn default() -> Self {
        RowSections::new()
    }
}

// =============================================================================
// Stay Window
// =============================================================================

/// The derived min/max window over the completed stay rows.
///
/// `sorted` holds the stay rows that have both dates, ascending by start;
/// `from`/`to` are the earliest start and latest end among them. The window
/// bounds the extra sections: an Entrances or Private-booth row must fall
/// inside a single one of `sorted`'s ranges.
///
/// The engine never derives this itself — the caller recomputes it with
/// [`find_min_max_dates`] whenever stay rows change and passes it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayWindow {
    #[ts(as = "Option<String>")]
    pub from: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub to: Option<NaiveDate>,
    pub sorted: Vec<Row>,
}

impl StayWindow {
    /// An empty window: no completed stay rows yet.
    pub fn empty() -> Self {
        StayWindow {
            from: None,
            to: None,
            sorted: Vec::new(),
        }
    }

    /// Whether any completed stay row exists.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

impl Default for StayWindow {
    fn default() -> Self {
        StayWindow::empty()
    }
}

/// Computes the stay window from the Stay section's rows.
///
/// Rows missing either date are ignored. The earliest `from` and the
/// latest `to` may come from different rows.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use lido_core::rows::{find_min_max_dates, Row};
///
/// let mut early = Row::new();
/// early.from = NaiveDate::from_ymd_opt(2021, 8, 1);
/// early.to = NaiveDate::from_ymd_opt(2021, 8, 9);
/// let mut late = Row::new();
/// late.from = NaiveDate::from_ymd_opt(2021, 8, 13);
/// late.to = NaiveDate::from_ymd_opt(2021, 8, 20);
///
/// let window = find_min_max_dates(&[late, early]);
/// assert_eq!(window.from, NaiveDate::from_ymd_opt(2021, 8, 1));
/// assert_eq!(window.to, NaiveDate::from_ymd_opt(2021, 8, 20));
/// assert_eq!(window.sorted.len(), 2);
/// ```
pub fn find_min_max_dates(stay_rows: &[Row]) -> StayWindow {
    let mut sorted: Vec<Row> = stay_rows
        .iter()
        .filter(|row| row.from.is_some() && row.to.is_some())
        .cloned()
        .collect();

    if sorted.is_empty() {
        return StayWindow::empty();
    }

    sorted.sort_by_key(|row| row.from);

    let from = sorted.iter().filter_map(|row| row.from).min();
    let to = sorted.iter().filter_map(|row| row.to).max();

    StayWindow { from, to, sorted }
}

// =============================================================================
// Unit Tests
// =============================================================================
