//! Typed column sort engine.
//!
//! Every displayed [`Column`] declares a [`ColumnKind`], and the comparator
//! always compares the field's native value: numbers as numbers, text as
//! case-folded text, booleans as `false < true`, and difficulty by its
//! declared order. Formatted cell text is never compared, so `10` sorts
//! after `2`.
//!
//! Sorting is stable. Repeated header clicks are modelled by
//! [`SortState`]: the first click on a column sorts ascending, clicking
//! the same column again flips the direction, and clicking a different
//! column starts over at ascending. Because the sort is stable, a
//! sequence of clicks yields a multi-column ordering with the most
//! recent click as the primary key.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::QueryError;
use crate::models::{Difficulty, HikeRecord};

/// Value type a column sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
    Boolean,
    EnumOrdered,
}

/// A column of the hike table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Completed,
    Name,
    Distance,
    ElevationGain,
    MaxElevation,
    Prominence,
    Difficulty,
    Area,
    Travel,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Completed,
        Column::Name,
        Column::Distance,
        Column::ElevationGain,
        Column::MaxElevation,
        Column::Prominence,
        Column::Difficulty,
        Column::Area,
        Column::Travel,
    ];

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Completed => ColumnKind::Boolean,
            Column::Name | Column::Area => ColumnKind::Text,
            Column::Distance
            | Column::ElevationGain
            | Column::MaxElevation
            | Column::Prominence
            | Column::Travel => ColumnKind::Numeric,
            Column::Difficulty => ColumnKind::EnumOrdered,
        }
    }

    /// Identifier accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Column::Completed => "complete",
            Column::Name => "name",
            Column::Distance => "distance",
            Column::ElevationGain => "gain",
            Column::MaxElevation => "max-elevation",
            Column::Prominence => "prominence",
            Column::Difficulty => "difficulty",
            Column::Area => "area",
            Column::Travel => "travel",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Completed => "✔",
            Column::Name => "Name",
            Column::Distance => "Distance",
            Column::ElevationGain => "Elev. Gain",
            Column::MaxElevation => "Max Elev.",
            Column::Prominence => "Prominence",
            Column::Difficulty => "Difficulty",
            Column::Area => "Area",
            Column::Travel => "From Home",
        }
    }

    fn sort_key(self, hike: &HikeRecord) -> SortKey<'_> {
        match self {
            Column::Completed => SortKey::Boolean(hike.completed),
            Column::Name => SortKey::Text(&hike.name),
            Column::Distance => SortKey::Numeric(Some(hike.total_distance_miles)),
            Column::ElevationGain => SortKey::Numeric(Some(hike.elevation_gain_feet)),
            Column::MaxElevation => SortKey::Numeric(Some(hike.max_elevation_feet)),
            Column::Prominence => SortKey::Numeric(hike.prominence()),
            Column::Difficulty => SortKey::Ordinal(hike.difficulty_rating),
            Column::Area => SortKey::Text(&hike.general_area),
            Column::Travel => SortKey::Numeric(Some(hike.travel_hours_from_home)),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "complete" | "completed" => Ok(Column::Completed),
            "name" => Ok(Column::Name),
            "distance" | "total-distance" => Ok(Column::Distance),
            "gain" | "elev-gain" | "elevation-gain" => Ok(Column::ElevationGain),
            "max-elevation" | "max-elev" => Ok(Column::MaxElevation),
            "prominence" => Ok(Column::Prominence),
            "difficulty" | "diff-rating" => Ok(Column::Difficulty),
            "area" | "gen-area" => Ok(Column::Area),
            "travel" | "dist-from-home" => Ok(Column::Travel),
            _ => Err(QueryError::InvalidOption {
                option: "sort column",
                input: s.to_string(),
                expected: "complete, name, distance, gain, max-elevation, prominence, difficulty, area, travel",
            }),
        }
    }
}

/// A column's native value for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SortKey<'a> {
    /// `None` is the not-applicable sentinel and orders first.
    Numeric(Option<f64>),
    Text(&'a str),
    Boolean(bool),
    Ordinal(Difficulty),
}

impl SortKey<'_> {
    #[cfg(test)]
    fn kind(&self) -> ColumnKind {
        match self {
            SortKey::Numeric(_) => ColumnKind::Numeric,
            SortKey::Text(_) => ColumnKind::Text,
            SortKey::Boolean(_) => ColumnKind::Boolean,
            SortKey::Ordinal(_) => ColumnKind::EnumOrdered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Compare two records by `column` in ascending order.
pub fn compare(column: Column, a: &HikeRecord, b: &HikeRecord) -> Ordering {
    match (column.sort_key(a), column.sort_key(b)) {
        (SortKey::Numeric(x), SortKey::Numeric(y)) => compare_numeric(x, y),
        (SortKey::Text(x), SortKey::Text(y)) => compare_text(x, y),
        (SortKey::Boolean(x), SortKey::Boolean(y)) => x.cmp(&y),
        (SortKey::Ordinal(x), SortKey::Ordinal(y)) => x.cmp(&y),
        // A column always yields the same key variant.
        _ => Ordering::Equal,
    }
}

fn compare_numeric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Return a stably sorted copy of `records`.
pub fn sort_records(
    records: &[HikeRecord],
    column: Column,
    direction: SortDirection,
) -> Vec<HikeRecord> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare(column, a, b)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare(column, b, a)),
    }
    sorted
}

/// Header-click state for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<(Column, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click on `column` and return the direction to apply.
    pub fn click(&mut self, column: Column) -> SortDirection {
        let direction = match self.active {
            Some((current, direction)) if current == column => direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.active = Some((column, direction));
        direction
    }

    pub fn current(&self) -> Option<(Column, SortDirection)> {
        self.active
    }
}

/// The rows currently on display plus their sort state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    rows: Vec<HikeRecord>,
    sort: SortState,
}

impl TableView {
    pub fn new(rows: Vec<HikeRecord>) -> Self {
        Self {
            rows,
            sort: SortState::new(),
        }
    }

    /// Click a column header: re-sort the displayed rows.
    pub fn click(&mut self, column: Column) -> SortDirection {
        let direction = self.sort.click(column);
        self.rows = sort_records(&self.rows, column, direction);
        debug!(column = column.key(), %direction, rows = self.rows.len(), "table re-sorted");
        direction
    }

    pub fn rows(&self) -> &[HikeRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<HikeRecord> {
        self.rows
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hike(id: i64, name: &str, distance: f64) -> HikeRecord {
        HikeRecord {
            id,
            name: name.to_string(),
            total_distance_miles: distance,
            elevation_gain_feet: 1000.0,
            max_elevation_feet: 4000.0,
            prominence_feet: 0.0,
            difficulty_rating: Difficulty::Moderate,
            general_area: "Stevens Pass".to_string(),
            travel_hours_from_home: 2.0,
            completed: false,
            notes: String::new(),
        }
    }

    fn ids(records: &[HikeRecord]) -> Vec<i64> {
        records.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_numeric_sort_not_lexicographic() {
        let records = vec![hike(1, "A", 2.0), hike(2, "B", 10.0), hike(3, "C", 3.0)];
        let sorted = sort_records(&records, Column::Distance, SortDirection::Ascending);
        let distances: Vec<f64> = sorted.iter().map(|h| h.total_distance_miles).collect();
        assert_eq!(distances, vec![2.0, 3.0, 10.0]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![
            hike(1, "First", 5.0),
            hike(2, "Short", 1.0),
            hike(3, "Second", 5.0),
            hike(4, "Third", 5.0),
        ];
        let asc = sort_records(&records, Column::Distance, SortDirection::Ascending);
        assert_eq!(ids(&asc), vec![2, 1, 3, 4]);
        let desc = sort_records(&records, Column::Distance, SortDirection::Descending);
        assert_eq!(ids(&desc), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_second_click_reverses() {
        let mut view = TableView::new(vec![
            hike(1, "Colchuck Lake", 8.0),
            hike(2, "Annette Lake", 7.5),
            hike(3, "Blanca Lake", 7.9),
        ]);
        assert_eq!(view.click(Column::Name), SortDirection::Ascending);
        let first: Vec<i64> = ids(view.rows());
        assert_eq!(first, vec![2, 3, 1]);

        assert_eq!(view.click(Column::Name), SortDirection::Descending);
        let mut reversed = first.clone();
        reversed.reverse();
        assert_eq!(ids(view.rows()), reversed);
    }

    #[test]
    fn test_other_column_resets_to_ascending() {
        let mut state = SortState::new();
        assert_eq!(state.click(Column::Distance), SortDirection::Ascending);
        assert_eq!(state.click(Column::Distance), SortDirection::Descending);
        assert_eq!(state.click(Column::Name), SortDirection::Ascending);
        assert_eq!(state.click(Column::Distance), SortDirection::Ascending);
        assert_eq!(
            state.current(),
            Some((Column::Distance, SortDirection::Ascending))
        );
    }

    #[test]
    fn test_clicks_compose_into_multi_column_order() {
        let mut view = TableView::new(vec![
            hike(1, "Zeta", 5.0),
            hike(2, "Alpha", 9.0),
            hike(3, "Beta", 5.0),
            hike(4, "Gamma", 9.0),
        ]);
        view.click(Column::Name);
        view.click(Column::Distance);
        // Distance is primary; name order survives within equal distances.
        assert_eq!(ids(view.rows()), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_difficulty_sorts_by_declared_order() {
        let mut records = vec![hike(1, "a", 1.0), hike(2, "b", 1.0), hike(3, "c", 1.0), hike(4, "d", 1.0)];
        records[0].difficulty_rating = Difficulty::Moderate;
        records[1].difficulty_rating = Difficulty::Expert;
        records[2].difficulty_rating = Difficulty::Easy;
        records[3].difficulty_rating = Difficulty::Hard;
        let sorted = sort_records(&records, Column::Difficulty, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_prominence_sentinel_sorts_first() {
        let mut records = vec![hike(1, "a", 1.0), hike(2, "b", 1.0), hike(3, "c", 1.0)];
        records[0].prominence_feet = 2400.0;
        records[1].prominence_feet = 0.0;
        records[2].prominence_feet = 900.0;
        let sorted = sort_records(&records, Column::Prominence, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let records = vec![hike(1, "bandera", 1.0), hike(2, "Alpine", 1.0), hike(3, "Cutthroat", 1.0)];
        let sorted = sort_records(&records, Column::Name, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn test_completed_sorts_false_first() {
        let mut records = vec![hike(1, "a", 1.0), hike(2, "b", 1.0)];
        records[0].completed = true;
        let sorted = sort_records(&records, Column::Completed, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn test_declared_kind_matches_key() {
        let sample = hike(1, "a", 1.0);
        for column in Column::ALL {
            assert_eq!(column.sort_key(&sample).kind(), column.kind(), "{}", column);
        }
    }

    #[test]
    fn test_column_parse_aliases() {
        assert_eq!("elev_gain".parse::<Column>().unwrap(), Column::ElevationGain);
        assert_eq!("MAX-ELEVATION".parse::<Column>().unwrap(), Column::MaxElevation);
        assert_eq!("dist_from_home".parse::<Column>().unwrap(), Column::Travel);
        for column in Column::ALL {
            assert_eq!(column.key().parse::<Column>().unwrap(), column);
        }
        assert!("elevation".parse::<Column>().is_err());
    }
}
