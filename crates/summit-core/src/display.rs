//! Display mapping from records to table cells and detail lines.
//!
//! This is where the prominence sentinel becomes `"N/A"`; nothing
//! downstream should print a raw `0 ft` for a non-summit.

use crate::models::HikeRecord;
use crate::sort::Column;

pub const NOT_APPLICABLE: &str = "N/A";
pub const COMPLETED_MARK: &str = "✔";

/// Format a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

pub fn format_prominence(hike: &HikeRecord) -> String {
    match hike.prominence() {
        Some(feet) => format!("{} ft", format_number(feet)),
        None => NOT_APPLICABLE.to_string(),
    }
}

pub fn format_hours(hours: f64) -> String {
    if hours == 1.0 {
        "1 hour".to_string()
    } else {
        format!("{} hours", format_number(hours))
    }
}

/// The text shown for `hike` under `column`.
pub fn cell(column: Column, hike: &HikeRecord) -> String {
    match column {
        Column::Completed => {
            if hike.completed {
                COMPLETED_MARK.to_string()
            } else {
                String::new()
            }
        }
        Column::Name => hike.name.clone(),
        Column::Distance => format!("{} miles", format_number(hike.total_distance_miles)),
        Column::ElevationGain => format!("{} ft", format_number(hike.elevation_gain_feet)),
        Column::MaxElevation => format!("{} ft", format_number(hike.max_elevation_feet)),
        Column::Prominence => format_prominence(hike),
        Column::Difficulty => hike.difficulty_rating.to_string(),
        Column::Area => hike.general_area.clone(),
        Column::Travel => format_hours(hike.travel_hours_from_home),
    }
}

/// All cells of one table row, in [`Column::ALL`] order.
pub fn row(hike: &HikeRecord) -> Vec<String> {
    Column::ALL.iter().map(|c| cell(*c, hike)).collect()
}

/// Labelled lines for the single-hike detail view.
pub fn detail_lines(hike: &HikeRecord, home_label: &str) -> Vec<(String, String)> {
    let notes = if hike.notes.trim().is_empty() {
        "(none)".to_string()
    } else {
        hike.notes.clone()
    };
    vec![
        ("Name".to_string(), hike.name.clone()),
        ("Area".to_string(), hike.general_area.clone()),
        (
            "From Home".to_string(),
            format!(
                "{} from {}",
                format_hours(hike.travel_hours_from_home),
                home_label
            ),
        ),
        (
            "Total Distance".to_string(),
            cell(Column::Distance, hike),
        ),
        (
            "Elevation Gain".to_string(),
            cell(Column::ElevationGain, hike),
        ),
        ("Max Elevation".to_string(), cell(Column::MaxElevation, hike)),
        ("Prominence".to_string(), format_prominence(hike)),
        (
            "Difficulty Rating".to_string(),
            hike.difficulty_rating.to_string(),
        ),
        (
            "Completed".to_string(),
            if hike.completed { "Yes" } else { "No" }.to_string(),
        ),
        ("Notes".to_string(), notes),
    ]
}
