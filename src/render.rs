//! Terminal rendering for hike tables.

use anyhow::Result;
use summit_core::display;
use summit_core::models::HikeRecord;
use summit_core::sort::{Column, ColumnKind, SortState};

/// Print `rows` as an aligned table with a header line.
pub fn print_table(rows: &[HikeRecord], sort: SortState) {
    let cells: Vec<Vec<String>> = rows.iter().map(display::row).collect();

    let widths: Vec<usize> = Column::ALL
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.header().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = Column::ALL
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(column.header(), *width, column.kind()))
        .collect();
    println!("{}", header.join("  ").trim_end());
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(Column::ALL.iter().zip(&widths))
            .map(|(cell, (column, width))| pad(cell, *width, column.kind()))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }

    println!();
    match sort.current() {
        Some((column, direction)) => println!(
            "{} hike{} (sorted by {}, {})",
            rows.len(),
            if rows.len() == 1 { "" } else { "s" },
            column,
            direction
        ),
        None => println!("{} hike{}", rows.len(), if rows.len() == 1 { "" } else { "s" }),
    }
}

/// Print `rows` as a JSON array.
pub fn print_json(rows: &[HikeRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn pad(text: &str, width: usize, kind: ColumnKind) -> String {
    let fill = width.saturating_sub(text.chars().count());
    match kind {
        ColumnKind::Numeric => format!("{}{}", " ".repeat(fill), text),
        ColumnKind::Text | ColumnKind::Boolean | ColumnKind::EnumOrdered => {
            format!("{}{}", text, " ".repeat(fill))
        }
    }
}
