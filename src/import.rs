//! Seed the `hikes` table from a JSON file.
//!
//! The file holds a JSON array of hike records (the same shape `summit
//! export` writes). Records are validated as a whole catalog before any
//! row is written, then upserted by id inside one transaction.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use summit_core::catalog::Catalog;
use summit_core::models::HikeRecord;

use crate::config::Config;
use crate::db;

/// Parse and validate hike records from JSON text.
pub fn parse_hikes(json: &str) -> Result<Vec<HikeRecord>> {
    let records: Vec<HikeRecord> =
        serde_json::from_str(json).context("Failed to parse hikes JSON")?;
    // Validates ids and record invariants; the snapshot itself is discarded.
    Catalog::new(records.clone())?;
    Ok(records)
}

pub async fn run_import(config: &Config, path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hikes file: {}", path.display()))?;
    let records = parse_hikes(&json)?;

    let pool = db::connect(config).await?;
    let mut tx = pool.begin().await?;

    for hike in &records {
        sqlx::query(
            r#"
            INSERT INTO hikes (id, name, total_distance_miles, elevation_gain_feet,
                               max_elevation_feet, prominence_feet, difficulty_rating,
                               general_area, travel_hours_from_home, completed, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                total_distance_miles = excluded.total_distance_miles,
                elevation_gain_feet = excluded.elevation_gain_feet,
                max_elevation_feet = excluded.max_elevation_feet,
                prominence_feet = excluded.prominence_feet,
                difficulty_rating = excluded.difficulty_rating,
                general_area = excluded.general_area,
                travel_hours_from_home = excluded.travel_hours_from_home,
                completed = excluded.completed,
                notes = excluded.notes
            "#,
        )
        .bind(hike.id)
        .bind(&hike.name)
        .bind(hike.total_distance_miles)
        .bind(hike.elevation_gain_feet)
        .bind(hike.max_elevation_feet)
        .bind(hike.prominence_feet)
        .bind(hike.difficulty_rating.as_str())
        .bind(&hike.general_area)
        .bind(hike.travel_hours_from_home)
        .bind(hike.completed)
        .bind(&hike.notes)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to import hike {} (run `summit init` first?)", hike.id))?;
    }

    tx.commit().await?;
    pool.close().await;

    info!(file = %path.display(), hikes = records.len(), "import complete");
    println!("imported hikes: {}", records.len());
    Ok(())
}
