//! SQLite-backed [`HikeSource`].
//!
//! Reads the `hikes` table created by [`migrate`](crate::migrate) and
//! maps each row onto a [`HikeRecord`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use summit_core::catalog::Catalog;
use summit_core::error::CatalogError;
use summit_core::models::{Difficulty, HikeRecord};
use summit_core::source::HikeSource;

use crate::config::Config;
use crate::db;

pub struct SqliteSource {
    pool: SqlitePool,
}

impl SqliteSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl HikeSource for SqliteSource {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn load_all(&self) -> Result<Vec<HikeRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, total_distance_miles, elevation_gain_feet,
                   max_elevation_feet, prominence_feet, difficulty_rating,
                   general_area, travel_hours_from_home, completed, notes
            FROM hikes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to read hikes table")?;

        rows.iter().map(row_to_hike).collect()
    }
}

fn row_to_hike(row: &SqliteRow) -> Result<HikeRecord> {
    let id: i64 = row.try_get("id")?;
    let difficulty: String = row.try_get("difficulty_rating")?;
    let difficulty_rating: Difficulty = difficulty
        .parse()
        .with_context(|| format!("hike {} has an unknown difficulty rating", id))?;
    let completed: i64 = row.try_get("completed")?;

    Ok(HikeRecord {
        id,
        name: row.try_get("name")?,
        total_distance_miles: row.try_get("total_distance_miles")?,
        elevation_gain_feet: row.try_get("elevation_gain_feet")?,
        max_elevation_feet: row.try_get("max_elevation_feet")?,
        prominence_feet: row.try_get("prominence_feet")?,
        difficulty_rating,
        general_area: row.try_get("general_area")?,
        travel_hours_from_home: row.try_get("travel_hours_from_home")?,
        completed: completed != 0,
        notes: row.try_get("notes")?,
    })
}

/// Open the configured database and load the catalog snapshot.
///
/// Every failure along the way is reported as
/// [`CatalogError::SourceUnavailable`] (or a validation error), and the
/// caller is expected to stop.
pub async fn load_catalog(config: &Config) -> Result<Catalog, CatalogError> {
    let pool = db::connect_existing(config)
        .await
        .map_err(CatalogError::SourceUnavailable)?;
    let source = SqliteSource::new(pool);
    let catalog = Catalog::load(&source).await;
    source.close().await;
    catalog
}
