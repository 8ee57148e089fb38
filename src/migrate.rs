use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::db;

pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hikes (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            total_distance_miles REAL NOT NULL,
            elevation_gain_feet REAL NOT NULL,
            max_elevation_feet REAL NOT NULL,
            prominence_feet REAL NOT NULL DEFAULT 0,
            difficulty_rating TEXT NOT NULL,
            general_area TEXT NOT NULL,
            travel_hours_from_home REAL NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            notes TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(&pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_hikes_name ON hikes(name)")
        .execute(&pool)
        .await?;

    info!(db = %config.db.path.display(), "schema ready");

    pool.close().await;
    Ok(())
}
