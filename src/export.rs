//! Export the catalog as JSON.
//!
//! The output is the array format `summit import` reads, so a catalog can
//! be moved between databases.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::sqlite_source;

/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub async fn run_export(config: &Config, output: Option<&Path>) -> Result<()> {
    let catalog = sqlite_source::load_catalog(config).await?;
    let json = serde_json::to_string_pretty(catalog.records())?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            eprintln!(
                "Exported {} hikes to {}",
                catalog.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
