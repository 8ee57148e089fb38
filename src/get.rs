//! Hike detail view.
//!
//! Looks a hike up by id or by exact (case-insensitive) name and prints
//! every field, with the prominence sentinel shown as `N/A`.

use anyhow::Result;

use summit_core::display;

use crate::config::Config;
use crate::sqlite_source;

/// CLI entry point for `summit show`.
pub async fn run_show(config: &Config, reference: &str, json: bool) -> Result<()> {
    let catalog = sqlite_source::load_catalog(config).await?;
    let hike = catalog.resolve(reference)?;

    if json {
        println!("{}", serde_json::to_string_pretty(hike)?);
        return Ok(());
    }

    println!("--- Hike {} ---", hike.id);
    for (label, value) in display::detail_lines(hike, &config.home.label) {
        println!("{:<18} {}", format!("{}:", label), value);
    }
    Ok(())
}
