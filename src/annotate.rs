//! The `summit annotate` command.
//!
//! Notes and completion edits are checked against the catalog and echoed
//! back, but nothing is written to the database.

use anyhow::Result;

use summit_core::annotation::{stage_annotation, Annotation, SaveOutcome};

use crate::config::Config;
use crate::sqlite_source;

pub async fn run_annotate(config: &Config, reference: &str, annotation: Annotation) -> Result<()> {
    let catalog = sqlite_source::load_catalog(config).await?;

    match stage_annotation(&catalog, reference, &annotation)? {
        SaveOutcome::Unchanged { hike_id } => {
            println!("Nothing to save for hike {}.", hike_id);
        }
        SaveOutcome::NotPersisted {
            hike_id,
            hike_name,
            preview,
        } => {
            println!("Hike {}: {}", hike_id, hike_name);
            if annotation.completed.is_some() {
                println!(
                    "  completed: {}",
                    if preview.completed { "yes" } else { "no" }
                );
            }
            if annotation.notes.is_some() {
                println!("  notes:     {}", preview.notes);
            }
            println!("Notes and completion status were NOT saved: persistence is not implemented.");
        }
    }
    Ok(())
}
