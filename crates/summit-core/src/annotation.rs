//! Notes and completion edits.
//!
//! Edits are validated against the catalog but never written anywhere:
//! the catalog is a read-only snapshot and there is no write path to the
//! data source. [`stage_annotation`] reports that explicitly instead of
//! claiming a save.

use tracing::warn;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::HikeRecord;

/// A user's edit to one hike's notes and/or completion flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Annotation {
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

impl Annotation {
    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.completed.is_none()
    }
}

/// What happened to a staged annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The edit was accepted but not persisted.
    NotPersisted {
        hike_id: i64,
        hike_name: String,
        /// The record as it would look with the edit applied.
        preview: HikeRecord,
    },
    /// Nothing to save.
    Unchanged { hike_id: i64 },
}

/// Validate `annotation` for the hike referenced by `reference`.
pub fn stage_annotation(
    catalog: &Catalog,
    reference: &str,
    annotation: &Annotation,
) -> Result<SaveOutcome, CatalogError> {
    let hike = catalog.resolve(reference)?;
    if annotation.is_empty() {
        return Ok(SaveOutcome::Unchanged { hike_id: hike.id });
    }

    let mut preview = hike.clone();
    if let Some(notes) = &annotation.notes {
        preview.notes = notes.clone();
    }
    if let Some(completed) = annotation.completed {
        preview.completed = completed;
    }

    warn!(
        hike_id = hike.id,
        "notes and completion edits are not persisted"
    );
    Ok(SaveOutcome::NotPersisted {
        hike_id: hike.id,
        hike_name: hike.name.clone(),
        preview,
    })
}
