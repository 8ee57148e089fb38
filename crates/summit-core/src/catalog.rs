//! The hike catalog: an owned, read-only snapshot loaded once at startup.
//!
//! A [`Catalog`] is built from a [`HikeSource`] (or directly from records
//! in tests), validated against the record invariants, and then only ever
//! read. Views hand out fresh vectors so callers can sort or filter them
//! without touching the snapshot.

use std::collections::HashSet;

use tracing::info;

use crate::error::CatalogError;
use crate::models::HikeRecord;
use crate::source::HikeSource;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<HikeRecord>,
}

impl Catalog {
    /// Validate `records` and wrap them. Order is preserved.
    pub fn new(records: Vec<HikeRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            validate_record(record)?;
        }
        Ok(Self { records })
    }

    /// Read every hike row from `source` and build the snapshot.
    ///
    /// Any source failure is reported as
    /// [`CatalogError::SourceUnavailable`].
    pub async fn load<S: HikeSource + ?Sized>(source: &S) -> Result<Self, CatalogError> {
        let records = source
            .load_all()
            .await
            .map_err(CatalogError::SourceUnavailable)?;
        let catalog = Self::new(records)?;
        info!(
            source = source.name(),
            hikes = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[HikeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&HikeRecord> {
        self.records.iter().find(|h| h.id == id)
    }

    /// Exact, case-insensitive name lookup. First match in catalog order.
    pub fn find_by_name(&self, name: &str) -> Option<&HikeRecord> {
        let wanted = name.trim().to_lowercase();
        self.records
            .iter()
            .find(|h| h.name.to_lowercase() == wanted)
    }

    /// Resolve a user-supplied reference: a numeric id, else a name.
    pub fn resolve(&self, reference: &str) -> Result<&HikeRecord, CatalogError> {
        let by_id = reference
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|id| self.get(id));
        by_id
            .or_else(|| self.find_by_name(reference))
            .ok_or_else(|| CatalogError::NotFound(reference.to_string()))
    }

    /// Every hike, in catalog order.
    pub fn all_hikes(&self) -> Vec<HikeRecord> {
        self.records.clone()
    }

    /// Hikes marked completed, in catalog order.
    pub fn completed_hikes(&self) -> Vec<HikeRecord> {
        self.records.iter().filter(|h| h.completed).cloned().collect()
    }
}

fn validate_record(record: &HikeRecord) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecord {
        id: record.id,
        reason,
    };

    if record.name.trim().is_empty() {
        return Err(invalid("name must not be empty".to_string()));
    }

    let metrics = [
        ("total_distance_miles", record.total_distance_miles),
        ("elevation_gain_feet", record.elevation_gain_feet),
        ("max_elevation_feet", record.max_elevation_feet),
        ("prominence_feet", record.prominence_feet),
    ];
    for (field, value) in metrics {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!("{} must be a non-negative number", field)));
        }
    }

    if !record.travel_hours_from_home.is_finite() || record.travel_hours_from_home <= 0.0 {
        return Err(invalid(
            "travel_hours_from_home must be a positive number".to_string(),
        ));
    }

    Ok(())
}
