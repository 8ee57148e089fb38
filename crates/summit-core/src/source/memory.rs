//! In-memory [`HikeSource`] for tests and embedding.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::HikeRecord;

use super::HikeSource;

/// Serves a fixed list of records, or always fails when built with
/// [`InMemorySource::unavailable`].
pub struct InMemorySource {
    records: Vec<HikeRecord>,
    failure: Option<String>,
}

impl InMemorySource {
    pub fn new(records: Vec<HikeRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl HikeSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load_all(&self) -> Result<Vec<HikeRecord>> {
        match &self.failure {
            Some(reason) => Err(anyhow!("{}", reason)),
            None => Ok(self.records.clone()),
        }
    }
}
