//! Data-access abstraction for the hike catalog.
//!
//! The [`HikeSource`] trait is the one boundary between the core and the
//! backing store. It has a single read operation: hand back every hike
//! row. Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::HikeRecord;

/// Something that can produce the full list of hike rows.
#[async_trait]
pub trait HikeSource: Send + Sync {
    /// Short label used in logs (`"sqlite"`, `"memory"`).
    fn name(&self) -> &str;

    /// Read all hike rows, in a stable order.
    async fn load_all(&self) -> Result<Vec<HikeRecord>>;
}
