//! Error taxonomy for catalog loading and query evaluation.

use thiserror::Error;

/// Errors raised while building a query from user input or evaluating it.
///
/// An empty result set is not an error; see
/// [`QueryOutcome::NoMatches`](crate::filter::QueryOutcome::NoMatches).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// No criterion was supplied. The caller should prompt for at least one.
    #[error("Please enter at least one search parameter.")]
    EmptyQuery,

    /// A comparator's paired value did not parse as a usable number.
    #[error("invalid numeric input for {field}: '{input}' ({reason})")]
    InvalidNumericInput {
        field: &'static str,
        input: String,
        reason: String,
    },

    /// A non-numeric option (comparator, difficulty, tier, column) was not recognised.
    #[error("invalid {option}: '{input}'. Expected one of: {expected}")]
    InvalidOption {
        option: &'static str,
        input: String,
        expected: &'static str,
    },
}

/// Errors raised while loading or validating the hike catalog.
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("hike data source unavailable: {0}")]
    SourceUnavailable(#[source] anyhow::Error),

    #[error("duplicate hike id {0} in catalog")]
    DuplicateId(i64),

    #[error("invalid hike record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },

    #[error("hike not found: {0}")]
    NotFound(String),
}
