//! Filter criteria and the input boundary that produces them.
//!
//! [`FilterCriteria`] is what the filter engine consumes: every numeric
//! bound in it is already a finite number. Raw user text enters through
//! [`CriteriaInput::into_criteria`], which is the only place numeric input
//! is parsed and rejected.

use tracing::warn;

use crate::error::QueryError;
use crate::models::{Comparator, Difficulty, TravelTier};

/// A comparator paired with its validated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBound {
    pub comparator: Comparator,
    pub value: f64,
}

impl NumericBound {
    pub fn at_least(value: f64) -> Self {
        Self {
            comparator: Comparator::GreaterOrEqual,
            value,
        }
    }

    pub fn at_most(value: f64) -> Self {
        Self {
            comparator: Comparator::LessOrEqual,
            value,
        }
    }

    pub fn admits(&self, field_value: f64) -> bool {
        self.comparator.admits(self.value, field_value)
    }
}

/// One search invocation's worth of criteria. Unset fields are vacuously
/// true for every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, area and notes.
    pub keyword: Option<String>,
    pub distance: Option<NumericBound>,
    pub elevation_gain: Option<NumericBound>,
    pub max_elevation: Option<NumericBound>,
    /// Inclusive upper bound on [`Difficulty`].
    pub max_difficulty: Option<Difficulty>,
    /// Inclusive upper bound on travel hours.
    pub max_travel_tier: Option<TravelTier>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn distance(mut self, bound: NumericBound) -> Self {
        self.distance = Some(bound);
        self
    }

    pub fn elevation_gain(mut self, bound: NumericBound) -> Self {
        self.elevation_gain = Some(bound);
        self
    }

    pub fn max_elevation(mut self, bound: NumericBound) -> Self {
        self.max_elevation = Some(bound);
        self
    }

    pub fn max_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.max_difficulty = Some(difficulty);
        self
    }

    pub fn max_travel_tier(mut self, tier: TravelTier) -> Self {
        self.max_travel_tier = Some(tier);
        self
    }

    /// Number of criteria that were actually supplied.
    pub fn active_count(&self) -> usize {
        [
            self.keyword.is_some(),
            self.distance.is_some(),
            self.elevation_gain.is_some(),
            self.max_elevation.is_some(),
            self.max_difficulty.is_some(),
            self.max_travel_tier.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Length caps applied to raw text at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub keyword_max_chars: usize,
    pub distance_max_chars: usize,
    pub elevation_max_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            keyword_max_chars: 24,
            distance_max_chars: 4,
            elevation_max_chars: 5,
        }
    }
}

/// Unvalidated criteria as typed by the user.
///
/// Range fields take `CMP:VALUE` (`ge:5`, `le:3000`) or the compact
/// `>=5` / `<=3000` form.
#[derive(Debug, Clone, Default)]
pub struct CriteriaInput {
    pub keyword: Option<String>,
    pub distance: Option<String>,
    pub elevation_gain: Option<String>,
    pub max_elevation: Option<String>,
    pub max_difficulty: Option<String>,
    pub max_travel_tier: Option<String>,
}

impl CriteriaInput {
    /// Validate every supplied field and build [`FilterCriteria`].
    ///
    /// An all-empty input yields empty criteria; the filter engine is the
    /// one that reports [`QueryError::EmptyQuery`].
    pub fn into_criteria(self, limits: &InputLimits) -> Result<FilterCriteria, QueryError> {
        let keyword = self
            .keyword
            .as_deref()
            .and_then(|raw| normalize_keyword(raw, limits.keyword_max_chars));

        let distance = self
            .distance
            .as_deref()
            .map(|raw| parse_bound("distance", raw, limits.distance_max_chars))
            .transpose()?;
        let elevation_gain = self
            .elevation_gain
            .as_deref()
            .map(|raw| parse_bound("elevation gain", raw, limits.elevation_max_chars))
            .transpose()?;
        let max_elevation = self
            .max_elevation
            .as_deref()
            .map(|raw| parse_bound("max elevation", raw, limits.elevation_max_chars))
            .transpose()?;

        let max_difficulty = self
            .max_difficulty
            .as_deref()
            .map(str::parse::<Difficulty>)
            .transpose()?;
        let max_travel_tier = self
            .max_travel_tier
            .as_deref()
            .map(str::parse::<TravelTier>)
            .transpose()?;

        Ok(FilterCriteria {
            keyword,
            distance,
            elevation_gain,
            max_elevation,
            max_difficulty,
            max_travel_tier,
        })
    }
}

fn normalize_keyword(raw: &str, max_chars: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() > max_chars {
        let truncated: String = trimmed.chars().take(max_chars).collect();
        warn!(
            keyword = trimmed,
            max_chars, "keyword too long, truncated to '{}'", truncated
        );
        return Some(truncated);
    }
    Some(trimmed.to_string())
}

/// Parse a `CMP:VALUE` range expression into a [`NumericBound`].
pub fn parse_bound(
    field: &'static str,
    raw: &str,
    max_chars: usize,
) -> Result<NumericBound, QueryError> {
    let raw = raw.trim();
    let (cmp, value) = if let Some((cmp, value)) = raw.split_once(':') {
        (cmp, value)
    } else if raw.starts_with(">=") || raw.starts_with("<=") {
        raw.split_at(2)
    } else {
        return Err(QueryError::InvalidOption {
            option: "comparator",
            input: raw.to_string(),
            expected: "ge:N, le:N, >=N, <=N",
        });
    };

    let comparator: Comparator = cmp.parse()?;
    let value = parse_numeric(field, value.trim(), max_chars)?;
    Ok(NumericBound { comparator, value })
}

fn parse_numeric(field: &'static str, input: &str, max_chars: usize) -> Result<f64, QueryError> {
    let reject = |reason: String| QueryError::InvalidNumericInput {
        field,
        input: input.to_string(),
        reason,
    };

    if input.is_empty() {
        return Err(reject("a value is required".to_string()));
    }
    if input.chars().count() > max_chars {
        return Err(reject(format!("longer than {} characters", max_chars)));
    }
    let value: f64 = input
        .parse()
        .map_err(|_| reject("not a number".to_string()))?;
    if !value.is_finite() {
        return Err(reject("not a finite number".to_string()));
    }
    if value < 0.0 {
        return Err(reject("must not be negative".to_string()));
    }
    Ok(value)
}
