//! Core data models used throughout Summit Register.
//!
//! A [`HikeRecord`] is one row of the catalog. The small enums here carry
//! the orderings the filter engine relies on: [`Difficulty`] is totally
//! ordered `Easy < Moderate < Hard < Expert`, and [`TravelTier`] maps each
//! travel bucket to an inclusive upper bound in hours.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// One trail in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeRecord {
    /// Stable identifier assigned by the data source.
    pub id: i64,
    pub name: String,
    pub total_distance_miles: f64,
    pub elevation_gain_feet: f64,
    pub max_elevation_feet: f64,
    /// `0` means "not a summit"; see [`HikeRecord::prominence`].
    pub prominence_feet: f64,
    pub difficulty_rating: Difficulty,
    pub general_area: String,
    pub travel_hours_from_home: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
}

impl HikeRecord {
    /// Prominence in feet, or `None` when the sentinel `0` marks the hike
    /// as not applicable.
    pub fn prominence(&self) -> Option<f64> {
        if self.prominence_feet == 0.0 {
            None
        } else {
            Some(self.prominence_feet)
        }
    }
}

/// Difficulty rating, declared in ascending order so the derived `Ord`
/// is the tiering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "easy", alias = "EASY")]
    Easy,
    #[serde(alias = "moderate", alias = "MODERATE")]
    Moderate,
    #[serde(alias = "hard", alias = "HARD")]
    Hard,
    #[serde(alias = "expert", alias = "EXPERT")]
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Position in the ordering, `0` for `Easy`.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(QueryError::InvalidOption {
                option: "difficulty",
                input: s.to_string(),
                expected: "easy, moderate, hard, expert",
            }),
        }
    }
}

/// Capped travel-time bucket, inclusive of its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TravelTier {
    OneHour,
    TwoHours,
    ThreeHours,
    FourHours,
}

impl TravelTier {
    pub const ALL: [TravelTier; 4] = [
        TravelTier::OneHour,
        TravelTier::TwoHours,
        TravelTier::ThreeHours,
        TravelTier::FourHours,
    ];

    /// Inclusive upper bound in hours.
    pub fn bound_hours(self) -> f64 {
        match self {
            TravelTier::OneHour => 1.0,
            TravelTier::TwoHours => 2.0,
            TravelTier::ThreeHours => 3.0,
            TravelTier::FourHours => 4.0,
        }
    }

    /// Smallest tier that contains `hours`, if any.
    pub fn containing(hours: f64) -> Option<TravelTier> {
        TravelTier::ALL
            .into_iter()
            .find(|tier| hours <= tier.bound_hours())
    }

    pub fn label(self) -> &'static str {
        match self {
            TravelTier::OneHour => "<= 1 hour",
            TravelTier::TwoHours => "<= 2 hours",
            TravelTier::ThreeHours => "<= 3 hours",
            TravelTier::FourHours => "<= 4 hours",
        }
    }
}

impl fmt::Display for TravelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TravelTier {
    type Err = QueryError;

    /// Accepts `1`..`4`, optionally suffixed with `h`, `hour` or `hours`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized
            .trim_start_matches("<=")
            .trim_start_matches('<')
            .trim()
            .trim_end_matches("hours")
            .trim_end_matches("hour")
            .trim_end_matches('h')
            .trim();
        match digits {
            "1" => Ok(TravelTier::OneHour),
            "2" => Ok(TravelTier::TwoHours),
            "3" => Ok(TravelTier::ThreeHours),
            "4" => Ok(TravelTier::FourHours),
            _ => Err(QueryError::InvalidOption {
                option: "travel tier",
                input: s.to_string(),
                expected: "1, 2, 3, 4 (hours)",
            }),
        }
    }
}

/// Direction of a numeric range criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    GreaterOrEqual,
    LessOrEqual,
}

impl Comparator {
    /// Whether `value` lies on the admitted side of `bound`.
    pub fn admits(self, bound: f64, value: f64) -> bool {
        match self {
            Comparator::GreaterOrEqual => bound <= value,
            Comparator::LessOrEqual => bound >= value,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessOrEqual => "<=",
        }
    }
}

impl FromStr for Comparator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ge" | ">=" | "gte" | "greater" => Ok(Comparator::GreaterOrEqual),
            "le" | "<=" | "lte" | "less" => Ok(Comparator::LessOrEqual),
            _ => Err(QueryError::InvalidOption {
                option: "comparator",
                input: s.to_string(),
                expected: "ge, le, >=, <=",
            }),
        }
    }
}
