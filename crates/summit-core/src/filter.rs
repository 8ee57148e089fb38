//! Multi-criteria filter engine.
//!
//! # Algorithm
//!
//! 1. Reject criteria with nothing set ([`QueryError::EmptyQuery`]).
//! 2. Copy the input records into a fresh working set.
//! 3. For each supplied criterion, drop every record that fails it,
//!    keeping survivors in their original relative order.
//!
//! The result is the conjunction of all supplied criteria. The input is
//! never mutated and no buffer is shared between invocations.

use tracing::debug;

use crate::catalog::Catalog;
use crate::criteria::FilterCriteria;
use crate::error::QueryError;
use crate::models::{Difficulty, HikeRecord, TravelTier};

/// Result of a query that had at least one criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Matches(Vec<HikeRecord>),
    /// Criteria were supplied but nothing satisfied all of them.
    NoMatches,
}

impl QueryOutcome {
    pub fn records(&self) -> &[HikeRecord] {
        match self {
            QueryOutcome::Matches(records) => records,
            QueryOutcome::NoMatches => &[],
        }
    }

    pub fn into_records(self) -> Vec<HikeRecord> {
        match self {
            QueryOutcome::Matches(records) => records,
            QueryOutcome::NoMatches => Vec::new(),
        }
    }
}

/// Filter `records` down to those satisfying every supplied criterion.
///
/// Returns an empty vector when criteria are supplied but nothing
/// matches; use [`run_query`] to get that as [`QueryOutcome::NoMatches`].
pub fn filter(
    records: &[HikeRecord],
    criteria: &FilterCriteria,
) -> Result<Vec<HikeRecord>, QueryError> {
    if criteria.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    let mut working: Vec<HikeRecord> = records.to_vec();

    if let Some(keyword) = &criteria.keyword {
        let needle = keyword.to_lowercase();
        working.retain(|hike| matches_keyword(hike, &needle));
    }

    if let Some(bound) = &criteria.distance {
        working.retain(|hike| bound.admits(hike.total_distance_miles));
    }

    if let Some(bound) = &criteria.elevation_gain {
        working.retain(|hike| bound.admits(hike.elevation_gain_feet));
    }

    if let Some(bound) = &criteria.max_elevation {
        working.retain(|hike| bound.admits(hike.max_elevation_feet));
    }

    if let Some(max) = criteria.max_difficulty {
        working.retain(|hike| within_difficulty(hike.difficulty_rating, max));
    }

    if let Some(tier) = criteria.max_travel_tier {
        working.retain(|hike| within_travel_tier(hike.travel_hours_from_home, tier));
    }

    debug!(
        criteria = criteria.active_count(),
        input = records.len(),
        matched = working.len(),
        "filter applied"
    );

    Ok(working)
}

/// Run [`filter`] over the whole catalog and classify the result.
pub fn run_query(catalog: &Catalog, criteria: &FilterCriteria) -> Result<QueryOutcome, QueryError> {
    let matches = filter(catalog.records(), criteria)?;
    if matches.is_empty() {
        Ok(QueryOutcome::NoMatches)
    } else {
        Ok(QueryOutcome::Matches(matches))
    }
}

/// `needle` must already be lowercase.
fn matches_keyword(hike: &HikeRecord, needle: &str) -> bool {
    [&hike.name, &hike.general_area, &hike.notes]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn within_difficulty(rating: Difficulty, max: Difficulty) -> bool {
    match max {
        // Top of the order: every rating passes.
        Difficulty::Expert => true,
        Difficulty::Easy | Difficulty::Moderate | Difficulty::Hard => rating <= max,
    }
}

fn within_travel_tier(hours: f64, tier: TravelTier) -> bool {
    hours <= tier.bound_hours()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::NumericBound;

    fn hike(id: i64, name: &str, distance: f64, difficulty: Difficulty, travel: f64) -> HikeRecord {
        HikeRecord {
            id,
            name: name.to_string(),
            total_distance_miles: distance,
            elevation_gain_feet: distance * 500.0,
            max_elevation_feet: 2000.0 + distance * 300.0,
            prominence_feet: 0.0,
            difficulty_rating: difficulty,
            general_area: "Snoqualmie Pass".to_string(),
            travel_hours_from_home: travel,
            completed: false,
            notes: String::new(),
        }
    }

    fn sample() -> Vec<HikeRecord> {
        vec![
            hike(1, "Rattlesnake Ledge", 2.0, Difficulty::Easy, 1.0),
            hike(2, "Mailbox Peak", 10.0, Difficulty::Expert, 1.5),
            hike(3, "Lake Serene", 3.0, Difficulty::Moderate, 2.0),
            hike(4, "Camp Muir", 9.0, Difficulty::Hard, 2.5),
        ]
    }

    fn ids(records: &[HikeRecord]) -> Vec<i64> {
        records.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_empty_criteria_is_empty_query() {
        let err = filter(&sample(), &FilterCriteria::new()).unwrap_err();
        assert_eq!(err, QueryError::EmptyQuery);
    }

    #[test]
    fn test_distance_at_most_keeps_order() {
        let records = vec![
            hike(1, "A", 2.0, Difficulty::Easy, 1.0),
            hike(2, "B", 10.0, Difficulty::Easy, 1.0),
            hike(3, "C", 3.0, Difficulty::Easy, 1.0),
        ];
        let criteria = FilterCriteria::new().distance(NumericBound::at_most(5.0));
        let result = filter(&records, &criteria).unwrap();
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_distance_at_least_is_inclusive() {
        let criteria = FilterCriteria::new().distance(NumericBound::at_least(9.0));
        let result = filter(&sample(), &criteria).unwrap();
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn test_elevation_bounds() {
        // gains: 1000, 5000, 1500, 4500
        let criteria = FilterCriteria::new().elevation_gain(NumericBound::at_least(1500.0));
        assert_eq!(ids(&filter(&sample(), &criteria).unwrap()), vec![2, 3, 4]);

        // max elevations: 2600, 5000, 2900, 4700
        let criteria = FilterCriteria::new().max_elevation(NumericBound::at_most(2900.0));
        assert_eq!(ids(&filter(&sample(), &criteria).unwrap()), vec![1, 3]);
    }

    #[test]
    fn test_keyword_matches_name_area_and_notes() {
        let mut records = sample();
        records[3].notes = "Bring crampons for the snowfield".to_string();
        records[1].general_area = "North Bend".to_string();

        let by_name = FilterCriteria::new().keyword("LEDGE");
        assert_eq!(ids(&filter(&records, &by_name).unwrap()), vec![1]);

        let by_area = FilterCriteria::new().keyword("north bend");
        assert_eq!(ids(&filter(&records, &by_area).unwrap()), vec![2]);

        let by_notes = FilterCriteria::new().keyword("crampons");
        assert_eq!(ids(&filter(&records, &by_notes).unwrap()), vec![4]);
    }

    #[test]
    fn test_keyword_does_not_match_travel_time() {
        let criteria = FilterCriteria::new().keyword("2.5");
        assert!(filter(&sample(), &criteria).unwrap().is_empty());
    }

    #[test]
    fn test_difficulty_tiers() {
        let tiers = [
            (Difficulty::Easy, vec![1]),
            (Difficulty::Moderate, vec![1, 3]),
            (Difficulty::Hard, vec![1, 3, 4]),
            (Difficulty::Expert, vec![1, 2, 3, 4]),
        ];
        for (max, expected) in tiers {
            let criteria = FilterCriteria::new().max_difficulty(max);
            assert_eq!(
                ids(&filter(&sample(), &criteria).unwrap()),
                expected,
                "max difficulty {}",
                max
            );
        }
    }

    #[test]
    fn test_difficulty_moderate_regardless_of_travel() {
        let records = vec![
            hike(1, "E", 1.0, Difficulty::Easy, 3.5),
            hike(2, "M", 1.0, Difficulty::Moderate, 0.5),
            hike(3, "H", 1.0, Difficulty::Hard, 0.5),
            hike(4, "X", 1.0, Difficulty::Expert, 0.5),
        ];
        let criteria = FilterCriteria::new()
            .max_difficulty(Difficulty::Moderate)
            .max_travel_tier(TravelTier::FourHours);
        assert_eq!(ids(&filter(&records, &criteria).unwrap()), vec![1, 2]);
    }

    #[test]
    fn test_travel_tier_inclusive() {
        let criteria = FilterCriteria::new().max_travel_tier(TravelTier::TwoHours);
        assert_eq!(ids(&filter(&sample(), &criteria).unwrap()), vec![1, 2, 3]);

        let criteria = FilterCriteria::new().max_travel_tier(TravelTier::OneHour);
        assert_eq!(ids(&filter(&sample(), &criteria).unwrap()), vec![1]);
    }

    #[test]
    fn test_conjunction_of_criteria() {
        let criteria = FilterCriteria::new()
            .distance(NumericBound::at_least(3.0))
            .max_difficulty(Difficulty::Hard)
            .max_travel_tier(TravelTier::ThreeHours);
        assert_eq!(ids(&filter(&sample(), &criteria).unwrap()), vec![3, 4]);
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let records = sample();
        let criteria = FilterCriteria::new().distance(NumericBound::at_least(2.5));
        let result = filter(&records, &criteria).unwrap();
        let positions: Vec<usize> = result
            .iter()
            .map(|r| records.iter().position(|c| c == r).expect("fabricated record"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = FilterCriteria::new()
            .keyword("a")
            .distance(NumericBound::at_most(9.0))
            .max_travel_tier(TravelTier::ThreeHours);
        let once = filter(&sample(), &criteria).unwrap();
        let twice = filter(&once, &criteria).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_not_mutated() {
        let records = sample();
        let before = records.clone();
        let criteria = FilterCriteria::new().max_difficulty(Difficulty::Easy);
        let _ = filter(&records, &criteria).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn test_run_query_no_matches() {
        let catalog = Catalog::new(sample()).unwrap();
        let criteria = FilterCriteria::new().keyword("nonexistent trail");
        let outcome = run_query(&catalog, &criteria).unwrap();
        assert_eq!(outcome, QueryOutcome::NoMatches);
        assert!(outcome.records().is_empty());
    }

    #[test]
    fn test_run_query_matches() {
        let catalog = Catalog::new(sample()).unwrap();
        let criteria = FilterCriteria::new().keyword("lake");
        let outcome = run_query(&catalog, &criteria).unwrap();
        assert_eq!(ids(outcome.records()), vec![3]);
        assert_eq!(catalog.len(), 4);
    }
}
