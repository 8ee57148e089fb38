//! Catalog summary.
//!
//! Gives a quick breakdown of what's in the catalog: totals, completion,
//! and how hikes spread across difficulty ratings and travel tiers.

use anyhow::Result;

use summit_core::catalog::Catalog;
use summit_core::models::{Difficulty, TravelTier};

use crate::config::Config;
use crate::sqlite_source;

/// Counts derived from one catalog snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub completed: usize,
    pub by_difficulty: Vec<(Difficulty, usize)>,
    /// Each hike counted once, in the smallest tier that contains it.
    pub by_travel_tier: Vec<(TravelTier, usize)>,
    pub beyond_travel_tiers: usize,
    pub total_miles: f64,
}

pub fn compute_stats(catalog: &Catalog) -> CatalogStats {
    let records = catalog.records();

    let by_difficulty = Difficulty::ALL
        .iter()
        .map(|d| (*d, records.iter().filter(|h| h.difficulty_rating == *d).count()))
        .collect();

    let by_travel_tier = TravelTier::ALL
        .iter()
        .map(|tier| {
            let count = records
                .iter()
                .filter(|h| TravelTier::containing(h.travel_hours_from_home) == Some(*tier))
                .count();
            (*tier, count)
        })
        .collect();

    CatalogStats {
        total: records.len(),
        completed: records.iter().filter(|h| h.completed).count(),
        by_difficulty,
        by_travel_tier,
        beyond_travel_tiers: records
            .iter()
            .filter(|h| TravelTier::containing(h.travel_hours_from_home).is_none())
            .count(),
        total_miles: records.iter().map(|h| h.total_distance_miles).sum(),
    }
}

/// Run the stats command: load the catalog and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let catalog = sqlite_source::load_catalog(config).await?;
    let stats = compute_stats(&catalog);

    println!("Summit Register: Catalog Stats");
    println!("===============================");
    println!();
    println!("  Database:    {}", config.db.path.display());
    println!("  Hikes:       {}", stats.total);
    println!(
        "  Completed:   {} / {} ({}%)",
        stats.completed,
        stats.total,
        if stats.total > 0 {
            (stats.completed * 100) / stats.total
        } else {
            0
        }
    );
    println!("  Total miles: {:.1}", stats.total_miles);

    println!();
    println!("  By difficulty:");
    for (difficulty, count) in &stats.by_difficulty {
        println!("    {:<12} {:>5}", difficulty.as_str(), count);
    }

    println!();
    println!("  By travel time from {}:", config.home.label);
    for (tier, count) in &stats.by_travel_tier {
        println!("    {:<12} {:>5}", tier.label(), count);
    }
    println!("    {:<12} {:>5}", "> 4 hours", stats.beyond_travel_tiers);
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use summit_core::models::HikeRecord;

    fn hike(id: i64, difficulty: Difficulty, travel: f64, completed: bool) -> HikeRecord {
        HikeRecord {
            id,
            name: format!("Hike {}", id),
            total_distance_miles: 5.0,
            elevation_gain_feet: 1500.0,
            max_elevation_feet: 4000.0,
            prominence_feet: 0.0,
            difficulty_rating: difficulty,
            general_area: "Olympics".to_string(),
            travel_hours_from_home: travel,
            completed,
            notes: String::new(),
        }
    }

    #[test]
    fn test_compute_stats() {
        let catalog = Catalog::new(vec![
            hike(1, Difficulty::Easy, 0.75, true),
            hike(2, Difficulty::Hard, 2.0, false),
            hike(3, Difficulty::Hard, 2.5, true),
            hike(4, Difficulty::Expert, 5.0, false),
        ])
        .unwrap();
        let stats = compute_stats(&catalog);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(
            stats.by_difficulty,
            vec![
                (Difficulty::Easy, 1),
                (Difficulty::Moderate, 0),
                (Difficulty::Hard, 2),
                (Difficulty::Expert, 1),
            ]
        );
        assert_eq!(
            stats.by_travel_tier,
            vec![
                (TravelTier::OneHour, 1),
                (TravelTier::TwoHours, 1),
                (TravelTier::ThreeHours, 1),
                (TravelTier::FourHours, 0),
            ]
        );
        assert_eq!(stats.beyond_travel_tiers, 1);
        assert!((stats.total_miles - 20.0).abs() < 1e-9);
    }
}
