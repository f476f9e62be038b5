//! Whole-career aggregation over a generated trajectory.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{CareerYear, Tier};

/// Career-level totals and averages. A summary over an empty or
/// not-yet-generated trajectory is all zeros, never an error.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CareerSummary {
    pub years_played: usize,
    pub career_ppg: f32,
    pub career_rpg: f32,
    pub career_apg: f32,
    pub peak_ppg: f32,
    /// 1-based year of the scoring peak; 0 when the career is empty.
    pub peak_year: u32,
    pub total_points: f32,
    pub total_rebounds: f32,
    pub total_assists: f32,
    pub total_games: u32,
    pub tier_counts: BTreeMap<Tier, usize>,
    /// Years spent at Elite or Starter level.
    pub prime_years: usize,
}

impl CareerSummary {
    pub fn from_years(years: &[CareerYear]) -> Self {
        if years.is_empty() {
            return Self::default();
        }

        let n = years.len() as f32;
        let mut tier_counts: BTreeMap<Tier, usize> = BTreeMap::new();
        for year in years {
            *tier_counts.entry(year.tier).or_default() += 1;
        }

        let peak = years
            .iter()
            .max_by(|a, b| a.ppg.total_cmp(&b.ppg))
            .map(|y| (y.ppg, y.year))
            .unwrap_or((0.0, 0));

        Self {
            years_played: years.len(),
            career_ppg: years.iter().map(|y| y.ppg).sum::<f32>() / n,
            career_rpg: years.iter().map(|y| y.rpg).sum::<f32>() / n,
            career_apg: years.iter().map(|y| y.apg).sum::<f32>() / n,
            peak_ppg: peak.0,
            peak_year: peak.1,
            total_points: years.iter().map(|y| y.ppg * y.games_played as f32).sum(),
            total_rebounds: years.iter().map(|y| y.rpg * y.games_played as f32).sum(),
            total_assists: years.iter().map(|y| y.apg * y.games_played as f32).sum(),
            total_games: years.iter().map(|y| y.games_played as u32).sum(),
            prime_years: years
                .iter()
                .filter(|y| matches!(y.tier, Tier::ElitePlayer | Tier::Starter))
                .count(),
            tier_counts,
        }
    }
}
