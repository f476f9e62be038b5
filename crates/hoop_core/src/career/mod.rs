//! Career generation: archetypes, the age-development curve, the trajectory
//! generator, and whole-career summaries.

pub mod age_curve;
pub mod archetype;
pub mod summary;
pub mod trajectory;

use serde::{Deserialize, Serialize};

use crate::models::{Position, GAMES_PER_SEASON};

pub use age_curve::age_factor;
pub use archetype::{Archetype, ArchetypeProfile};
pub use summary::CareerSummary;
pub use trajectory::TrajectoryGenerator;

/// Configuration for one career. Seasons-per-career equals the horizon in
/// years; games-per-season defaults to the regulation 82.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerConfig {
    pub position: Position,
    pub archetype: Archetype,
    #[serde(default = "default_starting_age")]
    pub starting_age: u8,
    #[serde(default = "default_years")]
    pub years: usize,
    #[serde(default = "default_games_per_season")]
    pub games_per_season: u32,
}

impl CareerConfig {
    pub fn new(position: Position, archetype: Archetype) -> Self {
        Self {
            position,
            archetype,
            starting_age: default_starting_age(),
            years: default_years(),
            games_per_season: default_games_per_season(),
        }
    }
}

fn default_starting_age() -> u8 {
    22
}

fn default_years() -> usize {
    15
}

fn default_games_per_season() -> u32 {
    GAMES_PER_SEASON
}
