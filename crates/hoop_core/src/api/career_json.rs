//! JSON request/response surface for external collaborators.
//!
//! Strings in, strings out: a collaborator passes one request document and
//! receives the full result document, so no engine types cross the boundary.

use serde::{Deserialize, Serialize};

use crate::analysis::benchmarks::{compute_benchmarks, BenchmarkMap};
use crate::career::{Archetype, CareerSummary, TrajectoryGenerator};
use crate::error::{CoreError, Result};
use crate::models::{CareerYear, Position, StatRecord, GAMES_PER_SEASON};
use crate::rng::SimRng;
use crate::season::{SeasonSimulator, SeasonSummary, TickOutcome};

/// Version of the request/response documents. Bump on breaking changes.
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub records: Vec<StatRecord>,
    pub position: String,
    /// Archetype name; unrecognized or missing names fall back to All-Around.
    #[serde(default)]
    pub archetype: String,
    #[serde(default = "default_starting_age")]
    pub starting_age: u8,
    #[serde(default = "default_years")]
    pub years: usize,
    #[serde(default = "default_games_per_season")]
    pub games_per_season: u32,
    #[serde(default)]
    pub seed: u64,
}

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
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

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub schema_version: u8,
    pub position: Position,
    pub archetype: Archetype,
    pub benchmarks: BenchmarkMap,
    pub trajectory: Vec<CareerYear>,
    pub summary: CareerSummary,
}

/// Whole-career totals accumulated game by game, as opposed to the
/// trajectory-level `CareerSummary` averages.
#[derive(Debug, Default, Serialize)]
pub struct SimulatedTotals {
    pub games_played: u32,
    pub total_points: u32,
    pub total_rebounds: u32,
    pub total_assists: u32,
}

#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub schema_version: u8,
    pub position: Position,
    pub archetype: Archetype,
    pub trajectory: Vec<CareerYear>,
    pub seasons: Vec<SeasonSummary>,
    pub totals: SimulatedTotals,
    pub summary: CareerSummary,
}

/// Generate a career trajectory from a JSON request and return the full
/// response document.
pub fn generate_career_json(request_json: &str) -> Result<String> {
    let request: CareerRequest = serde_json::from_str(request_json)?;
    let (position, archetype, benchmarks) = prepare(&request)?;

    let generator = TrajectoryGenerator::new(&benchmarks);
    let mut rng = SimRng::seed_from_u64(request.seed);
    let trajectory =
        generator.generate(position, archetype, request.starting_age, request.years, &mut rng);
    let summary = CareerSummary::from_years(&trajectory);

    let response = CareerResponse {
        schema_version: SCHEMA_VERSION,
        position,
        archetype,
        benchmarks,
        trajectory,
        summary,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Generate a trajectory and play every season of it game by game,
/// returning per-season summaries and whole-career totals.
pub fn simulate_career_json(request_json: &str) -> Result<String> {
    let request: CareerRequest = serde_json::from_str(request_json)?;
    let (position, archetype, benchmarks) = prepare(&request)?;

    let generator = TrajectoryGenerator::new(&benchmarks);
    let mut rng = SimRng::seed_from_u64(request.seed);
    let trajectory =
        generator.generate(position, archetype, request.starting_age, request.years, &mut rng);
    let summary = CareerSummary::from_years(&trajectory);

    let mut simulator =
        SeasonSimulator::new(request.games_per_season, request.years as u32, request.seed);
    simulator.start_career(trajectory.clone());
    loop {
        match simulator.tick() {
            TickOutcome::CareerEnd | TickOutcome::Noop => break,
            _ => {}
        }
    }

    let mut totals = SimulatedTotals::default();
    for season in simulator.history() {
        totals.games_played += season.games_played;
        totals.total_points += season.total_points;
        totals.total_rebounds += season.total_rebounds;
        totals.total_assists += season.total_assists;
    }

    let response = SimulationResponse {
        schema_version: SCHEMA_VERSION,
        position,
        archetype,
        trajectory,
        seasons: simulator.history().to_vec(),
        totals,
        summary,
    };
    Ok(serde_json::to_string(&response)?)
}

fn prepare(request: &CareerRequest) -> Result<(Position, Archetype, BenchmarkMap)> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let position = Position::from_label(&request.position).ok_or_else(|| {
        CoreError::InvalidParameter(format!("unknown position '{}'", request.position))
    })?;
    let archetype = Archetype::parse_or_default(&request.archetype);

    let benchmarks = compute_benchmarks(&request.records);
    if benchmarks.is_empty() {
        return Err(CoreError::EmptyDataset);
    }

    Ok((position, archetype, benchmarks))
}
