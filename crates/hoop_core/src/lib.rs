//! # hoop_core - Deterministic Basketball Career Simulation Engine
//!
//! This library turns historical player-season data into position benchmarks,
//! generates multi-year career trajectories shaped by archetype and age, and
//! plays those careers out game by game with a stacking in-season event system.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same career)
//! - Percentile benchmarks derived from real historical data
//! - JSON API for easy integration with UI layers

pub mod analysis;
pub mod api;
pub mod career;
pub mod error;
pub mod models;
pub mod rng;
pub mod season;

// Re-export main API functions
pub use api::{
    generate_career_json, simulate_career_json, CareerRequest, CareerResponse,
    SimulationResponse, SCHEMA_VERSION,
};
pub use error::{CoreError, Result};

// Re-export core engine types
pub use analysis::{
    classify, classify_position, compute_benchmarks, find_similar_players, position_analysis,
    BenchmarkMap, MetricBenchmark, PositionBenchmark,
};
pub use career::{age_factor, Archetype, CareerConfig, CareerSummary, TrajectoryGenerator};
pub use models::{CareerYear, Position, StatRecord, Tier, GAMES_PER_SEASON};
pub use rng::SimRng;
pub use season::{
    CareerPhase, EventEngine, SeasonSimulator, SeasonSummary, StatModifier, TickOutcome,
    EVENT_POOL,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
