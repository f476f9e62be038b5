//! Game-by-game season simulator.
//!
//! Drives a generated trajectory through discrete per-game ticks: each tick
//! advances the event engine, draws one game's box line around the current
//! career year's averages, and accumulates season totals. Season and career
//! boundaries are their own ticks, so a caller stepping one tick at a time
//! sees every transition.

use serde::Serialize;
use tracing::info;

use crate::career::CareerConfig;
use crate::models::CareerYear;
use crate::rng::SimRng;
use crate::season::event_engine::{EventEngine, EventNotice, StatModifier};

/// Per-game variance around the season average.
const GAME_PPG_SPREAD: (f32, f32) = (0.5, 1.5);
const GAME_RPG_SPREAD: (f32, f32) = (0.3, 2.0);
const GAME_APG_SPREAD: (f32, f32) = (0.3, 2.0);

/// Where the simulator is in the career lifecycle.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CareerPhase {
    Idle,
    InSeason,
    SeasonComplete,
    CareerComplete,
}

/// Running totals and averages for the season in progress.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct SeasonState {
    pub games_played: u32,
    pub total_points: u32,
    pub total_rebounds: u32,
    pub total_assists: u32,
    pub current_ppg: f32,
    pub current_rpg: f32,
    pub current_apg: f32,
}

impl SeasonState {
    fn record_game(&mut self, points: u32, rebounds: u32, assists: u32) {
        self.games_played += 1;
        self.total_points += points;
        self.total_rebounds += rebounds;
        self.total_assists += assists;
        let games = self.games_played as f32;
        self.current_ppg = self.total_points as f32 / games;
        self.current_rpg = self.total_rebounds as f32 / games;
        self.current_apg = self.total_assists as f32 / games;
    }
}

/// Position within the career: 1-based season and game counters plus the
/// index into the trajectory.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CareerProgress {
    pub current_season: u32,
    pub current_game: u32,
    pub current_career_year: usize,
}

impl Default for CareerProgress {
    fn default() -> Self {
        Self { current_season: 1, current_game: 1, current_career_year: 0 }
    }
}

/// Frozen record of a finished season.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeasonSummary {
    pub season: u32,
    pub games_played: u32,
    pub ppg: f32,
    pub rpg: f32,
    pub apg: f32,
    pub total_points: u32,
    pub total_rebounds: u32,
    pub total_assists: u32,
}

/// One simulated game's box line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GameLog {
    pub season: u32,
    pub game: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub notices: Vec<EventNotice>,
}

/// What a single tick produced.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TickOutcome {
    /// Tick with no trajectory loaded, or after the career ended.
    Noop,
    Game(GameLog),
    /// The season's final game was played; its box line is already folded
    /// into the summary.
    SeasonEnd(SeasonSummary),
    SeasonStart { season: u32 },
    CareerEnd,
}

pub struct SeasonSimulator {
    games_per_season: u32,
    total_seasons: u32,
    phase: CareerPhase,
    trajectory: Vec<CareerYear>,
    season: SeasonState,
    progress: CareerProgress,
    events: EventEngine,
    history: Vec<SeasonSummary>,
    rng: SimRng,
}

impl SeasonSimulator {
    pub fn new(games_per_season: u32, total_seasons: u32, seed: u64) -> Self {
        Self {
            games_per_season: games_per_season.max(1),
            total_seasons: total_seasons.max(1),
            phase: CareerPhase::Idle,
            trajectory: Vec::new(),
            season: SeasonState::default(),
            progress: CareerProgress::default(),
            events: EventEngine::new(),
            history: Vec::new(),
            rng: SimRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &CareerConfig, seed: u64) -> Self {
        Self::new(config.games_per_season, config.years as u32, seed)
    }

    /// Load a trajectory and enter the first season. An empty trajectory
    /// leaves the simulator idle.
    pub fn start_career(&mut self, trajectory: Vec<CareerYear>) {
        if trajectory.is_empty() {
            return;
        }
        self.trajectory = trajectory;
        self.season = SeasonState::default();
        self.progress = CareerProgress::default();
        self.events.clear();
        self.history.clear();
        self.phase = CareerPhase::InSeason;
        info!(seasons = self.trajectory.len(), "career started");
    }

    /// Advance the simulation by one tick. In season this plays one game;
    /// at a season boundary it performs the transition only, so the next
    /// in-season tick always starts at game 1.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            CareerPhase::Idle | CareerPhase::CareerComplete => TickOutcome::Noop,
            CareerPhase::InSeason => self.play_game(),
            CareerPhase::SeasonComplete => self.cross_season_boundary(),
        }
    }

    fn play_game(&mut self) -> TickOutcome {
        // Event lifecycle runs first so a fresh trigger shapes this game.
        let notices = self.events.tick(&mut self.rng);
        let modifier = self.events.composite();
        let year = &self.trajectory[self.progress.current_career_year];

        let points = game_stat(year.ppg, modifier.ppg, GAME_PPG_SPREAD, &mut self.rng);
        let rebounds = game_stat(year.rpg, modifier.rpg, GAME_RPG_SPREAD, &mut self.rng);
        let assists = game_stat(year.apg, modifier.apg, GAME_APG_SPREAD, &mut self.rng);

        self.season.record_game(points, rebounds, assists);

        let log = GameLog {
            season: self.progress.current_season,
            game: self.progress.current_game,
            points,
            rebounds,
            assists,
            notices,
        };

        if self.progress.current_game >= self.games_per_season {
            let summary = self.close_season();
            self.phase = CareerPhase::SeasonComplete;
            return TickOutcome::SeasonEnd(summary);
        }

        self.progress.current_game += 1;
        TickOutcome::Game(log)
    }

    fn close_season(&mut self) -> SeasonSummary {
        let summary = SeasonSummary {
            season: self.progress.current_season,
            games_played: self.season.games_played,
            ppg: self.season.current_ppg,
            rpg: self.season.current_rpg,
            apg: self.season.current_apg,
            total_points: self.season.total_points,
            total_rebounds: self.season.total_rebounds,
            total_assists: self.season.total_assists,
        };
        info!(
            season = summary.season,
            ppg = summary.ppg,
            rpg = summary.rpg,
            apg = summary.apg,
            "season complete"
        );
        self.history.push(summary.clone());
        summary
    }

    fn cross_season_boundary(&mut self) -> TickOutcome {
        let has_next_season = self.progress.current_season < self.total_seasons
            && self.progress.current_career_year + 1 < self.trajectory.len();

        if !has_next_season {
            self.phase = CareerPhase::CareerComplete;
            info!(seasons = self.history.len(), "career complete");
            return TickOutcome::CareerEnd;
        }

        self.progress.current_season += 1;
        self.progress.current_game = 1;
        self.progress.current_career_year += 1;
        self.season = SeasonState::default();
        self.events.clear();
        self.phase = CareerPhase::InSeason;
        TickOutcome::SeasonStart { season: self.progress.current_season }
    }

    /// Throw away all simulation state and return to idle. The caller
    /// starts a fresh career with `start_career`.
    pub fn reset_career(&mut self) {
        self.phase = CareerPhase::Idle;
        self.trajectory.clear();
        self.season = SeasonState::default();
        self.progress = CareerProgress::default();
        self.events.clear();
        self.history.clear();
    }

    pub fn phase(&self) -> CareerPhase {
        self.phase
    }

    pub fn season_state(&self) -> &SeasonState {
        &self.season
    }

    pub fn progress(&self) -> &CareerProgress {
        &self.progress
    }

    pub fn history(&self) -> &[SeasonSummary] {
        &self.history
    }

    pub fn modifier(&self) -> StatModifier {
        self.events.composite()
    }

    /// The career year currently being played, if a season is underway.
    pub fn current_year(&self) -> Option<&CareerYear> {
        match self.phase {
            CareerPhase::InSeason | CareerPhase::SeasonComplete => {
                self.trajectory.get(self.progress.current_career_year)
            }
            _ => None,
        }
    }
}

/// One game's value for a stat: season average scaled by the event modifier
/// and a uniform game-to-game swing, floored at zero and rounded to a whole
/// number.
fn game_stat(average: f32, modifier: f32, spread: (f32, f32), rng: &mut SimRng) -> u32 {
    (average * modifier * rng.uniform(spread.0, spread.1)).max(0.0).round() as u32
}
