//! In-season simulation: the event catalogue, the stateful event engine,
//! and the game-by-game simulator driving a career through its seasons.

pub mod event_engine;
pub mod event_pool;
pub mod simulator;

pub use event_engine::{EventEngine, EventNotice, StatModifier, EVENT_TRIGGER_CHANCE};
pub use event_pool::{EventImpact, GameEventDef, Polarity, EVENT_POOL};
pub use simulator::{
    CareerPhase, CareerProgress, GameLog, SeasonSimulator, SeasonState, SeasonSummary,
    TickOutcome,
};
