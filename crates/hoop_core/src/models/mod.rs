pub mod career;
pub mod record;

pub use career::{CareerYear, Tier};
pub use record::{Position, StatRecord};

/// Regulation season length in games.
pub const GAMES_PER_SEASON: u32 = 82;
