use serde::{Deserialize, Serialize};

/// Qualitative performance tier, derived from position percentile benchmarks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    ElitePlayer,
    Starter,
    RolePlayer,
    BenchPlayer,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::ElitePlayer => "Elite Player",
            Tier::Starter => "Starter",
            Tier::RolePlayer => "Role Player",
            Tier::BenchPlayer => "Bench Player",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One simulated career year. Produced eagerly by the trajectory generator
/// and read-only input to the per-game season simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerYear {
    /// 1-based year number within the career.
    pub year: u32,
    pub age: u8,
    pub ppg: f32,
    pub rpg: f32,
    pub apg: f32,
    pub mpg: f32,
    pub games_played: u16,
    pub tier: Tier,
}
