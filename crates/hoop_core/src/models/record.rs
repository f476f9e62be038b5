use serde::{Deserialize, Serialize};

/// The five standard positions. Declaration order is the deterministic
/// fallback order used when a requested position has no benchmark data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];

    /// Parse a dataset label. Accepts both short codes and full names;
    /// combo listings like "SG-PG" resolve to the first listed position.
    pub fn from_label(label: &str) -> Option<Self> {
        let head = label.split(['-', '/']).next().unwrap_or(label).trim();
        match head.to_ascii_uppercase().as_str() {
            "PG" | "POINT GUARD" => Some(Position::PG),
            "SG" | "SHOOTING GUARD" => Some(Position::SG),
            "SF" | "SMALL FORWARD" => Some(Position::SF),
            "PF" | "POWER FORWARD" => Some(Position::PF),
            "C" | "CENTER" => Some(Position::C),
            _ => None,
        }
    }

    /// Full display name for UI-facing collaborators.
    pub fn label(&self) -> &'static str {
        match self {
            Position::PG => "Point Guard",
            Position::SG => "Shooting Guard",
            Position::SF => "Small Forward",
            Position::PF => "Power Forward",
            Position::C => "Center",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One historical player-season line. Loaded once by a collaborator
/// (dataset_builder) and treated as read-only by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatRecord {
    pub player: String,
    pub position: Position,
    pub age: u8,
    pub ppg: f32,
    pub rpg: f32,
    pub apg: f32,
    #[serde(default)]
    pub mpg: f32,
    #[serde(default)]
    pub games: u16,
}
