//! Player archetypes: named multiplier profiles over five skill dimensions.

use serde::{Deserialize, Serialize};

/// The fixed archetype set. Unrecognized names resolve to `AllAround`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Archetype {
    Scorer,
    Playmaker,
    Defender,
    #[serde(rename = "All-Around")]
    AllAround,
    Specialist,
    Prospect,
}

/// Multiplier profile shaping a generated career's base rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ArchetypeProfile {
    pub scoring: f32,
    pub playmaking: f32,
    pub defense: f32,
    pub athleticism: f32,
    pub clutch: f32,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Scorer,
        Archetype::Playmaker,
        Archetype::Defender,
        Archetype::AllAround,
        Archetype::Specialist,
        Archetype::Prospect,
    ];

    /// The designated fallback for unrecognized archetype names.
    pub const DEFAULT: Archetype = Archetype::AllAround;

    /// Parse an archetype name, falling back to All-Around instead of failing.
    pub fn parse_or_default(name: &str) -> Archetype {
        match name.trim().to_ascii_lowercase().as_str() {
            "scorer" => Archetype::Scorer,
            "playmaker" => Archetype::Playmaker,
            "defender" => Archetype::Defender,
            "all-around" | "all around" | "allaround" => Archetype::AllAround,
            "specialist" => Archetype::Specialist,
            "prospect" => Archetype::Prospect,
            _ => Archetype::DEFAULT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Scorer => "Scorer",
            Archetype::Playmaker => "Playmaker",
            Archetype::Defender => "Defender",
            Archetype::AllAround => "All-Around",
            Archetype::Specialist => "Specialist",
            Archetype::Prospect => "Prospect",
        }
    }

    /// The fixed multiplier profile for this archetype.
    pub fn profile(&self) -> ArchetypeProfile {
        match self {
            Archetype::Scorer => ArchetypeProfile {
                scoring: 1.9,
                playmaking: 0.6,
                defense: 0.6,
                athleticism: 1.2,
                clutch: 0.9,
            },
            Archetype::Playmaker => ArchetypeProfile {
                scoring: 1.0,
                playmaking: 1.3,
                defense: 0.7,
                athleticism: 0.6,
                clutch: 0.8,
            },
            Archetype::Defender => ArchetypeProfile {
                scoring: 0.7,
                playmaking: 0.6,
                defense: 1.3,
                athleticism: 1.0,
                clutch: 0.5,
            },
            Archetype::AllAround => ArchetypeProfile {
                scoring: 1.2,
                playmaking: 1.0,
                defense: 0.7,
                athleticism: 0.9,
                clutch: 0.8,
            },
            Archetype::Specialist => ArchetypeProfile {
                scoring: 1.5,
                playmaking: 0.5,
                defense: 0.9,
                athleticism: 0.5,
                clutch: 1.2,
            },
            Archetype::Prospect => ArchetypeProfile {
                scoring: 0.9,
                playmaking: 0.8,
                defense: 0.8,
                athleticism: 1.3,
                clutch: 0.6,
            },
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_all_around() {
        assert_eq!(Archetype::parse_or_default("Sniper"), Archetype::AllAround);
        assert_eq!(Archetype::parse_or_default(""), Archetype::AllAround);
    }

    #[test]
    fn known_names_parse_case_insensitively() {
        assert_eq!(Archetype::parse_or_default("scorer"), Archetype::Scorer);
        assert_eq!(Archetype::parse_or_default("All-Around"), Archetype::AllAround);
        assert_eq!(Archetype::parse_or_default("PROSPECT"), Archetype::Prospect);
    }

    #[test]
    fn serde_round_trips_the_hyphenated_name() {
        let json = serde_json::to_string(&Archetype::AllAround).unwrap();
        assert_eq!(json, "\"All-Around\"");
    }

    #[test]
    fn every_archetype_has_positive_multipliers() {
        for archetype in Archetype::ALL {
            let p = archetype.profile();
            for value in [p.scoring, p.playmaking, p.defense, p.athleticism, p.clutch] {
                assert!(value > 0.0);
            }
        }
    }
}
