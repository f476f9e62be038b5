//! The fixed catalogue of in-season events.
//!
//! Each entry carries a per-stat multiplier map and a duration in games.
//! Entries are immutable; the engine instantiates them as active events with
//! a countdown copy of the duration.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Whether an event helps, hurts, or reshapes performance.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// Per-stat multipliers. A stat an event does not touch stays at 1.0.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EventImpact {
    pub ppg: f32,
    pub rpg: f32,
    pub apg: f32,
}

impl Default for EventImpact {
    fn default() -> Self {
        Self { ppg: 1.0, rpg: 1.0, apg: 1.0 }
    }
}

/// One catalogue entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GameEventDef {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: EventImpact,
    /// How many games the event lasts once triggered.
    pub base_duration: u32,
    pub polarity: Polarity,
}

impl GameEventDef {
    fn new(
        title: &'static str,
        description: &'static str,
        impact: (f32, f32, f32),
        base_duration: u32,
        polarity: Polarity,
    ) -> Self {
        Self {
            title,
            description,
            impact: EventImpact { ppg: impact.0, rpg: impact.1, apg: impact.2 },
            base_duration,
            polarity,
        }
    }
}

/// The event catalogue: eight positive, eight negative, four mixed.
pub static EVENT_POOL: Lazy<Vec<GameEventDef>> = Lazy::new(|| {
    use Polarity::*;
    vec![
        GameEventDef::new(
            "Hot Streak",
            "You're on fire! Everything is clicking.",
            (1.3, 1.2, 1.2),
            5,
            Positive,
        ),
        GameEventDef::new(
            "Training Breakthrough",
            "New training method is paying off!",
            (1.25, 1.1, 1.1),
            8,
            Positive,
        ),
        GameEventDef::new(
            "Team Chemistry",
            "Great chemistry with teammates!",
            (1.2, 1.3, 1.4),
            6,
            Positive,
        ),
        GameEventDef::new(
            "Coaching Confidence",
            "Coach has full confidence in you!",
            (1.4, 1.0, 1.0),
            4,
            Positive,
        ),
        GameEventDef::new(
            "Playoff Push",
            "Stepping up for the playoff push!",
            (1.35, 1.25, 1.15),
            7,
            Positive,
        ),
        GameEventDef::new(
            "Contract Year",
            "Playing for that new contract!",
            (1.3, 1.2, 1.1),
            10,
            Positive,
        ),
        GameEventDef::new(
            "All-Star Form",
            "Playing at an All-Star level!",
            (1.4, 1.3, 1.3),
            6,
            Positive,
        ),
        GameEventDef::new(
            "Leadership Role",
            "Embracing leadership responsibilities!",
            (1.15, 1.35, 1.4),
            8,
            Positive,
        ),
        GameEventDef::new(
            "Shooting Slump",
            "Can't buy a basket lately...",
            (0.7, 0.9, 0.9),
            5,
            Negative,
        ),
        GameEventDef::new(
            "Minor Injury",
            "Playing through a nagging injury",
            (0.8, 0.7, 0.8),
            3,
            Negative,
        ),
        GameEventDef::new(
            "Fatigue",
            "Worn down by the long season",
            (0.75, 0.8, 0.85),
            6,
            Negative,
        ),
        GameEventDef::new(
            "Team Conflict",
            "Issues with teammates and coaching staff",
            (0.7, 0.7, 0.6),
            4,
            Negative,
        ),
        GameEventDef::new(
            "Personal Issues",
            "Off-court distractions affecting play",
            (0.65, 0.8, 0.7),
            5,
            Negative,
        ),
        GameEventDef::new(
            "Reduced Minutes",
            "Coach cutting your playing time",
            (0.6, 0.6, 0.6),
            8,
            Negative,
        ),
        GameEventDef::new(
            "Bad Form",
            "Just not playing well right now",
            (0.7, 0.75, 0.7),
            7,
            Negative,
        ),
        GameEventDef::new(
            "Trade Rumors",
            "Uncertainty affecting performance",
            (0.75, 0.8, 0.75),
            6,
            Negative,
        ),
        GameEventDef::new(
            "Role Change",
            "Adjusting to new team role",
            (0.9, 1.1, 1.2),
            10,
            Neutral,
        ),
        GameEventDef::new(
            "System Change",
            "New offensive system takes adjustment",
            (0.85, 0.9, 1.1),
            8,
            Neutral,
        ),
        GameEventDef::new(
            "Rookie Wall",
            "Hitting the rookie wall",
            (0.7, 0.8, 0.7),
            10,
            Neutral,
        ),
        GameEventDef::new(
            "Veteran Savvy",
            "Using experience to impact games",
            (1.0, 1.1, 1.3),
            12,
            Neutral,
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_all_polarities() {
        assert_eq!(EVENT_POOL.len(), 20);
        assert_eq!(EVENT_POOL.iter().filter(|e| e.polarity == Polarity::Positive).count(), 8);
        assert_eq!(EVENT_POOL.iter().filter(|e| e.polarity == Polarity::Negative).count(), 8);
        assert_eq!(EVENT_POOL.iter().filter(|e| e.polarity == Polarity::Neutral).count(), 4);
    }

    #[test]
    fn every_event_lasts_at_least_one_game() {
        for event in EVENT_POOL.iter() {
            assert!(event.base_duration >= 1, "{} has zero duration", event.title);
        }
    }

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<&str> = EVENT_POOL.iter().map(|e| e.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), EVENT_POOL.len());
    }
}
