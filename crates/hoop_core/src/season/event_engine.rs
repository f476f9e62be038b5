//! Stateful event engine: triggers, stacks, decays, and expires events.
//!
//! Per-game tick order matters and is fixed:
//! 1. every active event loses one game of duration; expired events leave,
//! 2. the composite modifier is recomputed from whatever remains,
//! 3. only if no events were active *entering* the game, a trigger roll may
//!    add a fresh event — whose modifier applies starting this same game.
//!
//! Concurrent events stack multiplicatively with no cap.

use serde::Serialize;
use tracing::debug;

use crate::rng::SimRng;
use crate::season::event_pool::{GameEventDef, EVENT_POOL};

/// Per-game chance of a new event when none are active.
pub const EVENT_TRIGGER_CHANCE: f32 = 0.1;

/// Composite per-stat multiplier across all active events.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StatModifier {
    pub ppg: f32,
    pub rpg: f32,
    pub apg: f32,
}

impl StatModifier {
    pub const NEUTRAL: StatModifier = StatModifier { ppg: 1.0, rpg: 1.0, apg: 1.0 };
}

impl Default for StatModifier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// A catalogue entry currently in effect, with its countdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEvent {
    pub def: &'static GameEventDef,
    pub remaining: u32,
}

/// Lifecycle notification for observability / UI collaborators.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EventNotice {
    Triggered { title: String, duration: u32 },
    Expired { title: String },
}

#[derive(Debug, Clone)]
pub struct EventEngine {
    active: Vec<ActiveEvent>,
    composite: StatModifier,
    trigger_chance: f32,
}

impl Default for EventEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEngine {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            composite: StatModifier::NEUTRAL,
            trigger_chance: EVENT_TRIGGER_CHANCE,
        }
    }

    /// Override the trigger probability (tests and tuning).
    pub fn with_trigger_chance(mut self, chance: f32) -> Self {
        self.trigger_chance = chance;
        self
    }

    /// The per-stat product of all active events' multipliers, recomputed on
    /// every change to the active set.
    pub fn composite(&self) -> StatModifier {
        self.composite
    }

    pub fn active_events(&self) -> &[ActiveEvent] {
        &self.active
    }

    /// Run one game's worth of event lifecycle. Expiry always precedes the
    /// trigger roll, and the roll only happens when the set was empty
    /// entering the game.
    pub fn tick(&mut self, rng: &mut SimRng) -> Vec<EventNotice> {
        let was_idle = self.active.is_empty();
        let mut notices = Vec::new();

        for event in &mut self.active {
            event.remaining -= 1;
        }
        self.active.retain(|event| {
            if event.remaining == 0 {
                debug!(title = event.def.title, "event ended");
                notices.push(EventNotice::Expired { title: event.def.title.to_string() });
                false
            } else {
                true
            }
        });
        self.recompute();

        if was_idle && rng.chance(self.trigger_chance) {
            let def = &EVENT_POOL[rng.pick(EVENT_POOL.len())];
            notices.push(self.activate(def));
        }

        notices
    }

    /// Put a catalogue entry into effect with its base duration.
    pub fn activate(&mut self, def: &'static GameEventDef) -> EventNotice {
        debug!(title = def.title, duration = def.base_duration, "event triggered");
        self.active.push(ActiveEvent { def, remaining: def.base_duration });
        self.recompute();
        EventNotice::Triggered { title: def.title.to_string(), duration: def.base_duration }
    }

    /// Drop every active event and return the modifier to neutral
    /// (season boundaries and career resets).
    pub fn clear(&mut self) {
        self.active.clear();
        self.composite = StatModifier::NEUTRAL;
    }

    fn recompute(&mut self) {
        let mut composite = StatModifier::NEUTRAL;
        for event in &self.active {
            composite.ppg *= event.def.impact.ppg;
            composite.rpg *= event.def.impact.rpg;
            composite.apg *= event.def.impact.apg;
        }
        self.composite = composite;
    }
}
