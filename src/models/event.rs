//! Match events and the catalog mapping each event kind to points and a counter.

use crate::models::error::EngineError;
use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a registered event.
pub type EventId = Uuid;

/// The fixed set of scoreable occurrences during a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    OriginalMove,
    Blunder,
    AdvantageousPosition,
    Disrespect,
    RageAttack,
}

impl EventType {
    /// All kinds in declaration order (used for form population).
    pub const ALL: [EventType; 5] = [
        EventType::OriginalMove,
        EventType::Blunder,
        EventType::AdvantageousPosition,
        EventType::Disrespect,
        EventType::RageAttack,
    ];

    /// Wire tag, e.g. `ORIGINAL_MOVE`.
    pub fn tag(self) -> &'static str {
        match self {
            EventType::OriginalMove => "ORIGINAL_MOVE",
            EventType::Blunder => "BLUNDER",
            EventType::AdvantageousPosition => "ADVANTAGEOUS_POSITION",
            EventType::Disrespect => "DISRESPECT",
            EventType::RageAttack => "RAGE_ATTACK",
        }
    }

    /// Parse a wire tag. Tags outside the fixed set are rejected.
    pub fn parse(tag: &str) -> Result<Self, EngineError> {
        EventType::ALL
            .into_iter()
            .find(|k| k.tag() == tag)
            .ok_or_else(|| EngineError::UnknownEventKind(tag.to_string()))
    }
}

/// Which per-tournament counter an event kind increments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    OriginalMoves,
    Blunders,
    AdvantageousPositions,
    Disrespect,
    RageAttacks,
}

/// Catalog entry: signed point delta plus the counter it feeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventRule {
    pub point_delta: i32,
    pub stat: StatField,
}

/// Read-only mapping from event kind to its scoring rule.
///
/// Injected into the engine at construction so tests can substitute custom
/// point values; never mutated after that.
#[derive(Clone, Debug)]
pub struct EventCatalog {
    rules: HashMap<EventType, EventRule>,
}

impl EventCatalog {
    /// Build a catalog from explicit rules (for tests or alternative scoring).
    pub fn new(rules: HashMap<EventType, EventRule>) -> Self {
        Self { rules }
    }

    /// Scoring rule for one event kind; fails if the catalog has no entry.
    pub fn lookup(&self, kind: EventType) -> Result<EventRule, EngineError> {
        self.rules
            .get(&kind)
            .copied()
            .ok_or_else(|| EngineError::UnknownEventKind(kind.tag().to_string()))
    }

    /// Known event kinds in declaration order (for form population).
    pub fn list_types(&self) -> Vec<EventType> {
        EventType::ALL
            .into_iter()
            .filter(|k| self.rules.contains_key(k))
            .collect()
    }
}

impl Default for EventCatalog {
    /// Standard brawl scoring: brilliant play rewarded, misconduct punished.
    fn default() -> Self {
        let rules = HashMap::from([
            (
                EventType::OriginalMove,
                EventRule { point_delta: 5, stat: StatField::OriginalMoves },
            ),
            (
                EventType::Blunder,
                EventRule { point_delta: -3, stat: StatField::Blunders },
            ),
            (
                EventType::AdvantageousPosition,
                EventRule { point_delta: 2, stat: StatField::AdvantageousPositions },
            ),
            (
                EventType::Disrespect,
                EventRule { point_delta: -5, stat: StatField::Disrespect },
            ),
            (
                EventType::RageAttack,
                EventRule { point_delta: -7, stat: StatField::RageAttacks },
            ),
        ]);
        Self { rules }
    }
}

/// A scored occurrence registered against a player during an in-progress match.
///
/// Append-only: the point delta is frozen from the catalog at registration
/// time, so later catalog changes never rewrite history.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub kind: EventType,
    pub point_delta: i32,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(match_id: MatchId, player_id: PlayerId, kind: EventType, point_delta: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            player_id,
            kind,
            point_delta,
            created_at: Utc::now(),
        }
    }
}
