//! Tournament and its per-tournament participation records.

use crate::models::event::{EventRule, StatField};
use crate::models::player::PlayerId;
use crate::models::round::RoundId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Tournament lifecycle, strictly forward.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    #[default]
    Created,
    InProgress,
    Finished,
}

/// One player's participation in one tournament: points and counters are
/// scoped here, not on the global player record, and start fresh per
/// tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub player_id: PlayerId,
    pub tournament_points: i32,
    pub original_moves: u32,
    pub blunders: u32,
    pub advantageous_positions: u32,
    pub disrespect: u32,
    pub rage_attacks: u32,
}

impl Participant {
    pub fn new(player_id: PlayerId, starting_points: i32) -> Self {
        Self {
            player_id,
            tournament_points: starting_points,
            original_moves: 0,
            blunders: 0,
            advantageous_positions: 0,
            disrespect: 0,
            rage_attacks: 0,
        }
    }

    /// Apply one registered event: bump the named counter and the point tally.
    pub fn record_event(&mut self, rule: EventRule) {
        match rule.stat {
            StatField::OriginalMoves => self.original_moves += 1,
            StatField::Blunders => self.blunders += 1,
            StatField::AdvantageousPositions => self.advantageous_positions += 1,
            StatField::Disrespect => self.disrespect += 1,
            StatField::RageAttacks => self.rage_attacks += 1,
        }
        self.tournament_points += rule.point_delta;
    }
}

/// A single competition instance over a fixed roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub status: TournamentStatus,
    /// Roster in submitted order; drives round-1 pairing.
    pub participants: Vec<Participant>,
    /// Rounds in creation order (round_number ascending).
    pub rounds: Vec<RoundId>,
    /// Set exactly once, at finalization.
    pub champion: Option<PlayerId>,
}

impl Tournament {
    /// Create a tournament in Created state with the given participation records.
    pub fn new(name: impl Into<String>, participants: Vec<Participant>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            status: TournamentStatus::Created,
            participants,
            rounds: Vec::new(),
            champion: None,
        }
    }

    pub fn is_participant(&self, player_id: PlayerId) -> bool {
        self.participants.iter().any(|p| p.player_id == player_id)
    }

    pub fn participant(&self, player_id: PlayerId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.player_id == player_id)
    }

    pub fn participant_mut(&mut self, player_id: PlayerId) -> Option<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.player_id == player_id)
    }
}
