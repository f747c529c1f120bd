//! Match between two players within a round.

use crate::models::error::EngineError;
use crate::models::event::EventId;
use crate::models::player::PlayerId;
use crate::models::round::RoundId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Match lifecycle: created pending, started explicitly, finished terminally.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Finished,
}

/// Wire tag for a match result (the outcome without its winner payload).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchResult {
    Win,
    Draw,
}

/// Terminal outcome of a match. A win always carries its winner, so a
/// winner-less win or a draw with a winner cannot be represented.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    Win { winner: PlayerId },
    Draw,
}

impl MatchOutcome {
    /// Assemble an outcome from a wire-level (result, winner) pair.
    /// WIN requires a winner; DRAW requires its absence.
    pub fn from_parts(result: MatchResult, winner: Option<PlayerId>) -> Result<Self, EngineError> {
        match (result, winner) {
            (MatchResult::Win, Some(winner)) => Ok(MatchOutcome::Win { winner }),
            (MatchResult::Win, None) => Err(EngineError::MissingWinner),
            (MatchResult::Draw, None) => Ok(MatchOutcome::Draw),
            (MatchResult::Draw, Some(w)) => Err(EngineError::InvalidWinner(w)),
        }
    }
}

/// One contest between two players.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub round_id: RoundId,
    pub tournament_id: TournamentId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub status: MatchStatus,
    /// Registered events, insertion order = chronological order.
    pub events: Vec<EventId>,
    /// Set exactly once, when the match is finished.
    pub outcome: Option<MatchOutcome>,
}

impl GameMatch {
    pub fn new(
        round_id: RoundId,
        tournament_id: TournamentId,
        player1: PlayerId,
        player2: PlayerId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            round_id,
            tournament_id,
            player1,
            player2,
            status: MatchStatus::Pending,
            events: Vec::new(),
            outcome: None,
        }
    }

    /// Whether the given player is one of the two contestants.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1 == player_id || self.player2 == player_id
    }

    /// The contestant that is not `player_id`. Caller must pass a contestant.
    pub fn opponent_of(&self, player_id: PlayerId) -> PlayerId {
        if self.player1 == player_id {
            self.player2
        } else {
            self.player1
        }
    }
}
