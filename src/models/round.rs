//! Round: one elimination stage within a tournament.

use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a round.
pub type RoundId = Uuid;

/// Round lifecycle: scheduled at creation, in progress once its first match
/// starts, finished once its last match finishes. Never skips a state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
}

/// One elimination stage, created already populated with its matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub tournament_id: TournamentId,
    /// 1-based, dense, monotonic within the tournament.
    pub round_number: u32,
    pub status: RoundStatus,
    /// Matches covering every active player exactly once.
    pub matches: Vec<MatchId>,
    /// Players advancing to the next round, in the order their matches
    /// finished. Feeds the next round's pairing.
    pub advancers: Vec<PlayerId>,
}

impl Round {
    pub fn new(tournament_id: TournamentId, round_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round_number,
            status: RoundStatus::Scheduled,
            matches: Vec::new(),
            advancers: Vec::new(),
        }
    }
}
