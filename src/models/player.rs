//! Player registry record.

use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A player in the global registry.
///
/// Per-tournament counters and points live on the tournament's participant
/// records, not here; only the cross-tournament rating is global.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Unique handle, compared case-insensitively.
    pub nickname: String,
    /// Cross-tournament rating (adjusted when a player wins a tournament).
    pub rating: i32,
    /// The non-finished tournament this player is bound to, if any.
    /// A player may participate in at most one such tournament at a time.
    pub current_tournament: Option<TournamentId>,
}

impl Player {
    /// Create a new unbound player.
    pub fn new(name: impl Into<String>, nickname: impl Into<String>, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            nickname: nickname.into(),
            rating,
            current_tournament: None,
        }
    }
}
