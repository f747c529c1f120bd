//! In-memory entity store: the persistence collaborator behind the engine.
//!
//! Entities reference each other by owned foreign keys, never by live
//! back-references; all cross-entity navigation goes through here.

use crate::models::error::EngineError;
use crate::models::event::{Event, EventId};
use crate::models::game::{GameMatch, MatchId};
use crate::models::player::{Player, PlayerId};
use crate::models::round::{Round, RoundId};
use crate::models::tournament::{Tournament, TournamentId};
use std::collections::HashMap;

/// Holds every Player, Tournament, Round, Match, and Event record.
#[derive(Clone, Debug, Default)]
pub struct Store {
    pub players: HashMap<PlayerId, Player>,
    pub tournaments: HashMap<TournamentId, Tournament>,
    pub rounds: HashMap<RoundId, Round>,
    pub matches: HashMap<MatchId, GameMatch>,
    pub events: HashMap<EventId, Event>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, EngineError> {
        self.players.get(&id).ok_or(EngineError::PlayerNotFound(id))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, EngineError> {
        self.players
            .get_mut(&id)
            .ok_or(EngineError::PlayerNotFound(id))
    }

    /// Case-insensitive exact nickname lookup. Absence is a normal outcome.
    pub fn find_player_by_nickname(&self, nickname: &str) -> Option<&Player> {
        self.players
            .values()
            .find(|p| p.nickname.eq_ignore_ascii_case(nickname))
    }

    pub fn tournament(&self, id: TournamentId) -> Result<&Tournament, EngineError> {
        self.tournaments
            .get(&id)
            .ok_or(EngineError::TournamentNotFound(id))
    }

    pub fn tournament_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, EngineError> {
        self.tournaments
            .get_mut(&id)
            .ok_or(EngineError::TournamentNotFound(id))
    }

    pub fn round(&self, id: RoundId) -> Result<&Round, EngineError> {
        self.rounds.get(&id).ok_or(EngineError::RoundNotFound(id))
    }

    pub fn round_mut(&mut self, id: RoundId) -> Result<&mut Round, EngineError> {
        self.rounds
            .get_mut(&id)
            .ok_or(EngineError::RoundNotFound(id))
    }

    pub fn game(&self, id: MatchId) -> Result<&GameMatch, EngineError> {
        self.matches.get(&id).ok_or(EngineError::MatchNotFound(id))
    }

    pub fn game_mut(&mut self, id: MatchId) -> Result<&mut GameMatch, EngineError> {
        self.matches
            .get_mut(&id)
            .ok_or(EngineError::MatchNotFound(id))
    }

    /// Events of one match in registration order.
    pub fn events_for_match(&self, id: MatchId) -> Result<Vec<&Event>, EngineError> {
        let game = self.game(id)?;
        Ok(game
            .events
            .iter()
            .filter_map(|eid| self.events.get(eid))
            .collect())
    }
}
