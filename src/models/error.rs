//! Errors that can occur during engine operations.

use crate::models::event::EventType;
use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use crate::models::round::RoundId;
use crate::models::tournament::TournamentId;

/// Coarse classification of an engine error, used by the transport layer to
/// pick a status code. No kind is ever auto-retried or swallowed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    Validation,
    /// Operation attempted against the wrong machine state; caller must
    /// re-fetch current state before retrying.
    InvalidTransition,
    /// Unknown id or nickname.
    NotFound,
    /// Input collides with existing state (duplicate nickname, player
    /// already bound to an active tournament).
    Conflict,
}

/// Errors surfaced by tournament, round, match, and registry operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Tournament or player name is empty.
    EmptyName,
    /// Player nickname is empty.
    EmptyNickname,
    /// A player with this nickname already exists (case-insensitive).
    DuplicateNickname,
    /// Rating outside the allowed range.
    InvalidRating(i32),
    /// Roster must be 4 or 8 players (even, 4..=8, and 6 does not halve
    /// cleanly to a single champion).
    InvalidRosterSize(usize),
    /// The same player appears twice in a roster.
    DuplicatePlayer(PlayerId),
    /// Player is already bound to another non-finished tournament.
    PlayerAlreadyInTournament(PlayerId),
    /// Player cannot be deleted while bound to a non-finished tournament.
    PlayerInActiveTournament(PlayerId),
    PlayerNotFound(PlayerId),
    TournamentNotFound(TournamentId),
    RoundNotFound(RoundId),
    MatchNotFound(MatchId),
    /// Event tag outside the catalog's fixed set.
    UnknownEventKind(String),
    /// Player is not one of the match's two contestants.
    PlayerNotInMatch(PlayerId),
    /// This event kind was already registered for this player in this match.
    DuplicateEvent(PlayerId, EventType),
    /// Operation not allowed in the entity's current state.
    InvalidStateTransition(&'static str),
    /// WIN outcome names a winner that is not one of the two contestants,
    /// or a DRAW carries a winner.
    InvalidWinner(PlayerId),
    /// WIN outcome submitted without a winner.
    MissingWinner,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        use EngineError::*;
        match self {
            EmptyName | EmptyNickname | InvalidRating(_) | InvalidRosterSize(_)
            | UnknownEventKind(_) | PlayerNotInMatch(_) | DuplicateEvent(_, _)
            | InvalidWinner(_) | MissingWinner => ErrorKind::Validation,
            InvalidStateTransition(_) => ErrorKind::InvalidTransition,
            PlayerNotFound(_) | TournamentNotFound(_) | RoundNotFound(_) | MatchNotFound(_) => {
                ErrorKind::NotFound
            }
            DuplicateNickname | DuplicatePlayer(_) | PlayerAlreadyInTournament(_)
            | PlayerInActiveTournament(_) => ErrorKind::Conflict,
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::EmptyName => write!(f, "Name must not be empty"),
            EngineError::EmptyNickname => write!(f, "Nickname must not be empty"),
            EngineError::DuplicateNickname => {
                write!(f, "A player with this nickname already exists")
            }
            EngineError::InvalidRating(r) => write!(f, "Rating {} is out of range", r),
            EngineError::InvalidRosterSize(n) => {
                write!(f, "Roster must have 4 or 8 players, got {}", n)
            }
            EngineError::DuplicatePlayer(_) => write!(f, "Roster contains the same player twice"),
            EngineError::PlayerAlreadyInTournament(_) => {
                write!(f, "Player is already in an active tournament")
            }
            EngineError::PlayerInActiveTournament(_) => {
                write!(f, "Player cannot be deleted while in an active tournament")
            }
            EngineError::PlayerNotFound(id) => write!(f, "Player not found: {}", id),
            EngineError::TournamentNotFound(id) => write!(f, "Tournament not found: {}", id),
            EngineError::RoundNotFound(id) => write!(f, "Round not found: {}", id),
            EngineError::MatchNotFound(id) => write!(f, "Match not found: {}", id),
            EngineError::UnknownEventKind(tag) => write!(f, "Unknown event type: {}", tag),
            EngineError::PlayerNotInMatch(id) => {
                write!(f, "Player {} is not part of this match", id)
            }
            EngineError::DuplicateEvent(_, kind) => write!(
                f,
                "Event '{}' was already registered for this player in this match",
                kind.tag()
            ),
            EngineError::InvalidStateTransition(action) => {
                write!(f, "Invalid state for {}", action)
            }
            EngineError::InvalidWinner(id) => {
                write!(f, "Winner {} is inconsistent with the match result", id)
            }
            EngineError::MissingWinner => write!(f, "A win result requires a winner"),
        }
    }
}

impl std::error::Error for EngineError {}
