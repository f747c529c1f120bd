//! Chess brawl tournament manager: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    create_next_round, create_player, create_tournament, delete_player, delete_tournament,
    finish_match, list_tournaments, next_pairing, on_match_finished, ranking, register_event,
    start_match, start_tournament, tournaments_by_status, update_player, Pairing, RankingEntry,
};
pub use models::{
    EngineConfig, EngineError, ErrorKind, Event, EventCatalog, EventId, EventRule, EventType,
    GameMatch, MatchId, MatchOutcome, MatchResult, MatchStatus, Participant, Player, PlayerId,
    Round, RoundId, RoundStatus, StatField, Store, Tournament, TournamentId, TournamentStatus,
};
