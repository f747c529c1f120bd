//! Data structures for the chess brawl engine: players, tournaments, rounds,
//! matches, events, and the in-memory store.

mod config;
mod error;
mod event;
mod game;
mod player;
mod round;
mod store;
mod tournament;

pub use config::EngineConfig;
pub use error::{EngineError, ErrorKind};
pub use event::{Event, EventCatalog, EventId, EventRule, EventType, StatField};
pub use game::{GameMatch, MatchId, MatchOutcome, MatchResult, MatchStatus};
pub use player::{Player, PlayerId};
pub use round::{Round, RoundId, RoundStatus};
pub use store::Store;
pub use tournament::{Participant, Tournament, TournamentId, TournamentStatus};
