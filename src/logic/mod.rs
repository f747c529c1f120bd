//! Tournament business logic: registry, lifecycle, pairing, rounds, matches.

mod lifecycle;
mod match_play;
mod pairing;
mod players;
mod rounds;

pub use lifecycle::{
    create_tournament, delete_tournament, list_tournaments, ranking, start_tournament,
    tournaments_by_status, RankingEntry,
};
pub use match_play::{finish_match, register_event, start_match};
pub use pairing::{advancer, next_pairing, Pairing};
pub use players::{create_player, delete_player, update_player};
pub use rounds::{create_next_round, on_match_finished};
