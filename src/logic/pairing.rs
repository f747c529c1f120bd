//! Pairing policy: who meets whom in the next round, and when the bracket
//! is down to a single champion.

use crate::models::{
    EngineError, GameMatch, MatchOutcome, PlayerId, RoundStatus, Store, Tournament,
};

/// Decision for the next round: either the pairs to play, or the tournament
/// is over and the remaining player is the champion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Pairing {
    Matches(Vec<(PlayerId, PlayerId)>),
    Conclude(PlayerId),
}

/// Compute the pairing for the tournament's next round.
///
/// Round 1 pairs the roster in submitted order: (p[0], p[1]), (p[2], p[3]), …
/// Later rounds pair the previous round's advancers in the order their
/// matches finished. A pool of exactly one player concludes the tournament.
pub fn next_pairing(store: &Store, tournament: &Tournament) -> Result<Pairing, EngineError> {
    let pool: Vec<PlayerId> = match tournament.rounds.last() {
        None => tournament
            .participants
            .iter()
            .map(|p| p.player_id)
            .collect(),
        Some(&last) => {
            let round = store.round(last)?;
            if round.status != RoundStatus::Finished {
                return Err(EngineError::InvalidStateTransition("pairing the next round"));
            }
            round.advancers.clone()
        }
    };

    if pool.len() == 1 {
        return Ok(Pairing::Conclude(pool[0]));
    }
    // The roster validation (4 or 8 players) guarantees every pool halves
    // cleanly, so an odd pool here means corrupted state.
    if pool.len() % 2 != 0 {
        return Err(EngineError::InvalidRosterSize(pool.len()));
    }

    let pairs = pool.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    Ok(Pairing::Matches(pairs))
}

/// The player advancing out of a finished match.
///
/// A win advances its winner. A draw is resolved deterministically: the
/// drawn player with more tournament points advances; on equality, player1.
pub fn advancer(tournament: &Tournament, game: &GameMatch) -> Option<PlayerId> {
    match game.outcome? {
        MatchOutcome::Win { winner } => Some(winner),
        MatchOutcome::Draw => {
            let points = |pid: PlayerId| {
                tournament
                    .participant(pid)
                    .map(|p| p.tournament_points)
                    .unwrap_or(i32::MIN)
            };
            if points(game.player2) > points(game.player1) {
                Some(game.player2)
            } else {
                Some(game.player1)
            }
        }
    }
}
