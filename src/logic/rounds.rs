//! Round flow: creating the next round from the pairing decision and
//! reacting to match completion.

use crate::logic::lifecycle::finalize_tournament;
use crate::logic::pairing::{advancer, next_pairing, Pairing};
use crate::models::{
    EngineConfig, EngineError, GameMatch, MatchId, MatchStatus, Round, RoundId, RoundStatus,
    Store, TournamentId, TournamentStatus,
};

/// Create the tournament's next round from the pairing decision, or finalize
/// the tournament when the bracket has concluded.
///
/// Returns the new round's id, or `None` when the tournament was finalized
/// instead.
pub fn create_next_round(
    store: &mut Store,
    config: &EngineConfig,
    tournament_id: TournamentId,
) -> Result<Option<RoundId>, EngineError> {
    let (decision, round_number) = {
        let tournament = store.tournament(tournament_id)?;
        if tournament.status != TournamentStatus::InProgress {
            return Err(EngineError::InvalidStateTransition("creating a round"));
        }
        (
            next_pairing(store, tournament)?,
            tournament.rounds.len() as u32 + 1,
        )
    };

    let pairs = match decision {
        Pairing::Conclude(champion) => {
            finalize_tournament(store, config, tournament_id, champion)?;
            return Ok(None);
        }
        Pairing::Matches(pairs) => pairs,
    };
    let mut round = Round::new(tournament_id, round_number);
    let round_id = round.id;
    for (player1, player2) in pairs {
        let game = GameMatch::new(round_id, tournament_id, player1, player2);
        round.matches.push(game.id);
        store.matches.insert(game.id, game);
    }
    log::info!(
        "Tournament {}: round {} created with {} matches",
        tournament_id,
        round_number,
        round.matches.len()
    );
    store.rounds.insert(round_id, round);
    store.tournament_mut(tournament_id)?.rounds.push(round_id);
    Ok(Some(round_id))
}

/// React to a finished match: record its advancer and, once every match in
/// the round is finished, close the round and trigger the next one (or the
/// tournament's finalization).
///
/// Calling this again for a match of an already-finished round is a no-op;
/// round completion is monotone.
pub fn on_match_finished(
    store: &mut Store,
    config: &EngineConfig,
    match_id: MatchId,
) -> Result<(), EngineError> {
    let game = store.game(match_id)?;
    if game.status != MatchStatus::Finished {
        return Err(EngineError::InvalidStateTransition("recording an unfinished match"));
    }
    let round_id = game.round_id;
    let tournament_id = game.tournament_id;

    if store.round(round_id)?.status == RoundStatus::Finished {
        return Ok(());
    }

    let tournament = store.tournament(tournament_id)?;
    let advancing = advancer(tournament, store.game(match_id)?)
        .ok_or(EngineError::InvalidStateTransition("recording an unfinished match"))?;

    // A player plays exactly one match per round, so a repeated call for the
    // same match cannot double-record.
    let round = store.round_mut(round_id)?;
    if !round.advancers.contains(&advancing) {
        round.advancers.push(advancing);
    }

    let all_finished = store
        .round(round_id)?
        .matches
        .iter()
        .all(|mid| {
            store
                .matches
                .get(mid)
                .map(|m| m.status == MatchStatus::Finished)
                .unwrap_or(false)
        });
    if !all_finished {
        return Ok(());
    }

    let round = store.round_mut(round_id)?;
    round.status = RoundStatus::Finished;
    log::info!("Tournament {}: round {} finished", tournament_id, round.round_number);

    create_next_round(store, config, tournament_id)?;
    Ok(())
}
