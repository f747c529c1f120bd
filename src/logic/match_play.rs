//! Match engine: start, event registration, finish.

use crate::logic::rounds::on_match_finished;
use crate::models::{
    EngineConfig, EngineError, Event, EventCatalog, EventId, EventType, MatchId, MatchOutcome,
    MatchStatus, PlayerId, RoundStatus, Store,
};

/// Start a pending match. The round's first started match also moves the
/// round from Scheduled to InProgress.
pub fn start_match(store: &mut Store, match_id: MatchId) -> Result<(), EngineError> {
    let game = store.game(match_id)?;
    if game.status != MatchStatus::Pending {
        return Err(EngineError::InvalidStateTransition("starting the match"));
    }
    let round_id = game.round_id;

    let round = store.round_mut(round_id)?;
    if round.status == RoundStatus::Finished {
        return Err(EngineError::InvalidStateTransition("starting the match"));
    }
    if round.status == RoundStatus::Scheduled {
        round.status = RoundStatus::InProgress;
    }
    store.game_mut(match_id)?.status = MatchStatus::InProgress;
    Ok(())
}

/// Register a scored event against one of the match's players.
///
/// Only valid while the match is in progress. Each event kind may be
/// registered at most once per player per match. The catalog entry is frozen
/// onto the event record, and the player's per-tournament counter and point
/// tally move in the same step. All validation happens before any mutation,
/// so a failed registration leaves no trace.
pub fn register_event(
    store: &mut Store,
    catalog: &EventCatalog,
    match_id: MatchId,
    player_id: PlayerId,
    kind: EventType,
) -> Result<EventId, EngineError> {
    let game = store.game(match_id)?;
    if game.status != MatchStatus::InProgress {
        return Err(EngineError::InvalidStateTransition("registering an event"));
    }
    if !game.involves(player_id) {
        return Err(EngineError::PlayerNotInMatch(player_id));
    }
    let rule = catalog.lookup(kind)?;
    let already = store
        .events_for_match(match_id)?
        .iter()
        .any(|e| e.player_id == player_id && e.kind == kind);
    if already {
        return Err(EngineError::DuplicateEvent(player_id, kind));
    }
    let tournament_id = game.tournament_id;
    store
        .tournament(tournament_id)?
        .participant(player_id)
        .ok_or(EngineError::PlayerNotInMatch(player_id))?;

    let event = Event::new(match_id, player_id, kind, rule.point_delta);
    let event_id = event.id;
    store.events.insert(event_id, event);
    store.game_mut(match_id)?.events.push(event_id);
    if let Some(participant) = store
        .tournament_mut(tournament_id)?
        .participant_mut(player_id)
    {
        participant.record_event(rule);
    }
    Ok(event_id)
}

/// Finish an in-progress match with an explicit outcome. Terminal: a
/// finished match accepts no further events or status changes.
///
/// A win credits the winner the configured win points (the loser none); a
/// draw credits both players the draw points. Zero registered events is a
/// perfectly valid way to reach a result. Completion cascades upward: the
/// owning round may close, which creates the next round or finalizes the
/// tournament.
pub fn finish_match(
    store: &mut Store,
    config: &EngineConfig,
    match_id: MatchId,
    outcome: MatchOutcome,
) -> Result<(), EngineError> {
    let game = store.game(match_id)?;
    if game.status != MatchStatus::InProgress {
        return Err(EngineError::InvalidStateTransition("finishing the match"));
    }
    if let MatchOutcome::Win { winner } = outcome {
        if !game.involves(winner) {
            return Err(EngineError::InvalidWinner(winner));
        }
    }
    let tournament_id = game.tournament_id;
    let (player1, player2) = (game.player1, game.player2);

    let game = store.game_mut(match_id)?;
    game.status = MatchStatus::Finished;
    game.outcome = Some(outcome);

    let tournament = store.tournament_mut(tournament_id)?;
    match outcome {
        MatchOutcome::Win { winner } => {
            if let Some(p) = tournament.participant_mut(winner) {
                p.tournament_points += config.win_points;
            }
        }
        MatchOutcome::Draw => {
            for pid in [player1, player2] {
                if let Some(p) = tournament.participant_mut(pid) {
                    p.tournament_points += config.draw_points;
                }
            }
        }
    }

    on_match_finished(store, config, match_id)
}
