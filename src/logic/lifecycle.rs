//! Tournament lifecycle: creation, start, deletion, finalization, ranking.

use crate::logic::rounds::create_next_round;
use crate::models::{
    EngineConfig, EngineError, Participant, PlayerId, Store, Tournament, TournamentId,
    TournamentStatus,
};
use serde::Serialize;

/// Create a tournament in Created state over the given roster.
///
/// The roster must hold 4 or 8 distinct, known players, none of whom is
/// already bound to a non-finished tournament. On success every roster
/// player is bound and gets a fresh participation record; on any failure
/// nothing is mutated.
pub fn create_tournament(
    store: &mut Store,
    config: &EngineConfig,
    name: &str,
    player_ids: &[PlayerId],
) -> Result<TournamentId, EngineError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::EmptyName);
    }
    // 6 is rejected: only rosters of 4 or 8 halve cleanly down to one
    // champion without byes.
    let n = player_ids.len();
    if n < 4 || n > 8 || n % 2 != 0 || n == 6 {
        return Err(EngineError::InvalidRosterSize(n));
    }
    for (i, &pid) in player_ids.iter().enumerate() {
        if player_ids[..i].contains(&pid) {
            return Err(EngineError::DuplicatePlayer(pid));
        }
        let player = store.player(pid)?;
        if player.current_tournament.is_some() {
            return Err(EngineError::PlayerAlreadyInTournament(pid));
        }
    }

    let participants = player_ids
        .iter()
        .map(|&pid| Participant::new(pid, config.starting_points))
        .collect();
    let tournament = Tournament::new(name, participants);
    let id = tournament.id;
    store.tournaments.insert(id, tournament);
    for &pid in player_ids {
        if let Some(player) = store.players.get_mut(&pid) {
            player.current_tournament = Some(id);
        }
    }
    log::info!("Tournament {} ({}) created with {} players", id, name, n);
    Ok(id)
}

/// Start a tournament: Created -> InProgress, materializing round 1.
pub fn start_tournament(
    store: &mut Store,
    config: &EngineConfig,
    id: TournamentId,
) -> Result<(), EngineError> {
    let tournament = store.tournament_mut(id)?;
    if tournament.status != TournamentStatus::Created {
        return Err(EngineError::InvalidStateTransition("starting the tournament"));
    }
    tournament.status = TournamentStatus::InProgress;
    create_next_round(store, config, id)?;
    Ok(())
}

/// Delete a tournament. Only allowed before it starts; deleting unbinds the
/// roster so the players can join another tournament.
pub fn delete_tournament(store: &mut Store, id: TournamentId) -> Result<(), EngineError> {
    let tournament = store.tournament(id)?;
    if tournament.status != TournamentStatus::Created {
        return Err(EngineError::InvalidStateTransition("deleting the tournament"));
    }
    let roster: Vec<PlayerId> = tournament.participants.iter().map(|p| p.player_id).collect();
    for pid in roster {
        if let Some(player) = store.players.get_mut(&pid) {
            player.current_tournament = None;
        }
    }
    store.tournaments.remove(&id);
    Ok(())
}

/// Finalize a tournament once the bracket has concluded: record the champion,
/// unbind every participant, and credit the champion's rating bonus.
///
/// Driven by the pairing engine's Conclude signal via the round flow; not a
/// caller-facing shortcut to end a tournament early.
pub(crate) fn finalize_tournament(
    store: &mut Store,
    config: &EngineConfig,
    id: TournamentId,
    champion: PlayerId,
) -> Result<(), EngineError> {
    let tournament = store.tournament_mut(id)?;
    if tournament.status != TournamentStatus::InProgress {
        return Err(EngineError::InvalidStateTransition("finalizing the tournament"));
    }
    tournament.status = TournamentStatus::Finished;
    tournament.champion = Some(champion);
    let roster: Vec<PlayerId> = tournament.participants.iter().map(|p| p.player_id).collect();
    for pid in roster {
        if let Some(player) = store.players.get_mut(&pid) {
            player.current_tournament = None;
        }
    }
    if let Some(player) = store.players.get_mut(&champion) {
        player.rating = (player.rating + config.champion_rating_bonus).min(config.rating_max);
    }
    log::info!("Tournament {} finished, champion {}", id, champion);
    Ok(())
}

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RankingEntry {
    pub player_id: PlayerId,
    pub nickname: String,
    pub name: String,
    pub rating: i32,
    pub tournament_points: i32,
    pub original_moves: u32,
    pub blunders: u32,
    pub advantageous_positions: u32,
    pub disrespect: u32,
    pub rage_attacks: u32,
}

/// Full standings, every participant included regardless of elimination.
///
/// Ordered by tournament points descending; ties broken by rating descending,
/// then nickname ascending (case-insensitive). A pure read: re-querying with
/// no intervening writes yields the same table.
pub fn ranking(store: &Store, id: TournamentId) -> Result<Vec<RankingEntry>, EngineError> {
    let tournament = store.tournament(id)?;
    let mut entries: Vec<RankingEntry> = tournament
        .participants
        .iter()
        .map(|p| {
            let player = store.player(p.player_id)?;
            Ok(RankingEntry {
                player_id: p.player_id,
                nickname: player.nickname.clone(),
                name: player.name.clone(),
                rating: player.rating,
                tournament_points: p.tournament_points,
                original_moves: p.original_moves,
                blunders: p.blunders,
                advantageous_positions: p.advantageous_positions,
                disrespect: p.disrespect,
                rage_attacks: p.rage_attacks,
            })
        })
        .collect::<Result<_, EngineError>>()?;
    entries.sort_by(|a, b| {
        b.tournament_points
            .cmp(&a.tournament_points)
            .then(b.rating.cmp(&a.rating))
            .then_with(|| a.nickname.to_lowercase().cmp(&b.nickname.to_lowercase()))
    });
    Ok(entries)
}

/// All tournaments, newest first (for listing and history pages).
pub fn list_tournaments(store: &Store) -> Vec<&Tournament> {
    let mut all: Vec<&Tournament> = store.tournaments.values().collect();
    all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    all
}

/// Tournaments in one lifecycle state, newest first.
pub fn tournaments_by_status(store: &Store, status: TournamentStatus) -> Vec<&Tournament> {
    list_tournaments(store)
        .into_iter()
        .filter(|t| t.status == status)
        .collect()
}
