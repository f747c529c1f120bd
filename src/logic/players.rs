//! Player registry operations: create, update, delete.

use crate::models::{EngineConfig, EngineError, Player, PlayerId, Store, TournamentStatus};

fn validate_rating(config: &EngineConfig, rating: i32) -> Result<(), EngineError> {
    if rating < config.rating_min || rating > config.rating_max {
        return Err(EngineError::InvalidRating(rating));
    }
    Ok(())
}

/// Register a new player. Nicknames are unique (case-insensitive) across the
/// registry; a missing rating falls back to the configured default.
pub fn create_player(
    store: &mut Store,
    config: &EngineConfig,
    name: &str,
    nickname: &str,
    rating: Option<i32>,
) -> Result<PlayerId, EngineError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::EmptyName);
    }
    let nickname = nickname.trim();
    if nickname.is_empty() {
        return Err(EngineError::EmptyNickname);
    }
    if store.find_player_by_nickname(nickname).is_some() {
        return Err(EngineError::DuplicateNickname);
    }
    let rating = rating.unwrap_or(config.default_rating);
    validate_rating(config, rating)?;

    let player = Player::new(name, nickname, rating);
    let id = player.id;
    store.players.insert(id, player);
    Ok(id)
}

/// Update a player's display name and rating. The nickname is identity and
/// stays fixed.
pub fn update_player(
    store: &mut Store,
    config: &EngineConfig,
    id: PlayerId,
    name: &str,
    rating: i32,
) -> Result<(), EngineError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::EmptyName);
    }
    validate_rating(config, rating)?;

    let player = store.player_mut(id)?;
    player.name = name.to_string();
    player.rating = rating;
    Ok(())
}

/// Remove a player from the registry. Fails while the player is bound to a
/// non-finished tournament, since its roster would dangle.
pub fn delete_player(store: &mut Store, id: PlayerId) -> Result<(), EngineError> {
    let player = store.player(id)?;
    if let Some(tid) = player.current_tournament {
        let active = store
            .tournaments
            .get(&tid)
            .map(|t| t.status != TournamentStatus::Finished)
            .unwrap_or(false);
        if active {
            return Err(EngineError::PlayerInActiveTournament(id));
        }
    }
    store.players.remove(&id);
    Ok(())
}
