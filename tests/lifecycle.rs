//! Integration tests for tournament creation, start, and deletion.

use chess_brawl_web::{
    create_player, create_tournament, delete_tournament, start_tournament, EngineConfig,
    EngineError, PlayerId, RoundStatus, Store, TournamentStatus,
};

fn players(store: &mut Store, config: &EngineConfig, n: usize) -> Vec<PlayerId> {
    (0..n)
        .map(|i| {
            create_player(
                store,
                config,
                &format!("Player {i}"),
                &format!("p{}-{n}", i),
                None,
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn roster_size_must_be_4_or_8() {
    let mut store = Store::new();
    let config = EngineConfig::default();
    for n in [0, 1, 2, 3, 5, 6, 7, 9, 10] {
        let ids = players(&mut store, &config, n);
        assert_eq!(
            create_tournament(&mut store, &config, "Cup", &ids),
            Err(EngineError::InvalidRosterSize(n)),
            "roster of {n} should be rejected"
        );
    }
    assert!(store.tournaments.is_empty());

    let four = players(&mut store, &config, 4);
    assert!(create_tournament(&mut store, &config, "Four", &four).is_ok());
    let eight = players(&mut store, &config, 8);
    assert!(create_tournament(&mut store, &config, "Eight", &eight).is_ok());
}

#[test]
fn tournament_name_must_not_be_empty() {
    let mut store = Store::new();
    let config = EngineConfig::default();
    let ids = players(&mut store, &config, 4);
    assert_eq!(
        create_tournament(&mut store, &config, "   ", &ids),
        Err(EngineError::EmptyName)
    );
    // Failed creation leaves the players unbound.
    for id in &ids {
        assert!(store.player(*id).unwrap().current_tournament.is_none());
    }
}

#[test]
fn roster_rejects_duplicates() {
    let mut store = Store::new();
    let config = EngineConfig::default();
    let ids = players(&mut store, &config, 4);
    let roster = [ids[0], ids[1], ids[2], ids[0]];
    assert_eq!(
        create_tournament(&mut store, &config, "Cup", &roster),
        Err(EngineError::DuplicatePlayer(ids[0]))
    );
    assert!(store.tournaments.is_empty());
}

#[test]
fn player_bound_to_active_tournament_cannot_join_another() {
    // Scenario E: creation fails with a conflict and creates nothing.
    let mut store = Store::new();
    let config = EngineConfig::default();
    let first = players(&mut store, &config, 4);
    create_tournament(&mut store, &config, "First", &first).unwrap();

    let mut second = players(&mut store, &config, 3);
    second.push(first[0]);
    assert_eq!(
        create_tournament(&mut store, &config, "Second", &second),
        Err(EngineError::PlayerAlreadyInTournament(first[0]))
    );
    assert_eq!(store.tournaments.len(), 1);
    for id in &second[..3] {
        assert!(store.player(*id).unwrap().current_tournament.is_none());
    }
}

#[test]
fn create_and_start_materializes_round_one_in_roster_order() {
    // Scenario A.
    let mut store = Store::new();
    let config = EngineConfig::default();
    let ids = players(&mut store, &config, 4);
    let tid = create_tournament(&mut store, &config, "Cup", &ids).unwrap();

    let t = store.tournament(tid).unwrap();
    assert_eq!(t.status, TournamentStatus::Created);
    assert!(t.rounds.is_empty());
    for p in &t.participants {
        assert_eq!(p.tournament_points, config.starting_points);
        assert_eq!(p.blunders, 0);
    }
    for id in &ids {
        assert_eq!(store.player(*id).unwrap().current_tournament, Some(tid));
    }

    start_tournament(&mut store, &config, tid).unwrap();
    let t = store.tournament(tid).unwrap();
    assert_eq!(t.status, TournamentStatus::InProgress);
    assert_eq!(t.rounds.len(), 1);

    let round = store.round(t.rounds[0]).unwrap();
    assert_eq!(round.round_number, 1);
    assert_eq!(round.status, RoundStatus::Scheduled);
    assert_eq!(round.matches.len(), 2);
    let m1 = store.game(round.matches[0]).unwrap();
    let m2 = store.game(round.matches[1]).unwrap();
    assert_eq!((m1.player1, m1.player2), (ids[0], ids[1]));
    assert_eq!((m2.player1, m2.player2), (ids[2], ids[3]));
}

#[test]
fn start_is_only_valid_from_created() {
    let mut store = Store::new();
    let config = EngineConfig::default();
    let ids = players(&mut store, &config, 4);
    let tid = create_tournament(&mut store, &config, "Cup", &ids).unwrap();
    start_tournament(&mut store, &config, tid).unwrap();
    assert!(matches!(
        start_tournament(&mut store, &config, tid),
        Err(EngineError::InvalidStateTransition(_))
    ));
}

#[test]
fn delete_is_only_valid_before_start() {
    let mut store = Store::new();
    let config = EngineConfig::default();
    let ids = players(&mut store, &config, 4);
    let tid = create_tournament(&mut store, &config, "Cup", &ids).unwrap();
    delete_tournament(&mut store, tid).unwrap();
    assert!(store.tournaments.is_empty());
    // Roster players are free again.
    for id in &ids {
        assert!(store.player(*id).unwrap().current_tournament.is_none());
    }

    let tid = create_tournament(&mut store, &config, "Cup", &ids).unwrap();
    start_tournament(&mut store, &config, tid).unwrap();
    assert!(matches!(
        delete_tournament(&mut store, tid),
        Err(EngineError::InvalidStateTransition(_))
    ));
}
