//! Single binary web server: JSON REST API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chess_brawl_web::{
    create_player, create_tournament, delete_player, delete_tournament, finish_match,
    list_tournaments, ranking, register_event, start_match, start_tournament,
    tournaments_by_status, update_player, EngineConfig, EngineError, ErrorKind, EventCatalog,
    MatchId, MatchOutcome, MatchResult, PlayerId, RoundId, Store, TournamentId, TournamentStatus,
};
use serde::Deserialize;
use std::sync::RwLock;

/// Shared state: the entity store behind one lock, plus the injected
/// read-only scoring configuration.
struct AppState {
    store: RwLock<Store>,
    config: EngineConfig,
    catalog: EventCatalog,
}

type State = Data<AppState>;

/// Map an engine error to a JSON response with the status its kind calls for.
fn error_response(err: &EngineError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err.kind() {
        ErrorKind::Validation | ErrorKind::InvalidTransition => HttpResponse::BadRequest().json(body),
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Conflict => HttpResponse::Conflict().json(body),
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreatePlayerBody {
    name: String,
    nickname: String,
    rating: Option<i32>,
}

#[derive(Deserialize)]
struct UpdatePlayerBody {
    name: String,
    rating: i32,
}

#[derive(Deserialize)]
struct NicknameQuery {
    nickname: String,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    player_ids: Vec<PlayerId>,
}

#[derive(Deserialize)]
struct StatusQuery {
    status: Option<TournamentStatus>,
}

#[derive(Deserialize)]
struct RegisterEventBody {
    player_id: PlayerId,
    event_type: String,
}

#[derive(Deserialize)]
struct FinishMatchBody {
    result: MatchResult,
    winner_id: Option<PlayerId>,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: round id (e.g. /api/rounds/{id}/matches)
#[derive(Deserialize)]
struct RoundPath {
    id: RoundId,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "chess-brawl-web",
    })
}

/// Register a new player (nickname must be unique, case-insensitive).
#[post("/api/players")]
async fn api_create_player(state: State, body: Json<CreatePlayerBody>) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_player(&mut g, &state.config, &body.name, &body.nickname, body.rating) {
        Ok(id) => HttpResponse::Created().json(&g.players[&id]),
        Err(e) => error_response(&e),
    }
}

/// All registered players.
#[get("/api/players")]
async fn api_list_players(state: State) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players: Vec<_> = g.players.values().collect();
    players.sort_by(|a, b| a.nickname.to_lowercase().cmp(&b.nickname.to_lowercase()));
    HttpResponse::Ok().json(players)
}

/// One player by id (404 if not found).
#[get("/api/players/{id}")]
async fn api_get_player(state: State, path: Path<PlayerPath>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.player(path.id) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

/// Player by nickname, case-insensitive exact match. Absence is 404 here,
/// since the caller asked for a specific player.
#[get("/api/players/search")]
async fn api_find_player(state: State, query: Query<NicknameQuery>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.find_player_by_nickname(&query.nickname) {
        Some(player) => HttpResponse::Ok().json(player),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No player" })),
    }
}

/// Update a player's display name and rating (the nickname is fixed).
#[put("/api/players/{id}")]
async fn api_update_player(
    state: State,
    path: Path<PlayerPath>,
    body: Json<UpdatePlayerBody>,
) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match update_player(&mut g, &state.config, path.id, &body.name, body.rating) {
        Ok(()) => HttpResponse::Ok().json(&g.players[&path.id]),
        Err(e) => error_response(&e),
    }
}

/// Delete a player (rejected while bound to an active tournament).
#[delete("/api/players/{id}")]
async fn api_delete_player(state: State, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match delete_player(&mut g, path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Create a tournament over a roster of existing players (4 or 8 of them).
#[post("/api/tournaments")]
async fn api_create_tournament(state: State, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_tournament(&mut g, &state.config, &body.name, &body.player_ids) {
        Ok(id) => HttpResponse::Created().json(&g.tournaments[&id]),
        Err(e) => error_response(&e),
    }
}

/// All tournaments, newest first; filter with ?status=IN_PROGRESS etc.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: State, query: Query<StatusQuery>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournaments = match query.status {
        Some(status) => tournaments_by_status(&g, status),
        None => list_tournaments(&g),
    };
    HttpResponse::Ok().json(tournaments)
}

/// One tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament(path.id) {
        Ok(tournament) => HttpResponse::Ok().json(tournament),
        Err(e) => error_response(&e),
    }
}

/// Start the tournament (Created -> InProgress, round 1 materialized).
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match start_tournament(&mut g, &state.config, path.id) {
        Ok(()) => HttpResponse::Ok().json(&g.tournaments[&path.id]),
        Err(e) => error_response(&e),
    }
}

/// Delete a tournament (only before it starts).
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match delete_tournament(&mut g, path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Standings table, every participant included.
#[get("/api/tournaments/{id}/ranking")]
async fn api_get_ranking(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match ranking(&g, path.id) {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => error_response(&e),
    }
}

/// Rounds of a tournament, round number ascending.
#[get("/api/tournaments/{id}/rounds")]
async fn api_get_rounds(state: State, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = match g.tournament(path.id) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let rounds: Vec<_> = tournament
        .rounds
        .iter()
        .filter_map(|rid| g.rounds.get(rid))
        .collect();
    HttpResponse::Ok().json(rounds)
}

/// Matches of a round, in pairing order.
#[get("/api/rounds/{id}/matches")]
async fn api_get_round_matches(state: State, path: Path<RoundPath>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let round = match g.round(path.id) {
        Ok(r) => r,
        Err(e) => return error_response(&e),
    };
    let matches: Vec<_> = round
        .matches
        .iter()
        .filter_map(|mid| g.matches.get(mid))
        .collect();
    HttpResponse::Ok().json(matches)
}

/// One match by id (404 if not found).
#[get("/api/matches/{id}")]
async fn api_get_match(state: State, path: Path<MatchPath>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.game(path.id) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => error_response(&e),
    }
}

/// Start a pending match.
#[post("/api/matches/{id}/start")]
async fn api_start_match(state: State, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match start_match(&mut g, path.id) {
        Ok(()) => HttpResponse::Ok().json(&g.matches[&path.id]),
        Err(e) => error_response(&e),
    }
}

/// Register a scored event against one of the match's players.
#[post("/api/matches/{id}/events")]
async fn api_register_event(
    state: State,
    path: Path<MatchPath>,
    body: Json<RegisterEventBody>,
) -> HttpResponse {
    let kind = match chess_brawl_web::EventType::parse(&body.event_type) {
        Ok(kind) => kind,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match register_event(&mut g, &state.catalog, path.id, body.player_id, kind) {
        Ok(_) => HttpResponse::Ok().json(&g.matches[&path.id]),
        Err(e) => error_response(&e),
    }
}

/// Events of a match in registration order.
#[get("/api/matches/{id}/events")]
async fn api_get_match_events(state: State, path: Path<MatchPath>) -> HttpResponse {
    let g = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.events_for_match(path.id) {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(e) => error_response(&e),
    }
}

/// Finish a match with an explicit result; may cascade into the next round
/// or the tournament's finalization.
#[post("/api/matches/{id}/finish")]
async fn api_finish_match(
    state: State,
    path: Path<MatchPath>,
    body: Json<FinishMatchBody>,
) -> HttpResponse {
    let outcome = match MatchOutcome::from_parts(body.result, body.winner_id) {
        Ok(outcome) => outcome,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match finish_match(&mut g, &state.config, path.id, outcome) {
        Ok(()) => HttpResponse::Ok().json(&g.matches[&path.id]),
        Err(e) => error_response(&e),
    }
}

/// Event type tags for form population, in catalog order.
#[get("/api/event-types")]
async fn api_event_types(state: State) -> HttpResponse {
    let tags: Vec<&'static str> = state.catalog.list_types().iter().map(|k| k.tag()).collect();
    HttpResponse::Ok().json(tags)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppState {
        store: RwLock::new(Store::new()),
        config: EngineConfig::default(),
        catalog: EventCatalog::default(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_player)
            .service(api_find_player)
            .service(api_list_players)
            .service(api_get_player)
            .service(api_update_player)
            .service(api_delete_player)
            .service(api_create_tournament)
            .service(api_list_tournaments)
            .service(api_get_tournament)
            .service(api_start_tournament)
            .service(api_delete_tournament)
            .service(api_get_ranking)
            .service(api_get_rounds)
            .service(api_get_round_matches)
            .service(api_get_match)
            .service(api_start_match)
            .service(api_register_event)
            .service(api_get_match_events)
            .service(api_finish_match)
            .service(api_event_types)
    })
    .bind(bind)?
    .run()
    .await
}
