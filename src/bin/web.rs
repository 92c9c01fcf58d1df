//! Single binary web server: JSON REST API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! INACTIVITY_TIMEOUT_HOURS, DEFAULT_MAX_ROUNDS.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use petanque_tournament::{
    standings_csv, MatchId, RandomIds, ServerConfig, TeamId, Tournament, TournamentEngine,
    TournamentError, TournamentId, TournamentType,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: current snapshot + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Mutations hold the write lock, so there is a
/// single writer per tournament at any time.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;
type Engine = Data<TournamentEngine<RandomIds>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct TournamentTypeInfo {
    id: TournamentType,
    name: &'static str,
    players_per_team: usize,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(default)]
    tournament_type: TournamentType,
    #[serde(default)]
    max_rounds: Option<u32>,
    #[serde(default)]
    terrain_count: Option<u32>,
}

#[derive(Deserialize)]
struct AddTeamBody {
    players: Vec<String>,
}

#[derive(Deserialize)]
struct ScoreBody {
    score_1: u32,
    score_2: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team_id: TeamId,
}

#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

#[derive(Deserialize)]
struct TournamentRoundPath {
    id: TournamentId,
    round: u32,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `op` on the stored snapshot and replace it on success. Refreshes last_activity.
fn update_tournament<F>(state: &AppState, id: TournamentId, op: F) -> HttpResponse
where
    F: FnOnce(&Tournament) -> Result<Tournament, TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match op(&entry.tournament) {
        Ok(next) => {
            entry.tournament = next;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => bad_request(e),
    }
}

/// Run a read-only query on the stored snapshot. Refreshes last_activity.
fn read_tournament<F>(state: &AppState, id: TournamentId, query: F) -> HttpResponse
where
    F: FnOnce(&Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            query(&entry.tournament)
        }
        None => not_found(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "petanque-tournament",
    })
}

#[get("/api/tournament-types")]
async fn api_tournament_types() -> HttpResponse {
    let types: Vec<TournamentTypeInfo> = TournamentType::ALL
        .iter()
        .map(|&t| TournamentTypeInfo {
            id: t,
            name: t.display_name(),
            players_per_team: t.players_per_team(),
        })
        .collect();
    HttpResponse::Ok().json(types)
}

/// Create a tournament in Setup (client stores the id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    engine: Engine,
    config: Data<ServerConfig>,
    body: Json<CreateTournamentBody>,
) -> HttpResponse {
    let body = body.into_inner();
    let settings = config.tournament_settings(body.max_rounds, body.terrain_count);
    let tournament = engine.create_tournament(body.name.trim(), body.tournament_type, settings);
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {}", id);
    response
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Add a team (Setup only). Team size must match the tournament type.
#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(
    state: AppState,
    engine: Engine,
    path: Path<TournamentPath>,
    body: Json<AddTeamBody>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        let team = engine.create_team(&body.players[..], t.tournament_type.players_per_team())?;
        let mut next = t.clone();
        next.add_team(team)?;
        Ok(next)
    })
}

/// Remove a team (Setup only).
#[delete("/api/tournaments/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<TournamentTeamPath>) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        let mut next = t.clone();
        next.remove_team(path.team_id)?;
        Ok(next)
    })
}

/// Start the tournament (Setup -> Active, round 1 generated).
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(
    state: AppState,
    engine: Engine,
    path: Path<TournamentPath>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| engine.start_tournament(t))
}

/// Record the final score of a match.
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_record_score(
    state: AppState,
    engine: Engine,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        engine.record_result(t, path.match_id, body.score_1, body.score_2)
    })
}

/// Generate the next round (or complete the tournament).
#[post("/api/tournaments/{id}/rounds/advance")]
async fn api_advance_round(
    state: AppState,
    engine: Engine,
    path: Path<TournamentPath>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| engine.advance_round(t))
}

/// End the tournament after the current round.
#[post("/api/tournaments/{id}/finish")]
async fn api_finish_tournament(
    state: AppState,
    engine: Engine,
    path: Path<TournamentPath>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| engine.finish(t))
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, engine: Engine, path: Path<TournamentPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| HttpResponse::Ok().json(engine.rankings(t)))
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| match standings_csv(t) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            log::error!("CSV export failed for {}: {}", t.id, e);
            HttpResponse::InternalServerError().body("export error")
        }
    })
}

#[get("/api/tournaments/{id}/rounds/{round}/complete")]
async fn api_round_complete(
    state: AppState,
    engine: Engine,
    path: Path<TournamentRoundPath>,
) -> HttpResponse {
    read_tournament(&state, path.id, |t| {
        HttpResponse::Ok().json(serde_json::json!({
            "round": path.round,
            "complete": engine.is_round_complete(t, path.round),
        }))
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));
    let engine: Engine = Data::new(TournamentEngine::new(RandomIds));
    let inactivity_timeout = config.inactivity_timeout;
    let config = Data::new(config);

    // Background task: every 30 minutes, remove tournaments inactive past the timeout
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(engine.clone())
            .app_data(config.clone())
            .service(api_health)
            .service(api_tournament_types)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_team)
            .service(api_remove_team)
            .service(api_start_tournament)
            .service(api_record_score)
            .service(api_advance_round)
            .service(api_finish_tournament)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_round_complete)
    })
    .bind(bind)?
    .run()
    .await
}
