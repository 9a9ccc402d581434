use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use seq2seq_sim::engine::{SimConfig, Simulation, Snapshot};
use seq2seq_sim::error::SimError;
use seq2seq_sim::gateway::{GeminiProvider, MockGateway, MockMode, TranslationGateway};
use seq2seq_sim::language::Language;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub from: Language,
    pub to: Language,
}

#[derive(Deserialize)]
pub struct SpeedRequest {
    pub ms: u64,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub sim: Simulation,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let config = SimConfig::default();
    let use_mock = env::args().any(|a| a == "--mock");
    let (gateway, credential): (Arc<dyn TranslationGateway>, Option<String>) = if use_mock {
        info!("using the mock gateway (word-reversal translations)");
        (
            Arc::new(MockGateway::new(MockMode::Reverse)),
            Some("mock".to_string()),
        )
    } else {
        (
            Arc::new(GeminiProvider::new(config.request_timeout)?),
            env::var("GEMINI_API_KEY").ok(),
        )
    };
    let state = AppState {
        sim: Simulation::new(gateway, credential, config),
    };

    info!("Starting seq2seq simulation server");

    let app = Router::new()
        .route("/", get(serve_index))
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/translate", post(start_translation))
        .route("/api/reset", post(reset))
        .route("/api/pause", post(toggle_pause))
        .route("/api/step", post(step))
        .route("/api/speed", post(set_speed))
        .route("/api/swap", post(swap_languages))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    info!("Server running at http://127.0.0.1:3000");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn get_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.sim.snapshot())
}

async fn start_translation(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Translating '{}' from {} to {}",
        &request.text, request.from, request.to
    );

    let translated = state
        .sim
        .start_translation(&request.text, request.from, request.to)
        .await
        .map_err(|e| {
            let status = match &e {
                SimError::EmptyInput | SimError::MissingCredential | SimError::NotIdle(_) => {
                    StatusCode::BAD_REQUEST
                }
                SimError::Gateway(_) => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok(Json(TranslateResponse { translated }))
}

async fn reset(State(state): State<AppState>) -> Json<Snapshot> {
    state.sim.reset();
    Json(state.sim.snapshot())
}

async fn toggle_pause(State(state): State<AppState>) -> Json<Snapshot> {
    state.sim.toggle_pause();
    Json(state.sim.snapshot())
}

async fn step(State(state): State<AppState>) -> Json<Snapshot> {
    state.sim.step();
    Json(state.sim.snapshot())
}

async fn set_speed(
    State(state): State<AppState>,
    Json(request): Json<SpeedRequest>,
) -> Json<Snapshot> {
    state.sim.set_speed(request.ms);
    Json(state.sim.snapshot())
}

async fn swap_languages(State(state): State<AppState>) -> Json<Snapshot> {
    state.sim.swap_languages();
    Json(state.sim.snapshot())
}
