use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/avaliar", post(handlers::rate))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/avaliacoes", get(handlers::get_history))
        .route("/api/export", get(handlers::export))
        .with_state(state)
}
