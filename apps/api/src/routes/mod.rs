pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::analysis::handlers as analysis;
use crate::ranking::handlers as ranking;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/career/recommend", post(ranking::handle_recommend))
        .route(
            "/api/resume/analyze",
            post(analysis::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/chatbot/career-advice",
            post(advisor::handle_career_advice),
        )
        .route("/api/chatbot/skills-gap", post(advisor::handle_skills_gap))
        .with_state(state)
}
