use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advisor::SkillsGap;
use crate::errors::AppError;
use crate::ranking::RankingResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerAdviceRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CareerAdviceResponse {
    pub recommendations: RankingResult,
}

#[derive(Debug, Deserialize)]
pub struct SkillsGapRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career: String,
}

/// POST /api/chatbot/career-advice
pub async fn handle_career_advice(
    State(state): State<AppState>,
    Json(req): Json<CareerAdviceRequest>,
) -> Result<Json<CareerAdviceResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }

    let recommendations = state.engine.career_advice(&req.message);
    info!(
        returned = recommendations.recommendations.len(),
        "career advice generated"
    );
    Ok(Json(CareerAdviceResponse { recommendations }))
}

/// POST /api/chatbot/skills-gap
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Json(req): Json<SkillsGapRequest>,
) -> Result<Json<SkillsGap>, AppError> {
    let gap = state
        .engine
        .skills_gap(&req.skills, &req.career)
        .ok_or_else(|| AppError::NotFound(format!("Career '{}' not found", req.career)))?;

    info!(
        career = %gap.career,
        skill_match_percentage = gap.skill_match_percentage,
        "skills gap analyzed"
    );
    Ok(Json(gap))
}
