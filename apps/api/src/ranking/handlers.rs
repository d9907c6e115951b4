use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{CandidateForm, CandidateProfile};
use crate::ranking::RankingResult;
use crate::state::AppState;

/// POST /api/career/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(form): Json<CandidateForm>,
) -> Result<Json<RankingResult>, AppError> {
    let profile = CandidateProfile::from_form(&form);
    let result = state.engine.recommend(&profile);

    info!(
        skills = profile.skills.len(),
        experience_years = profile.experience_years,
        top = result.recommendations.first().map(|r| r.career.as_str()).unwrap_or("-"),
        "career recommendations generated"
    );
    Ok(Json(result))
}
