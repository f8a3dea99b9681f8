//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::compatibility::{ScoreBreakdown, MAX_SCORE};
use crate::matching::ranking::{rank_postings, RankOptions, RankedPosting};
use crate::matching::strength::MatchStrength;
use crate::models::{CandidateProfile, JobPosting};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub candidate: CandidateProfile,
    pub job: JobPosting,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub strength: MatchStrength,
    pub badge: Option<&'static str>,
    pub breakdown: ScoreBreakdown,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub candidate: CandidateProfile,
    pub jobs: Vec<JobPosting>,
    pub min_score: Option<u32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<RankedPosting>,
    pub total_considered: usize,
    pub total_matched: usize,
    pub scorer_backend: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one posting for a candidate and returns the component breakdown.
/// Backs the job detail view.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let breakdown = state.scorer.score(&request.candidate, &request.job);
    let strength = MatchStrength::from_score(breakdown.overall_score);

    debug!(
        score = breakdown.overall_score,
        profile_present = breakdown.profile_present,
        "Scored job posting"
    );

    Json(ScoreResponse {
        score: breakdown.overall_score,
        strength,
        badge: strength.badge(),
        breakdown,
        scorer_backend: state.scorer.backend(),
    })
}

/// POST /api/v1/match/rank
///
/// Ranks a loaded list of postings best-first for a candidate.
/// `min_score` falls back to the configured default when omitted.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let options = validate_rank_request(&request, &state)?;

    let ranked = rank_postings(
        state.scorer.as_ref(),
        &request.candidate,
        request.jobs,
        &options,
    );

    Ok(Json(RankResponse {
        results: ranked.results,
        total_considered: ranked.total_considered,
        total_matched: ranked.total_matched,
        scorer_backend: state.scorer.backend(),
    }))
}

fn validate_rank_request(request: &RankRequest, state: &AppState) -> Result<RankOptions, AppError> {
    if request.jobs.len() > state.config.max_rank_batch {
        return Err(AppError::Validation(format!(
            "jobs may contain at most {} postings, got {}",
            state.config.max_rank_batch,
            request.jobs.len()
        )));
    }

    let min_score = request.min_score.or(state.config.min_match_score);
    if let Some(score) = min_score {
        if score > MAX_SCORE {
            return Err(AppError::Validation(format!(
                "min_score must be between 0 and {MAX_SCORE}, got {score}"
            )));
        }
    }

    if request.limit == Some(0) {
        return Err(AppError::Validation("limit must be greater than zero".to_string()));
    }

    Ok(RankOptions {
        min_score,
        limit: request.limit,
    })
}
