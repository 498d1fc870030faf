use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kural_core::QuizAnalytics;
use kural_schema::QuizSubmission;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit))
        .route("/responses", get(list_responses))
        .route("/responses/{session_id}", get(get_response))
        .route("/analytics", get(analytics))
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub session_id: String,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub total_responses: usize,
    pub responses: Vec<QuizSubmission>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct GetResponse {
    pub success: bool,
    pub response: QuizSubmission,
}

#[derive(Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub analytics: AnalyticsBody,
}

#[derive(Serialize)]
pub struct AnalyticsBody {
    #[serde(flatten)]
    pub analytics: QuizAnalytics,
    pub timestamp: DateTime<Utc>,
}

async fn submit(
    State(state): State<AppState>,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let session_id = state.quiz.submit(body.answers).await?;
    Ok(Json(SubmitResponse {
        success: true,
        session_id,
        message: "Quiz answers submitted successfully",
        timestamp: Utc::now(),
    }))
}

async fn list_responses(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, ApiError> {
    let responses = state.quiz.all().await?;
    Ok(Json(ListResponse {
        success: true,
        total_responses: responses.len(),
        responses,
        timestamp: Utc::now(),
    }))
}

async fn get_response(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<GetResponse>, ApiError> {
    let response = state.quiz.get(&session_id).await?;
    Ok(Json(GetResponse {
        success: true,
        response,
    }))
}

async fn analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let analytics = state.quiz.analytics().await?;
    Ok(Json(AnalyticsResponse {
        success: true,
        analytics: AnalyticsBody {
            analytics,
            timestamp: Utc::now(),
        },
    }))
}
