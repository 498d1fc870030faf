use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kural_core::FeedbackAnalytics;
use kural_schema::{FeedbackRecord, KuralRef};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit))
        .route("/responses", get(list_responses))
        .route("/analytics", get(analytics))
}

/// Feedback submission as the frontend sends it, camelCase fields included.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub bot_response: String,
    #[serde(default)]
    pub kural: Option<KuralRef>,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub feedback_id: String,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub total_feedback: usize,
    pub feedback: Vec<FeedbackRecord>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub analytics: AnalyticsBody,
}

#[derive(Serialize)]
pub struct AnalyticsBody {
    #[serde(flatten)]
    pub analytics: FeedbackAnalytics,
    pub timestamp: DateTime<Utc>,
}

async fn submit(
    State(state): State<AppState>,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let feedback_id = state
        .feedback
        .submit(
            &body.user_message,
            &body.bot_response,
            body.kural,
            &body.feedback,
            body.timestamp,
        )
        .await?;

    Ok(Json(SubmitResponse {
        success: true,
        feedback_id,
        message: "Feedback submitted successfully",
        timestamp: Utc::now(),
    }))
}

async fn list_responses(
    State(state): State<AppState>,
) -> Result<Json<ListResponse>, ApiError> {
    let feedback = state.feedback.all().await?;
    Ok(Json(ListResponse {
        success: true,
        total_feedback: feedback.len(),
        feedback,
        timestamp: Utc::now(),
    }))
}

async fn analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let analytics = state.feedback.analytics().await?;
    Ok(Json(AnalyticsResponse {
        success: true,
        analytics: AnalyticsBody {
            analytics,
            timestamp: Utc::now(),
        },
    }))
}
