use anyhow::anyhow;
use axum::extract::{Path, State};
use axum::Json;
use rand::seq::SliceRandom;
use serde::Serialize;

use kural_core::CoreError;
use kural_schema::{Emotion, Kural};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct EmotionsResponse {
    pub emotions: Vec<Emotion>,
}

#[derive(Serialize)]
pub struct KuralsResponse {
    pub emotion: Emotion,
    pub kurals: Vec<Kural>,
}

/// A kural annotated with its owning emotion.
#[derive(Serialize)]
pub struct RandomKuralResponse {
    #[serde(flatten)]
    pub kural: Kural,
    pub emotion: Emotion,
}

pub async fn list_emotions(State(state): State<AppState>) -> Json<EmotionsResponse> {
    Json(EmotionsResponse {
        emotions: state.catalog.emotions().to_vec(),
    })
}

pub async fn kurals_by_emotion(
    State(state): State<AppState>,
    Path(emotion): Path<String>,
) -> Result<Json<KuralsResponse>, ApiError> {
    let parsed: Emotion = emotion
        .parse()
        .map_err(|_| CoreError::NotFound(format!("emotion {emotion}")))?;

    Ok(Json(KuralsResponse {
        emotion: parsed,
        kurals: state.catalog.kurals_for(parsed).to_vec(),
    }))
}

pub async fn random_kural(
    State(state): State<AppState>,
) -> Result<Json<RandomKuralResponse>, ApiError> {
    let (emotion, kural) = state
        .catalog
        .all()
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| CoreError::Internal(anyhow!("catalog is empty")))?;

    Ok(Json(RandomKuralResponse { kural, emotion }))
}
