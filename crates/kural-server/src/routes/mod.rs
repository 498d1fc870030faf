pub mod chat;
pub mod feedback;
pub mod health;
pub mod kurals;
pub mod quiz;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/emotions", get(kurals::list_emotions))
        .route("/kurals/{emotion}", get(kurals::kurals_by_emotion))
        .route("/random", get(kurals::random_kural))
        .route("/health", get(health::health))
        .nest("/quiz", quiz::router())
        .nest("/feedback", feedback::router())
}
