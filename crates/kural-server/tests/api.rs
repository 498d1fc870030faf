use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use kural_server::create_router;
use kural_server::state::AppState;

fn app() -> Router {
    create_router(AppState::in_memory().expect("built-in catalog is valid"))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn chat_rejects_empty_message() {
    for payload in [json!({}), json!({ "message": "   " })] {
        let response = app().oneshot(post("/api/chat", payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["kind"], "invalid_input");
    }
}

#[tokio::test]
async fn chat_returns_reply_with_kural_and_entry() {
    let response = app()
        .oneshot(post("/api/chat", json!({ "message": "I am so angry today" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(!body["response"].as_str().unwrap().is_empty());
    assert!(!body["kural"]["tamil"].as_str().unwrap().is_empty());
    assert!(!body["follow_up"].as_str().unwrap().is_empty());
    assert_eq!(body["conversation_entry"]["user"], "I am so angry today");
}

#[tokio::test]
async fn chat_accepts_and_ignores_history() {
    let response = app()
        .oneshot(post(
            "/api/chat",
            json!({ "message": "hello", "history": [{ "user": "x", "bot": "y" }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn emotions_lists_all_ten() {
    let response = app().oneshot(get("/api/emotions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let emotions = body["emotions"].as_array().unwrap();
    assert_eq!(emotions.len(), 10);
    assert!(emotions.contains(&json!("joy")));
}

#[tokio::test]
async fn kurals_by_emotion_returns_the_category() {
    let response = app().oneshot(get("/api/kurals/anger")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["emotion"], "anger");
    assert_eq!(body["kurals"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_emotion_is_not_found() {
    let response = app().oneshot(get("/api/kurals/boredom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn random_kural_carries_its_emotion() {
    let response = app().oneshot(get("/api/random")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(!body["tamil"].as_str().unwrap().is_empty());
    assert!(body["emotion"].is_string());
}

#[tokio::test]
async fn quiz_submit_rejects_empty_answers() {
    let response = app()
        .oneshot(post("/api/quiz/submit", json!({ "answers": {} })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_flow_submit_list_get_analytics() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post(
            "/api/quiz/submit",
            json!({ "answers": { "1": "A", "2": "A", "3": "B" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = app.clone().oneshot(get("/api/quiz/responses")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["total_responses"], 1);
    assert_eq!(body["responses"][0]["session_id"], session_id.as_str());

    let response = app
        .clone()
        .oneshot(get(&format!("/api/quiz/responses/{session_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["response"]["total_questions"], 3);

    let response = app
        .clone()
        .oneshot(get("/api/quiz/responses/no-such-session"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/quiz/analytics")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["analytics"]["total_responses"], 1);
    assert_eq!(body["analytics"]["answer_frequencies"]["Q1_A"], 1);
    assert_eq!(
        body["analytics"]["personality_distribution"]["The Wise Seeker"],
        1
    );
}

#[tokio::test]
async fn feedback_submit_rejects_invalid_rating() {
    let response = app()
        .oneshot(post(
            "/api/feedback/submit",
            json!({ "userMessage": "u", "botResponse": "b", "feedback": "great" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn feedback_flow_submit_list_analytics() {
    let app = app();

    for rating in ["positive", "positive", "positive", "negative"] {
        let response = app
            .clone()
            .oneshot(post(
                "/api/feedback/submit",
                json!({
                    "userMessage": "I feel lost",
                    "botResponse": "a kural",
                    "kural": { "tamil": "அன்பு" },
                    "feedback": rating,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert!(!body["feedback_id"].as_str().unwrap().is_empty());
    }

    let response = app
        .clone()
        .oneshot(get("/api/feedback/responses"))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["total_feedback"], 4);
    assert_eq!(body["feedback"][0]["feedback"], "positive");

    let response = app.oneshot(get("/api/feedback/analytics")).await.unwrap();
    let body = json_body(response).await;
    let analytics = &body["analytics"];
    assert_eq!(analytics["total_feedback"], 4);
    assert_eq!(analytics["positive_feedback"], 3);
    assert_eq!(analytics["negative_feedback"], 1);
    assert_eq!(analytics["feedback_rate"], 75.0);
    assert_eq!(analytics["most_helpful_kurals"][0]["tamil"], "அன்பு");
    assert_eq!(analytics["most_helpful_kurals"][0]["score"], 2);
}
