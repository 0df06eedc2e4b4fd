use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn bearer(user_id: &str) -> String {
    let token = job_assistant_backend::utils::token::issue_jwt(user_id, "test_secret_key")
        .expect("issue token");
    format!("Bearer {}", token)
}

async fn send(app: &Router, method: &str, uri: &str, auth: Option<&str>, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn recruiter_flow_end_to_end() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("TELEGRAM_BOT_TOKEN", "test-bot-token");
    env::set_var("API_RPS", "100");
    env::set_var("PUBLIC_RPS", "100");
    // No provider keys and no search URL: every AI call takes the fallback
    // path, so the whole flow runs offline.
    env::set_var("GEMINI_API_KEY", "");
    env::set_var("OPENAI_API_KEY", "");
    env::set_var("ANTHROPIC_API_KEY", "");
    env::set_var("JOB_SEARCH_URL", "");

    job_assistant_backend::config::init_config().expect("init config");
    let pool = job_assistant_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    let app_state = job_assistant_backend::AppState::new(pool);
    let app = Router::new()
        .route(
            "/api/recruiter/start",
            post(job_assistant_backend::routes::recruiter::start_conversation),
        )
        .route(
            "/api/recruiter/continue",
            post(job_assistant_backend::routes::recruiter::continue_conversation),
        )
        .route(
            "/api/recruiter/profile",
            get(job_assistant_backend::routes::recruiter::get_profile)
                .delete(job_assistant_backend::routes::recruiter::delete_profile),
        )
        .route(
            "/api/recruiter/recommendations",
            get(job_assistant_backend::routes::recruiter::get_recommendations),
        )
        .route(
            "/api/documents/analyze",
            post(job_assistant_backend::routes::analysis::analyze_document),
        )
        .layer(axum::middleware::from_fn(
            job_assistant_backend::middleware::auth::require_bearer_auth,
        ))
        .with_state(app_state);

    let auth = bearer("12345");

    // Unauthenticated requests are rejected before reaching any handler.
    let (status, _) = send(&app, "POST", "/api/recruiter/start", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Start: fresh profile in the initial stage.
    let (status, body) = send(
        &app,
        "POST",
        "/api/recruiter/start",
        Some(&auth),
        Some(json!({"language": "ru"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stage"], "initial");
    assert!(body["message"].as_str().unwrap().len() > 0);
    assert!(body.get("recommendations").is_none());

    // First reply adds profession + city: two fields, advance to skills.
    let (status, body) = send(
        &app,
        "POST",
        "/api/recruiter/continue",
        Some(&auth),
        Some(json!({"message": "я python developer в Берлине"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stage"], "skills");
    assert_eq!(body["collected_data"]["profession"], "python developer");
    assert_eq!(body["collected_data"]["preferred_city"], "Berlin");

    // Second reply adds skills + level: four fields total, profile complete,
    // recommendations come back with the turn.
    let (status, body) = send(
        &app,
        "POST",
        "/api/recruiter/continue",
        Some(&auth),
        Some(json!({"message": "знаю python и docker, уровень b1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stage"], "complete");
    assert_eq!(body["collected_data"]["german_level"], "B1");
    let recommendations = body["recommendations"].as_array().expect("recommendations");
    assert_eq!(recommendations.len(), 3);
    let scores: Vec<i64> = recommendations
        .iter()
        .map(|r| r["compatibility"]["score"].as_i64().unwrap())
        .collect();
    assert_eq!(scores, vec![85, 80, 75]);

    // Refresh endpoint returns the same demo postings for a complete profile.
    let (status, body) = send(&app, "GET", "/api/recruiter/recommendations", Some(&auth), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);

    // Profile round-trip over HTTP: both turns recorded.
    let (status, body) = send(&app, "GET", "/api/recruiter/profile", Some(&auth), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "12345");
    assert_eq!(body["conversation_history"].as_array().unwrap().len(), 2);

    // Document analysis degrades to demo content without a provider key.
    let (status, body) = send(
        &app,
        "POST",
        "/api/documents/analyze",
        Some(&auth),
        Some(json!({"text": "Sehr geehrte Damen und Herren...", "language": "ru"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["summary"].as_str().unwrap().len() > 0);

    // Explicit delete, then continuing demands a restart.
    let (status, _) = send(&app, "DELETE", "/api/recruiter/profile", Some(&auth), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        "POST",
        "/api/recruiter/continue",
        Some(&auth),
        Some(json!({"message": "привет"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["restart_required"], true);
}
