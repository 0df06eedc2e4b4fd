use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use hmac::{Hmac, Mac};
use job_assistant_backend::utils::telegram_auth::verify_init_data;
use serde_json::Value as JsonValue;
use sha2::Sha256;
use tower::ServiceExt;

type HmacSha256 = Hmac<Sha256>;

const BOT_TOKEN: &str = "test-bot-token";

/// Builds an initData string the way the Telegram client does: the hash is an
/// HMAC over the decoded key/value pairs sorted by key, and the values are
/// percent-encoded into the query string afterwards.
fn signed_init_data(pairs: &[(&str, &str)], bot_token: &str) -> String {
    let mut sorted = pairs.to_vec();
    sorted.sort_by_key(|(key, _)| *key);
    let data_check_string = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n");

    let mut secret_mac = HmacSha256::new_from_slice(b"WebAppData").unwrap();
    secret_mac.update(bot_token.as_bytes());
    let secret_key = secret_mac.finalize().into_bytes();
    let mut mac = HmacSha256::new_from_slice(&secret_key).unwrap();
    mac.update(data_check_string.as_bytes());
    let hash = hex::encode(mac.finalize().into_bytes());

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.append_pair("hash", &hash);
    serializer.finish()
}

fn sample_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("auth_date", "1724700000"),
        ("query_id", "AAHdF6IQAAAAAN0XohDhrOrc"),
        (
            "user",
            r#"{"id":12345,"first_name":"Anna","username":"anna_dev","language_code":"ru"}"#,
        ),
    ]
}

#[test]
fn accepts_init_data_with_percent_encoded_user_payload() {
    let init_data = signed_init_data(&sample_pairs(), BOT_TOKEN);

    let user = verify_init_data(&init_data, BOT_TOKEN).expect("valid init data");
    assert_eq!(user.id, 12345);
    assert_eq!(user.username.as_deref(), Some("anna_dev"));
}

#[test]
fn rejects_a_tampered_hash() {
    let init_data = signed_init_data(&sample_pairs(), BOT_TOKEN);
    let last = init_data.chars().last().unwrap();
    let flipped = if last == '0' { '1' } else { '0' };
    let tampered = format!("{}{}", &init_data[..init_data.len() - 1], flipped);

    assert!(verify_init_data(&tampered, BOT_TOKEN).is_none());
}

#[test]
fn rejects_init_data_signed_with_another_bot_token() {
    let init_data = signed_init_data(&sample_pairs(), "some-other-bot");
    assert!(verify_init_data(&init_data, BOT_TOKEN).is_none());
}

#[test]
fn rejects_init_data_with_a_modified_user_field() {
    // Re-encode with a different user id but keep the original signature.
    let init_data = signed_init_data(&sample_pairs(), BOT_TOKEN);
    let forged = init_data.replace("12345", "99999");
    assert!(verify_init_data(&forged, BOT_TOKEN).is_none());
}

#[test]
fn rejects_init_data_without_a_hash() {
    assert!(verify_init_data("auth_date=1724700000&query_id=abc", BOT_TOKEN).is_none());
}

#[tokio::test]
async fn telegram_auth_endpoint_issues_a_token() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("TELEGRAM_BOT_TOKEN", BOT_TOKEN);
    env::set_var("API_RPS", "100");
    env::set_var("PUBLIC_RPS", "100");
    job_assistant_backend::config::init_config().expect("init config");

    let app = Router::new().route(
        "/api/auth/telegram",
        post(job_assistant_backend::routes::auth::telegram_auth),
    );

    let init_data = signed_init_data(&sample_pairs(), BOT_TOKEN);
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/telegram")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "init_data": init_data }).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["user_id"], "12345");
    assert!(!body["token"].as_str().unwrap().is_empty());

    // Same endpoint, broken signature: unauthorized.
    let init_data = signed_init_data(&sample_pairs(), "some-other-bot");
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/telegram")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "init_data": init_data }).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
