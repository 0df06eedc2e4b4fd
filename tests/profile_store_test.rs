use job_assistant_backend::models::profile::{ConversationTurn, Language, Stage, UserProfile};
use job_assistant_backend::services::profile_store::ProfileStore;
use chrono::Utc;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}

fn sample_profile(user_id: &str) -> UserProfile {
    let mut profile = UserProfile::new(user_id, Language::En);
    profile.stage = Stage::Skills;
    profile
        .collected_data
        .insert("profession".to_string(), json!("python developer"));
    profile
        .collected_data
        .insert("preferred_city".to_string(), json!("Berlin"));
    profile.conversation_history.push(ConversationTurn {
        timestamp: Utc::now(),
        stage: Stage::Initial,
        ai_message: "Hello!".to_string(),
        user_message: "I am a python developer in Berlin".to_string(),
        extracted_data: profile.collected_data.clone(),
    });
    profile
}

#[tokio::test]
async fn save_then_load_round_trips_the_whole_document() {
    let store = ProfileStore::new(test_pool().await);
    let profile = sample_profile("42");

    store.save(&profile).await.expect("save");
    let loaded = store.load("42").await.expect("load").expect("present");

    assert_eq!(loaded.user_id, profile.user_id);
    assert_eq!(loaded.language, profile.language);
    assert_eq!(loaded.stage, profile.stage);
    assert_eq!(loaded.collected_data, profile.collected_data);
    assert_eq!(loaded.conversation_history.len(), 1);
    assert_eq!(
        loaded.conversation_history[0].user_message,
        profile.conversation_history[0].user_message
    );
}

#[tokio::test]
async fn saving_twice_keeps_the_last_write() {
    let store = ProfileStore::new(test_pool().await);
    let mut profile = sample_profile("42");
    store.save(&profile).await.expect("first save");

    profile.stage = Stage::Complete;
    profile
        .collected_data
        .insert("german_level".to_string(), json!("B1"));
    store.save(&profile).await.expect("second save");

    let loaded = store.load("42").await.expect("load").expect("present");
    assert_eq!(loaded.stage, Stage::Complete);
    assert_eq!(loaded.collected_data.get("german_level"), Some(&json!("B1")));
}

#[tokio::test]
async fn load_for_unknown_user_is_none() {
    let store = ProfileStore::new(test_pool().await);
    assert!(store.load("nobody").await.expect("load").is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_row_existed() {
    let store = ProfileStore::new(test_pool().await);
    let profile = sample_profile("42");
    store.save(&profile).await.expect("save");

    assert!(store.delete("42").await.expect("first delete"));
    assert!(store.load("42").await.expect("load").is_none());
    assert!(!store.delete("42").await.expect("second delete"));
}

#[tokio::test]
async fn profiles_are_isolated_per_user() {
    let store = ProfileStore::new(test_pool().await);
    store.save(&sample_profile("1")).await.expect("save 1");
    store.save(&sample_profile("2")).await.expect("save 2");

    assert!(store.delete("1").await.expect("delete 1"));
    let remaining = store.load("2").await.expect("load 2").expect("present");
    assert_eq!(remaining.user_id, "2");
}
