//! API Integration Tests
//!
//! Serves the REST API in-process over the in-memory store and talks to it
//! over HTTP. Scores are produced by running events through the engine, the
//! same way the bot process fills the table the dashboard reads.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestBot, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let bot = TestBot::new().unwrap();
    let server = TestServer::start(bot.repo.clone()).await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let body: HealthBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let bot = TestBot::new().unwrap();
    let server = TestServer::start(bot.repo.clone()).await.expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Reputation Tests
// ============================================================================

#[tokio::test]
async fn test_reputations_empty() {
    let bot = TestBot::new().unwrap();
    let server = TestServer::start(bot.repo.clone()).await.expect("Failed to start server");

    let response = server.get("/reputations").await.unwrap();
    let rows: Vec<ReputationRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_reputations_sorted_descending() {
    let bot = TestBot::new().unwrap();

    // carol 1, alice 3, bob 2
    bot.handle(reply_text(&alice(), &carol(), "спасибо")).await.unwrap();
    for _ in 0..3 {
        bot.handle(reply_text(&bob(), &alice(), "спс")).await.unwrap();
    }
    for _ in 0..2 {
        bot.handle(reply_sticker(&carol(), &bob(), "👍")).await.unwrap();
    }

    let server = TestServer::start(bot.repo.clone()).await.expect("Failed to start server");
    let response = server.get("/reputations").await.unwrap();
    let rows: Vec<ReputationRow> = assert_json(response, StatusCode::OK).await.unwrap();

    let scores: Vec<(&str, i64)> = rows
        .iter()
        .map(|r| (r.telegram_id.as_str(), r.reputation))
        .collect();
    assert_eq!(scores, vec![("101", 3), ("202", 2), ("303", 1)]);

    let bob_row = &rows[1];
    assert_eq!(bob_row.username, "bob");
    assert_eq!(bob_row.fullname, "Bob Builder");
    assert_eq!(bob_row.user_avatar, "");
    assert!(bob_row.id > 0);
    assert!(bob_row.updated_at >= bob_row.created_at);
}

#[tokio::test]
async fn test_reputations_reflect_departures() {
    let bot = TestBot::new().unwrap();
    bot.handle(reply_text(&alice(), &bob(), "спасибо")).await.unwrap();
    bot.handle(reply_text(&bob(), &carol(), "спасибо")).await.unwrap();
    bot.handle(left(&bob())).await.unwrap();

    let server = TestServer::start(bot.repo.clone()).await.expect("Failed to start server");
    let response = server.get("/reputations").await.unwrap();
    let rows: Vec<ReputationRow> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].telegram_id, "303");
}

#[tokio::test]
async fn test_reputations_use_camel_case() {
    let bot = TestBot::new().unwrap();
    bot.handle(reply_text(&alice(), &bob(), "спасибо")).await.unwrap();

    let server = TestServer::start(bot.repo.clone()).await.expect("Failed to start server");
    let response = server.get("/reputations").await.unwrap();
    let rows: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    let row = &rows[0];
    for key in ["telegramId", "userAvatar", "createdAt", "updatedAt"] {
        assert!(row.get(key).is_some(), "missing {key}");
    }
    assert!(row.get("telegram_id").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let bot = TestBot::new().unwrap();
    let server = TestServer::start(bot.repo.clone()).await.expect("Failed to start server");

    let response = server.get("/reputations/202").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
