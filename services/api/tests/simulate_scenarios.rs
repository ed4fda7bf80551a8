/// Integration tests for the simulation endpoint happy paths
///
/// The first three tests replay the demonstration client's valid sample
/// calls; the rest pin down echo and coercion behavior at the HTTP boundary.
mod common;

use axum::http::StatusCode;
use common::test_server;
use serde_json::{json, Value};

#[tokio::test]
async fn test_coin_flip_simulation() {
    let server = test_server();

    let response = server
        .post("/api/v1/simulate")
        .json(&json!({
            "event_type": "coin_flip",
            "num_runs": 800,
            "odds_parameters": "heads"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["event_type"], json!("coin_flip"));
    assert_eq!(body["total_runs"], json!(800));
    assert_eq!(body["target_outcome"], json!("heads"));
    assert_eq!(body["theoretical_probability"], json!(0.5));

    let success = body["success_count"].as_u64().unwrap();
    let failure = body["failure_count"].as_u64().unwrap();
    assert_eq!(success + failure, 800);

    let empirical = body["empirical_probability"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&empirical));
}

#[tokio::test]
async fn test_dice_roll_simulation() {
    let server = test_server();

    let response = server
        .post("/api/v1/simulate")
        .json(&json!({
            "event_type": "dice_roll",
            "num_runs": 600,
            "odds_parameters": 3
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["event_type"], json!("dice_roll"));
    assert_eq!(body["total_runs"], json!(600));
    // The echo preserves the caller's integer, not a stringified form
    assert_eq!(body["target_outcome"], json!(3));
    assert_eq!(body["theoretical_probability"], json!(0.166667));

    let success = body["success_count"].as_u64().unwrap();
    let failure = body["failure_count"].as_u64().unwrap();
    assert_eq!(success + failure, 600);
}

#[tokio::test]
async fn test_card_deck_simulation() {
    let server = test_server();

    let response = server
        .post("/api/v1/simulate")
        .json(&json!({
            "event_type": "card_deck",
            "num_runs": 520,
            "odds_parameters": "Ace of Spades"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["event_type"], json!("card_deck"));
    assert_eq!(body["total_runs"], json!(520));
    assert_eq!(body["target_outcome"], json!("Ace of Spades"));
    assert_eq!(body["theoretical_probability"], json!(0.019231));

    let success = body["success_count"].as_u64().unwrap();
    let failure = body["failure_count"].as_u64().unwrap();
    assert_eq!(success + failure, 520);
}

#[tokio::test]
async fn test_card_target_casing_is_irrelevant() {
    let server = test_server();

    let response = server
        .post("/api/v1/simulate")
        .json(&json!({
            "event_type": "card_deck",
            "num_runs": 52,
            "odds_parameters": "ace of spades"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["target_outcome"], json!("ace of spades"));
    assert_eq!(body["theoretical_probability"], json!(0.019231));
}

#[tokio::test]
async fn test_num_runs_accepts_numeric_string() {
    let server = test_server();

    let response = server
        .post("/api/v1/simulate")
        .json(&json!({
            "event_type": "coin_flip",
            "num_runs": "250",
            "odds_parameters": "tails"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total_runs"], json!(250));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], json!("healthy"));
    assert!(body.get("timestamp").is_some());
}
