mod common;

use common::*;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn create_room_requires_identity() {
    let server = spawn_test_server().await;
    let client = server.client();

    let body = expect_json(
        client.post("create_room", json!({})).await,
        StatusCode::FORBIDDEN,
    )
    .await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn created_room_waits_for_opponent() {
    let server = spawn_test_server().await;
    let alice = server.client();
    alice.login("Alice", "🦊").await;

    let code = alice.create_room().await;
    assert_eq!(code.len(), 4);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let game = alice.status(&code).await;
    assert_eq!(game["status"], "WAITING");
    assert_eq!(game["player_one"]["name"], "Alice");
    assert!(game["player_two"].is_null());
}

#[tokio::test]
async fn join_returns_both_players() {
    let server = spawn_test_server().await;
    let alice = server.client();
    alice.login("Alice", "🦊").await;
    let bob = server.client();
    bob.login("Bob", "🐼").await;

    let code = alice.create_room().await;
    let body = expect_json(bob.join_room(&code.to_lowercase()).await, StatusCode::OK).await;

    assert_eq!(body["room_code"], code);
    assert_eq!(body["player_one"]["name"], "Alice");
    assert_eq!(body["player_two"]["avatar"], "🐼");
    assert_eq!(alice.status(&code).await["status"], "PLAYER_ONE_TURN");
}

#[tokio::test]
async fn join_errors_map_to_status_codes() {
    let server = spawn_test_server().await;
    let (alice, _bob, code) = joined_room(&server).await;

    let response = alice.join_room("ZZZZ").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = alice.join_room(&code).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let carol = server.client();
    carol.login("Carol", "🐙").await;
    let body = expect_json(carol.join_room(&code).await, StatusCode::CONFLICT).await;
    assert_eq!(body["message"], "This room is already full.");

    let anonymous = server.client();
    let response = anonymous.join_room(&code).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn full_round_then_reset() {
    let server = spawn_test_server().await;
    let (alice, bob, code) = joined_room(&server).await;

    let body = expect_json(alice.submit_move(&code, "rock").await, StatusCode::OK).await;
    assert_eq!(body["success"], true);

    let game = alice.status(&code).await;
    assert_eq!(game["status"], "PLAYER_TWO_TURN");
    assert_eq!(game["move_one"], "rock");

    expect_json(bob.submit_move(&code, "scissors").await, StatusCode::OK).await;

    let game = bob.status(&code).await;
    assert_eq!(game["status"], "RESOLVED");
    assert_eq!(game["move_one"], "rock");
    assert_eq!(game["move_two"], "scissors");
    assert_eq!(game["result"], "win");

    expect_json(
        bob.post("reset_round", json!({ "room_code": code })).await,
        StatusCode::OK,
    )
    .await;

    let game = alice.status(&code).await;
    assert_eq!(game["status"], "PLAYER_ONE_TURN");
    assert!(game["move_one"].is_null());
    assert!(game["move_two"].is_null());
    assert!(game["result"].is_null());
}

#[tokio::test]
async fn second_mover_cannot_see_first_move() {
    let server = spawn_test_server().await;
    let (alice, bob, code) = joined_room(&server).await;

    alice.submit_move(&code, "paper").await;

    let game = bob.status(&code).await;
    assert_eq!(game["status"], "PLAYER_TWO_TURN");
    assert!(game["move_one"].is_null());
    assert_eq!(game["move_one_submitted"], true);

    let spectator = server.client();
    assert!(spectator.status(&code).await["move_one"].is_null());
}

#[tokio::test]
async fn repeated_identical_rounds_are_numbered() {
    let server = spawn_test_server().await;
    let (alice, bob, code) = joined_room(&server).await;

    for expected in 1..=2 {
        alice.submit_move(&code, "rock").await;
        bob.submit_move(&code, "rock").await;

        let game = alice.status(&code).await;
        assert_eq!(game["status"], "RESOLVED");
        assert_eq!(game["result"], "tie");
        assert_eq!(game["round_number"], expected);

        alice.post("reset_round", json!({ "room_code": code })).await;
    }
}

#[tokio::test]
async fn status_reports_viewer_seat() {
    let server = spawn_test_server().await;
    let (alice, bob, code) = joined_room(&server).await;

    assert_eq!(alice.status(&code).await["seat"], "one");
    assert_eq!(bob.status(&code).await["seat"], "two");

    let carol = server.client();
    carol.login("Carol", "🐙").await;
    assert!(carol.status(&code).await["seat"].is_null());
    assert!(server.client().status(&code).await["seat"].is_null());
}

#[tokio::test]
async fn out_of_turn_move_is_rejected_without_change() {
    let server = spawn_test_server().await;
    let (alice, bob, code) = joined_room(&server).await;

    let body = expect_json(bob.submit_move(&code, "rock").await, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["message"], "It's not your turn or game is over.");
    assert_eq!(alice.status(&code).await["status"], "PLAYER_ONE_TURN");

    alice.submit_move(&code, "rock").await;
    let response = alice.submit_move(&code, "paper").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(alice.status(&code).await["move_one"], "rock");
}

#[tokio::test]
async fn submit_move_validation() {
    let server = spawn_test_server().await;
    let (alice, _bob, code) = joined_room(&server).await;

    let response = alice.submit_move(&code, "lizard").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = alice.submit_move("ZZZZ", "rock").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let anonymous = server.client();
    let response = anonymous.submit_move(&code, "rock").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Legacy field name
    let response = alice
        .post("submit_move", json!({ "room_code": code, "choice": "rock" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn reset_before_resolution_is_noop() {
    let server = spawn_test_server().await;
    let (alice, _bob, code) = joined_room(&server).await;
    alice.submit_move(&code, "rock").await;

    let body = expect_json(
        alice.post("reset_round", json!({ "room_code": code })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["success"], true);
    assert_eq!(alice.status(&code).await["status"], "PLAYER_TWO_TURN");

    let response = alice.post("reset_round", json!({ "room_code": "ZZZZ" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_room_status_is_not_found() {
    let server = spawn_test_server().await;
    let client = server.client();

    let response = client.get("game_status?room_code=ZZZZ").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stale_waiting_room_is_reaped_on_next_create() {
    let server = spawn_test_server_with_ttl(Duration::from_millis(50)).await;
    let alice = server.client();
    alice.login("Alice", "🦊").await;

    let stale = alice.create_room().await;
    tokio::time::sleep(Duration::from_millis(150)).await;
    let fresh = alice.create_room().await;

    let response = alice.get(&format!("game_status?room_code={stale}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(alice.status(&fresh).await["status"], "WAITING");
}
