#![allow(dead_code)]

use reqwest::{Client, Response, StatusCode};
use rps_arena::{Config, sessions};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::net::TcpListener;

pub struct TestServer {
    base_url: String,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A browser-like client with its own cookie jar, i.e. its own session
    pub fn client(&self) -> Player {
        Player {
            http: Client::builder().cookie_store(true).build().unwrap(),
            base_url: self.base_url.clone(),
        }
    }
}

pub async fn spawn_test_server() -> TestServer {
    spawn_test_server_with_config(Config::default()).await
}

pub async fn spawn_test_server_with_ttl(room_ttl: Duration) -> TestServer {
    spawn_test_server_with_config(Config {
        room_ttl,
        ..Config::default()
    })
    .await
}

pub async fn spawn_test_server_with_config(config: Config) -> TestServer {
    let store = sessions::open_store(sessions::IN_MEMORY_URL).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let app = rps_arena::app_with_config(store, &config);
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
    }
}

pub struct Player {
    http: Client,
    base_url: String,
}

impl Player {
    pub async fn get(&self, path: &str) -> Response {
        self.http
            .get(format!("{}/api/{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    pub async fn post(&self, path: &str, body: Value) -> Response {
        self.http
            .post(format!("{}/api/{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn login(&self, name: &str, avatar: &str) {
        let response = self
            .post("set_name", json!({ "username": name, "avatar": avatar }))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    pub async fn create_room(&self) -> String {
        let body = expect_json(self.post("create_room", json!({})).await, StatusCode::OK).await;
        body["room_code"].as_str().unwrap().to_string()
    }

    pub async fn join_room(&self, code: &str) -> Response {
        self.post("join_room", json!({ "room_code": code })).await
    }

    pub async fn submit_move(&self, code: &str, mv: &str) -> Response {
        self.post("submit_move", json!({ "room_code": code, "move": mv }))
            .await
    }

    pub async fn status(&self, code: &str) -> Value {
        let response = self.get(&format!("game_status?room_code={code}")).await;
        expect_json(response, StatusCode::OK).await["game"].clone()
    }
}

pub async fn expect_json(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    response.json().await.unwrap()
}

/// Alice hosts, Bob joins
pub async fn joined_room(server: &TestServer) -> (Player, Player, String) {
    let alice = server.client();
    alice.login("Alice", "🦊").await;
    let bob = server.client();
    bob.login("Bob", "🐼").await;

    let code = alice.create_room().await;
    let response = bob.join_room(&code).await;
    assert_eq!(response.status(), StatusCode::OK);

    (alice, bob, code)
}
