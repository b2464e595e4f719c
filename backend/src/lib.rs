mod assets;
pub mod config;
pub mod error;
pub mod game;
pub mod identity;
pub mod sessions;

pub use config::Config;
pub use error::{GameError, GameResult};
pub use game::messages;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use game::{AdaptiveOpponent, RoomRegistry, rooms, solo};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tower_sessions::{Expiry, SessionManagerLayer, cookie::SameSite};
use tower_sessions_sqlx_store::SqliteStore;
use tracing::warn;

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<RoomRegistry>,
    pub opponent: AdaptiveOpponent,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            rooms: Arc::new(RoomRegistry::new(Some(config.room_ttl))),
            opponent: AdaptiveOpponent::new(config.ai_exploit_rate),
        }
    }
}

/// Only configured origins may call the API cross-origin, with cookies
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

pub fn app(session_store: SqliteStore) -> Router {
    app_with_config(session_store, &Config::default())
}

pub fn app_with_config(session_store: SqliteStore, config: &Config) -> Router {
    let state = AppState::new(config);

    let sessions = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_days,
        )));

    let api = Router::new()
        .route("/check_name", get(identity::http_handler::check_name))
        .route("/set_name", post(identity::http_handler::set_name))
        .route("/change_name", post(identity::http_handler::change_name))
        .route("/play_computer", post(solo::http_handler::play_computer))
        .route("/create_room", post(rooms::http_handler::create_room))
        .route("/join_room", post(rooms::http_handler::join_room))
        .route("/game_status", get(rooms::http_handler::game_status))
        .route("/reset_round", post(rooms::http_handler::reset_round))
        .route("/submit_move", post(rooms::http_handler::submit_move))
        .route("/send_message", post(rooms::http_handler::send_message));

    let mut router = Router::new()
        .route("/", get(assets::index))
        .route("/styles.css", get(assets::styles))
        .route("/script.js", get(assets::script))
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(sessions);

    if let Some(cors) = cors_layer(&config.cors_origins) {
        router = router.layer(cors);
    }
    router.layer(TraceLayer::new_for_http())
}
