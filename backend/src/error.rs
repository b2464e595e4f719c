use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Per-request failures. None of these are fatal to the server.
#[derive(Debug, Error)]
pub enum GameError {
    /// Malformed input (name length, empty move or message, oversize message)
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    /// Room already has a different second player
    #[error("{0}")]
    Conflict(&'static str),
    /// Self-join or a move out of turn
    #[error("{0}")]
    InvalidOperation(&'static str),
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl GameError {
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::Validation(_) | GameError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            GameError::NotFound(_) => StatusCode::NOT_FOUND,
            GameError::Conflict(_) => StatusCode::CONFLICT,
            GameError::Unauthenticated => StatusCode::FORBIDDEN,
            GameError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type GameResult<T> = Result<T, GameError>;
