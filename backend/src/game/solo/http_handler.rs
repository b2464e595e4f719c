use axum::{Json, extract::State};
use tower_sessions::Session;
use tracing::debug;

use super::opponent::MoveHistory;
use crate::AppState;
use crate::error::GameResult;
use crate::game::core::messages::{ComputerRound, PlayComputerRequest};
use crate::game::core::{Move, resolve};
use crate::identity::store::HISTORY_KEY;

/// One round against the computer. The history lives in the player's session.
pub async fn play_computer(
    State(state): State<AppState>,
    session: Session,
    Json(PlayComputerRequest { choice }): Json<PlayComputerRequest>,
) -> GameResult<Json<ComputerRound>> {
    let human: Move = choice.parse()?;

    let mut history = session
        .get::<MoveHistory>(HISTORY_KEY)
        .await?
        .unwrap_or_default();
    let computer = state.opponent.play(&mut history, human, &mut rand::rng());
    session.insert(HISTORY_KEY, &history).await?;

    let result = resolve(human, computer);
    debug!(%human, %computer, ?result, remembered = history.len(), "Played computer");

    Ok(Json(ComputerRound {
        result,
        move_one: human,
        move_two: computer,
    }))
}
