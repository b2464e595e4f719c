use axum::{
    Json,
    extract::{Query, State},
};
use tower_sessions::Session;
use tracing::debug;

use super::registry::ROOM_NOT_FOUND;
use super::view::RoomView;
use crate::AppState;
use crate::error::{GameError, GameResult};
use crate::game::core::Move;
use crate::game::core::messages::{
    Ack, GameStatus, RoomCodeRequest, RoomCreated, RoomJoined, SendMessageRequest,
    SubmitMoveRequest,
};
use crate::identity::store;

pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
) -> GameResult<Json<RoomCreated>> {
    let owner = store::require(&session).await?;
    let room = state.rooms.create(owner);

    Ok(Json(RoomCreated {
        success: true,
        room_code: room.code,
        player_name: room.player_one.name,
    }))
}

pub async fn join_room(
    State(state): State<AppState>,
    session: Session,
    Json(RoomCodeRequest { room_code }): Json<RoomCodeRequest>,
) -> GameResult<Json<RoomJoined>> {
    let identity = store::require(&session).await?;
    let room = state.rooms.join(&room_code, identity)?;

    Ok(Json(RoomJoined {
        success: true,
        room_code: room.code,
        player_one: room.player_one,
        player_two: room.player_two,
    }))
}

/// Polled by both players. Anonymous viewers get the spectator view.
pub async fn game_status(
    State(state): State<AppState>,
    session: Session,
    Query(RoomCodeRequest { room_code }): Query<RoomCodeRequest>,
) -> GameResult<Json<GameStatus>> {
    let viewer = store::lookup(&session).await?;
    let room = state.rooms.get(&room_code)?;

    Ok(Json(GameStatus {
        success: true,
        game: RoomView::for_viewer(&room, viewer.as_ref()),
    }))
}

pub async fn reset_round(
    State(state): State<AppState>,
    Json(RoomCodeRequest { room_code }): Json<RoomCodeRequest>,
) -> GameResult<Json<Ack>> {
    if state.rooms.reset_round(&room_code)? {
        Ok(Json(Ack::ok()))
    } else {
        Ok(Json(Ack::with_message("Already reset or not resolved.")))
    }
}

pub async fn submit_move(
    State(state): State<AppState>,
    session: Session,
    Json(SubmitMoveRequest { room_code, choice }): Json<SubmitMoveRequest>,
) -> GameResult<Json<Ack>> {
    let player = store::require(&session).await?;
    // Unknown room wins over a bad move
    if !state.rooms.contains(&room_code) {
        return Err(GameError::NotFound(ROOM_NOT_FOUND));
    }
    let mv: Move = choice.parse()?;

    let status = state.rooms.submit_move(&room_code, &player, mv)?;
    debug!(room_code, ?status, "Move accepted");
    Ok(Json(Ack::with_message("Move submitted.")))
}

pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(SendMessageRequest {
        room_code,
        message_text,
    }): Json<SendMessageRequest>,
) -> GameResult<Json<Ack>> {
    let sender = store::require(&session).await?;
    state
        .rooms
        .append_chat(&room_code, &sender.name, &message_text)?;
    Ok(Json(Ack::ok()))
}
