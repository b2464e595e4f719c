use serde::Serialize;

use super::chat::ChatMessage;
use super::room::{Room, RoomStatus, Round, Seat};
use crate::game::core::{Move, Outcome};
use crate::identity::Identity;

/// What one player sees of a room when polling.
///
/// An in-progress move is only shown to the player who made it, so the
/// second mover can't read the first mover's choice off the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RoomView {
    pub room_code: String,
    pub player_one: Identity,
    pub player_two: Option<Identity>,
    pub status: RoomStatus,
    pub round_number: u32,
    /// The viewer's own seat, absent for spectators
    pub seat: Option<Seat>,
    pub move_one: Option<Move>,
    pub move_two: Option<Move>,
    pub move_one_submitted: bool,
    pub result: Option<Outcome>,
    pub created_at: f64,
    pub chat_messages: Vec<ChatMessage>,
}

impl RoomView {
    pub fn for_viewer(room: &Room, viewer: Option<&Identity>) -> Self {
        let seat = viewer.and_then(|v| room.seat_of(v));
        let round = room.round();

        let move_one = match round {
            Round::Resolved { move_one, .. } => Some(move_one),
            Round::PlayerTwoTurn { move_one } if seat == Some(Seat::One) => Some(move_one),
            _ => None,
        };

        Self {
            room_code: room.code.clone(),
            player_one: room.player_one.clone(),
            player_two: room.player_two.clone(),
            status: round.status(),
            round_number: room.round_number(),
            seat,
            move_one,
            move_two: round.move_two(),
            move_one_submitted: round.move_one().is_some(),
            result: round.result(),
            created_at: room.created_at,
            chat_messages: room.chat.iter().cloned().collect(),
        }
    }
}
