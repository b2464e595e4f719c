use serde::{Deserialize, Serialize};

use super::{Move, Outcome};
use crate::game::rooms::RoomView;
use crate::identity::Identity;

// Requests

#[derive(Debug, Deserialize, PartialEq)]
pub struct SetNameRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct PlayComputerRequest {
    #[serde(rename = "move", alias = "p1_choice", default)]
    pub choice: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RoomCodeRequest {
    #[serde(default)]
    pub room_code: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SubmitMoveRequest {
    #[serde(default)]
    pub room_code: String,
    #[serde(rename = "move", alias = "choice", default)]
    pub choice: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub room_code: String,
    #[serde(default)]
    pub message_text: String,
}

// Responses

#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: &'static str) -> Self {
        Self {
            success: true,
            message: Some(message),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NameStatus {
    pub success: bool,
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<Option<Identity>> for NameStatus {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(Identity { name, avatar }) => Self {
                success: true,
                logged_in: true,
                username: Some(name),
                avatar: Some(avatar),
            },
            None => Self {
                success: false,
                logged_in: false,
                username: None,
                avatar: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NameClaimed {
    pub success: bool,
    pub username: String,
    pub avatar: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ComputerRound {
    pub result: Outcome,
    pub move_one: Move,
    pub move_two: Move,
}

#[derive(Debug, Serialize)]
pub struct RoomCreated {
    pub success: bool,
    pub room_code: String,
    pub player_name: String,
}

#[derive(Debug, Serialize)]
pub struct RoomJoined {
    pub success: bool,
    pub room_code: String,
    pub player_one: Identity,
    pub player_two: Option<Identity>,
}

#[derive(Debug, Serialize)]
pub struct GameStatus {
    pub success: bool,
    pub game: RoomView,
}
