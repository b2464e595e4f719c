use serde::Serialize;
use std::time::{Duration, Instant};

use super::chat::ChatLog;
use crate::error::{GameError, GameResult};
use crate::game::core::{Move, Outcome, resolve, unix_timestamp};
use crate::identity::Identity;

/// Where a room is in its round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Waiting,
    PlayerOneTurn,
    PlayerTwoTurn,
    Resolved,
}

/// Round progress. Moves and result only exist in the states that have them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    Waiting,
    PlayerOneTurn,
    PlayerTwoTurn {
        move_one: Move,
    },
    Resolved {
        move_one: Move,
        move_two: Move,
        result: Outcome,
    },
}

impl Round {
    pub fn status(&self) -> RoomStatus {
        match self {
            Round::Waiting => RoomStatus::Waiting,
            Round::PlayerOneTurn => RoomStatus::PlayerOneTurn,
            Round::PlayerTwoTurn { .. } => RoomStatus::PlayerTwoTurn,
            Round::Resolved { .. } => RoomStatus::Resolved,
        }
    }

    pub fn move_one(&self) -> Option<Move> {
        match *self {
            Round::PlayerTwoTurn { move_one } | Round::Resolved { move_one, .. } => Some(move_one),
            _ => None,
        }
    }

    pub fn move_two(&self) -> Option<Move> {
        match *self {
            Round::Resolved { move_two, .. } => Some(move_two),
            _ => None,
        }
    }

    /// From player one's side
    pub fn result(&self) -> Option<Outcome> {
        match *self {
            Round::Resolved { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Which seat a player took in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    One,
    Two,
}

/// A two-player match (pure logic, no I/O)
#[derive(Debug, Clone)]
pub struct Room {
    pub code: String,
    pub player_one: Identity,
    pub player_two: Option<Identity>,
    round: Round,
    /// Starts at 1, bumped by every reset
    round_number: u32,
    /// Unix seconds, for clients
    pub created_at: f64,
    created: Instant,
    pub chat: ChatLog,
}

impl Room {
    pub fn new(code: impl Into<String>, owner: Identity) -> Self {
        Self {
            code: code.into(),
            player_one: owner,
            player_two: None,
            round: Round::Waiting,
            round_number: 1,
            created_at: unix_timestamp(),
            created: Instant::now(),
            chat: ChatLog::default(),
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn status(&self) -> RoomStatus {
        self.round.status()
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }

    /// Still waiting for an opponent after `ttl`
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.status() == RoomStatus::Waiting && self.age() > ttl
    }

    pub fn seat_of(&self, identity: &Identity) -> Option<Seat> {
        if self.player_one.same_player(identity) {
            Some(Seat::One)
        } else if self
            .player_two
            .as_ref()
            .is_some_and(|p| p.same_player(identity))
        {
            Some(Seat::Two)
        } else {
            None
        }
    }

    /// Take the second seat. Rejoining the seat you already hold is a no-op.
    pub fn join(&mut self, identity: Identity) -> GameResult<()> {
        if self.player_one.same_player(&identity) {
            return Err(GameError::InvalidOperation("You can't join your own game."));
        }

        match &self.player_two {
            Some(existing) if existing.same_player(&identity) => Ok(()),
            Some(_) => Err(GameError::Conflict("This room is already full.")),
            None => {
                self.player_two = Some(identity);
                self.round = Round::PlayerOneTurn;
                Ok(())
            }
        }
    }

    /// Record a move for whoever's turn it is. Anything else leaves the room untouched.
    pub fn submit_move(&mut self, player: &Identity, mv: Move) -> GameResult<RoomStatus> {
        self.round = match (self.round, self.seat_of(player)) {
            (Round::PlayerOneTurn, Some(Seat::One)) => Round::PlayerTwoTurn { move_one: mv },
            (Round::PlayerTwoTurn { move_one }, Some(Seat::Two)) => Round::Resolved {
                move_one,
                move_two: mv,
                result: resolve(move_one, mv),
            },
            _ => {
                return Err(GameError::InvalidOperation(
                    "It's not your turn or game is over.",
                ));
            }
        };
        Ok(self.status())
    }

    /// Start the next round. Returns false (and does nothing) unless resolved.
    pub fn reset_round(&mut self) -> bool {
        if self.status() != RoomStatus::Resolved {
            return false;
        }
        self.round = Round::PlayerOneTurn;
        self.round_number += 1;
        true
    }
}
