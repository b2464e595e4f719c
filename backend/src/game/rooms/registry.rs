use super::chat::validate_message;
use super::room::{Room, RoomStatus};
use super::room_code::{claim_unique_room_code, normalize_room_code};
use crate::error::{GameError, GameResult};
use crate::game::core::Move;
use crate::identity::Identity;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::RefMut;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_ROOM_TTL: Duration = Duration::from_secs(3600);

pub(crate) const ROOM_NOT_FOUND: &str = "Room code not found.";

/// Owns every live room. Shared between request handlers behind an `Arc`.
///
/// Each mutation holds the room's map entry for its whole duration, so two
/// requests against the same room never interleave.
pub struct RoomRegistry {
    rooms: DashMap<String, Room>,
    room_ttl: Duration,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RoomRegistry {
    pub fn new(room_ttl: Option<Duration>) -> Self {
        Self {
            rooms: DashMap::new(),
            room_ttl: room_ttl.unwrap_or(DEFAULT_ROOM_TTL),
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        normalize_room_code(code).is_some_and(|code| self.rooms.contains_key(&code))
    }

    fn room_mut(&self, code: &str) -> GameResult<RefMut<'_, String, Room>> {
        let code = normalize_room_code(code).ok_or(GameError::NotFound(ROOM_NOT_FOUND))?;
        self.rooms
            .get_mut(&code)
            .ok_or(GameError::NotFound(ROOM_NOT_FOUND))
    }

    /// Drop rooms that have been waiting for an opponent longer than the TTL
    pub fn cleanup_stale(&self) -> usize {
        let before = self.rooms.len();
        self.rooms.retain(|code, room| {
            let stale = room.is_stale(self.room_ttl);
            if stale {
                info!(room_code = code, age_secs = room.age().as_secs(), "Cleaning up stale room");
            }
            !stale
        });
        before.saturating_sub(self.rooms.len())
    }

    /// Open a new room owned by `owner` under a fresh code
    pub fn create(&self, owner: Identity) -> Room {
        let removed = self.cleanup_stale();
        if removed > 0 {
            debug!(removed, "Stale rooms removed");
        }

        let mut created = None;
        let code = claim_unique_room_code(|code| match self.rooms.entry(code.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let room = Room::new(code, owner.clone());
                created = Some(room.clone());
                slot.insert(room);
                true
            }
        });

        info!(room_code = code, owner = owner.name, "Created room");
        created.unwrap_or_else(|| Room::new(code, owner))
    }

    pub fn join(&self, code: &str, identity: Identity) -> GameResult<Room> {
        let mut room = self.room_mut(code)?;
        let name = identity.name.clone();
        room.join(identity)?;
        info!(room_code = room.code, player_two = name, "Room joined");
        Ok(room.clone())
    }

    pub fn get(&self, code: &str) -> GameResult<Room> {
        let code = normalize_room_code(code).ok_or(GameError::NotFound(ROOM_NOT_FOUND))?;
        self.rooms
            .get(&code)
            .map(|room| room.clone())
            .ok_or(GameError::NotFound(ROOM_NOT_FOUND))
    }

    pub fn submit_move(&self, code: &str, player: &Identity, mv: Move) -> GameResult<RoomStatus> {
        let mut room = self.room_mut(code)?;
        debug!(room_code = room.code, player = player.name, "Player submitting move");

        let status = room.submit_move(player, mv)?;
        if status == RoomStatus::Resolved {
            info!(room_code = room.code, result = ?room.round().result(), "Round resolved");
        }
        Ok(status)
    }

    /// Returns whether a resolved round was actually reset
    pub fn reset_round(&self, code: &str) -> GameResult<bool> {
        let mut room = self.room_mut(code)?;
        let reset = room.reset_round();
        if reset {
            debug!(room_code = room.code, "Round reset");
        }
        Ok(reset)
    }

    pub fn append_chat(&self, code: &str, sender: &str, text: &str) -> GameResult<()> {
        let text = validate_message(text)?;
        let mut room = self.room_mut(code)?;
        let id = room.chat.push(sender, text).id.clone();
        debug!(room_code = room.code, sender, message_id = id, "Chat message added");
        Ok(())
    }
}
