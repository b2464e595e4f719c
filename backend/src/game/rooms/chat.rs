use serde::Serialize;
use std::collections::VecDeque;

use crate::error::{GameError, GameResult};
use crate::game::core::unix_timestamp;

pub const CHAT_CAPACITY: usize = 50;
pub const MAX_MESSAGE_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    /// Unix seconds
    pub timestamp: f64,
}

/// Check and trim a chat message body
pub fn validate_message(text: &str) -> GameResult<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GameError::Validation("Message cannot be empty."));
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(GameError::Validation("Message too long."));
    }
    Ok(text)
}

/// Most recent messages of a room, oldest first
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: VecDeque<ChatMessage>,
}

impl ChatLog {
    pub fn push(&mut self, sender: &str, text: &str) -> &ChatMessage {
        self.messages.push_back(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            sender: sender.to_string(),
            text: text.to_string(),
            timestamp: unix_timestamp(),
        });
        while self.messages.len() > CHAT_CAPACITY {
            self.messages.pop_front();
        }
        // just pushed
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }
}
