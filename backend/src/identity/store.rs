use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::info;

use crate::error::{GameError, GameResult};

pub const IDENTITY_KEY: &str = "identity";
pub const HISTORY_KEY: &str = "ai_history";

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 20;

/// A claimed display name and avatar glyph. No password, no uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub avatar: String,
}

impl Identity {
    /// Validate and build an identity from raw form input
    pub fn new(name: &str, avatar: &str) -> GameResult<Self> {
        let name = name.trim();
        let avatar = avatar.trim();
        let len = name.chars().count();

        if len < MIN_NAME_CHARS {
            return Err(GameError::Validation("Name must be at least 2 characters."));
        }
        if len > MAX_NAME_CHARS {
            return Err(GameError::Validation("Name must be 20 characters or less."));
        }
        if avatar.is_empty() {
            return Err(GameError::Validation("You must select an avatar."));
        }

        Ok(Self {
            name: name.to_string(),
            avatar: avatar.to_string(),
        })
    }

    /// Players are matched by display name
    pub fn same_player(&self, other: &Identity) -> bool {
        self.name == other.name
    }
}

/// Validate and store an identity for this session, replacing any previous one
pub async fn claim(session: &Session, name: &str, avatar: &str) -> GameResult<Identity> {
    let identity = Identity::new(name, avatar)?;
    session.insert(IDENTITY_KEY, &identity).await?;
    info!(name = identity.name, "Identity claimed");
    Ok(identity)
}

pub async fn lookup(session: &Session) -> GameResult<Option<Identity>> {
    Ok(session.get::<Identity>(IDENTITY_KEY).await?)
}

/// Like [`lookup`] but an anonymous session is an error
pub async fn require(session: &Session) -> GameResult<Identity> {
    lookup(session).await?.ok_or(GameError::Unauthenticated)
}

/// Forget the identity along with the computer opponent's memory of this player
pub async fn clear(session: &Session) -> GameResult<()> {
    let previous = session.remove::<Identity>(IDENTITY_KEY).await?;
    session.remove_value(HISTORY_KEY).await?;
    if let Some(identity) = previous {
        info!(name = identity.name, "Identity cleared");
    }
    Ok(())
}
