pub mod core;
pub mod rooms;
pub mod solo;

pub use self::core::messages;
pub use rooms::RoomRegistry;
pub use solo::AdaptiveOpponent;
