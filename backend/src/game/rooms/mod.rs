mod chat;
pub mod http_handler;
mod registry;
mod room;
mod room_code;
mod view;

pub use chat::{CHAT_CAPACITY, ChatLog, ChatMessage, MAX_MESSAGE_CHARS};
pub use registry::{DEFAULT_ROOM_TTL, RoomRegistry};
pub use room::{Room, RoomStatus, Round, Seat};
pub use room_code::{CODE_LENGTH, normalize_room_code};
pub use view::RoomView;
