pub mod http_handler;
pub mod store;

pub use store::Identity;
