pub mod messages;
mod moves;

pub use moves::{Move, Outcome, resolve};

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, as the browser client expects
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}
