use std::env;
use std::time::Duration;

use crate::game::rooms::DEFAULT_ROOM_TTL;
use crate::game::solo::DEFAULT_EXPLOIT_RATE;
use crate::sessions::IN_MEMORY_URL;

pub const DEFAULT_SESSION_DAYS: i64 = 7;
pub const DEFAULT_SESSION_CLEANUP: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// How long a room may wait for its second player
    pub room_ttl: Duration,
    pub ai_exploit_rate: f64,
    /// Sliding session lifetime
    pub session_days: i64,
    pub session_database_url: String,
    /// How often expired sessions are deleted
    pub session_cleanup_interval: Duration,
    /// Cross-origin clients allowed to call the API with cookies. Empty means same-origin only.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            room_ttl: DEFAULT_ROOM_TTL,
            ai_exploit_rate: DEFAULT_EXPLOIT_RATE,
            session_days: DEFAULT_SESSION_DAYS,
            session_database_url: IN_MEMORY_URL.to_string(),
            session_cleanup_interval: DEFAULT_SESSION_CLEANUP,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            room_ttl: lookup("ROOM_TTL_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.room_ttl),
            ai_exploit_rate: lookup("AI_EXPLOIT_RATE")
                .and_then(|r| r.parse::<f64>().ok())
                .filter(|r| (0.0..=1.0).contains(r))
                .unwrap_or(defaults.ai_exploit_rate),
            session_days: lookup("SESSION_DAYS")
                .and_then(|d| d.parse().ok())
                .filter(|d| *d > 0)
                .unwrap_or(defaults.session_days),
            session_database_url: lookup("SESSION_DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.session_database_url),
            session_cleanup_interval: lookup("SESSION_CLEANUP_SECS")
                .and_then(|s| s.parse().ok())
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_cleanup_interval),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
