use tracing::Level;

use crate::messages::Locale;

/// Origin of the PubSubHubbub backend this app talks to.
pub const BACKEND_BASE: &str = "https://pubsubhubbub-d5rq.onrender.com";

/// Retry hint forwarded to the subscribe endpoint. Nothing is retried locally.
pub const SUBSCRIBE_RETRIES: u8 = 3;

/// Compiled-in application settings, shared with the component tree
/// as Dioxus context.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_base: String,
    pub locale: Locale,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base: BACKEND_BASE.to_string(),
            locale: Locale::default(),
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_https_backend() {
        let config = Config::default();

        assert_eq!(config.backend_base, BACKEND_BASE);
        assert!(config.backend_base.starts_with("https://"));
        assert_eq!(config.locale, Locale::En);
    }
}
