//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development; without mail credentials it simply
//! runs with notifications disabled.

use std::net::SocketAddr;
use std::path::PathBuf;

use postbox_notify::MailConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) server.
    /// Env: `HTTP_ADDR`
    /// Default: `0.0.0.0:8080`
    pub http_addr: SocketAddr,

    /// Filesystem path of the SQLite submissions database.
    /// Env: `DB_PATH`
    /// Default: `./contacts.db`
    pub db_path: PathBuf,

    /// Directory served for `GET /` and any path no API route claims.
    /// Env: `STATIC_DIR`
    /// Default: `./static`
    pub static_dir: PathBuf,

    /// Mail transport settings; `None` disables notifications.
    /// Env: `MAIL_SERVER`, `MAIL_PORT`, `MAIL_USERNAME`, `MAIL_PASSWORD`,
    /// `MAIL_SENDER`, `MAIL_RECIPIENT`
    pub mail: Option<MailConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], 8080).into(),
            db_path: PathBuf::from("./contacts.db"),
            static_dir: PathBuf::from("./static"),
            mail: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(value = %addr, "Invalid HTTP_ADDR, using default");
            }
        }

        if let Ok(path) = std::env::var("DB_PATH") {
            config.db_path = PathBuf::from(path);
        }

        if let Ok(dir) = std::env::var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        config.mail = MailConfig::from_env();

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.db_path, PathBuf::from("./contacts.db"));
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert!(config.mail.is_none());
    }
}
