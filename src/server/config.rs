/**
 * Server Configuration
 *
 * Configuration comes from environment variables with local-development
 * defaults:
 *
 * - `DATABASE_URL` - store location, default `sqlite:askboard.db?mode=rwc`
 * - `SERVER_PORT` - listen port, default 3000
 *
 * A `.env` file is honored when present (loaded in `main`).
 */

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Document store location
    pub database_url: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::info!("DATABASE_URL not set, using local file store");
            "sqlite:askboard.db?mode=rwc".to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(3000);

        Self { database_url, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Runs without DATABASE_URL/SERVER_PORT in most test environments;
        // only assert the invariants that hold either way.
        let config = ServerConfig::from_env();
        assert!(!config.database_url.is_empty());
        assert!(config.port > 0);
    }
}
