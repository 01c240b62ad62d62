use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_LOG_FILTER: &str = "trail_api=debug,tower_http=debug";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Read-only HTTP API for hiking trail data")]
pub struct ServerConfig {
    /// SQLite database holding `trail_metadata` and `trail_coordinates`
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://trails.db")]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let config = ServerConfig::try_parse_from(["trail-api"]).unwrap();

        // Environment overrides would leak in here, so only check shapes that
        // hold either way.
        assert!(config.max_connections > 0);
        assert!(!config.database_url.is_empty());
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "trail-api",
            "--database-url",
            "sqlite:///srv/trails.db",
            "--bind",
            "127.0.0.1:9000",
            "--max-connections",
            "2",
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite:///srv/trails.db");
        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn rejects_invalid_bind_address() {
        let result = ServerConfig::try_parse_from(["trail-api", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }
}
