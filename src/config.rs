//! Command-line and environment configuration for the server binary.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Compact,
    /// One JSON object per record.
    Json,
}

/// Server settings, read from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "wedding_server")]
#[command(about = "Wedding planner HTTP backend", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[arg(long, env = "WEDDING_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// `PostgreSQL` URL; in-memory storage is used when absent
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(
        long,
        env = "WEDDING_POOL_SIZE",
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pool_size: u32,

    /// Fallback log filter when `RUST_LOG` is unset
    #[arg(long, env = "WEDDING_LOG_FILTER", default_value = "wedding=info")]
    pub log_filter: String,

    /// Log output format
    #[arg(long, env = "WEDDING_LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_without_flags() {
        let config = ServerConfig::try_parse_from(["wedding_server"]).expect("defaults parse");

        assert_eq!(config.bind, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.pool_size, 8);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[rstest]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "wedding_server",
            "--bind",
            "0.0.0.0:9000",
            "--database-url",
            "postgres://localhost/wedding",
            "--pool-size",
            "2",
            "--log-format",
            "json",
        ])
        .expect("flags parse");

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/wedding")
        );
        assert_eq!(config.pool_size, 2);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[rstest]
    fn zero_pool_size_is_rejected() {
        let result = ServerConfig::try_parse_from(["wedding_server", "--pool-size", "0"]);

        assert!(result.is_err());
    }
}
