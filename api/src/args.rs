use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use registrar_core::domain::common::{DatabaseConfig, PoolConfig, RegistrarConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "registrar", version, about = "Teacher and subject registry API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "SERVER_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Prefix mounted in front of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "registrar")]
    pub name: String,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,

    #[arg(
        long = "database-min-connections",
        env = "DATABASE_MIN_CONNECTIONS",
        default_value_t = 1
    )]
    pub min_connections: u32,

    #[arg(
        long = "database-acquire-timeout-secs",
        env = "DATABASE_ACQUIRE_TIMEOUT_SECS",
        default_value_t = 8
    )]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for RegistrarConfig {
    fn from(args: Args) -> Self {
        RegistrarConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
                pool: PoolConfig {
                    max_connections: args.database.max_connections,
                    min_connections: args.database.min_connections,
                    acquire_timeout: Duration::from_secs(args.database.acquire_timeout_secs),
                },
            },
        }
    }
}
