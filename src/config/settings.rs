// src/config/settings.rs

use anyhow::{anyhow, Context};
use sqlx::postgres::PgConnectOptions;
use std::{env, net::SocketAddr, str::FromStr, time::Duration};

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "reportes_db";
pub const DEFAULT_POOL_MAX: u32 = 10;
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 30_000;
// Acima do teto do pool a chamada espera na fila; o prazo só corta esperas absurdas
pub const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 3_600_000;
pub const DEFAULT_APP_ADDR: &str = "0.0.0.0:3000";

/// Onde o pool vai se conectar e com quantas conexões.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub target: DatabaseTarget,
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

#[derive(Clone)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        database: String,
        user: String,
        password: String,
    },
}

// A senha nunca vai para o log
impl std::fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseTarget::Url(_) => f.write_str("Url(<redacted>)"),
            DatabaseTarget::Parts { host, port, database, user, .. } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("database", database)
                .field("user", user)
                .finish_non_exhaustive(),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let target = match get("DATABASE_URL") {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts {
                host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                port: parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
                database: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
                user: get("DB_USER").ok_or_else(|| anyhow!("DB_USER deve ser definido"))?,
                password: get("DB_PASSWORD")
                    .ok_or_else(|| anyhow!("DB_PASSWORD deve ser definido"))?,
            },
        };

        let max_connections = parse_or("DB_POOL_MAX", get("DB_POOL_MAX"), DEFAULT_POOL_MAX)?;
        if max_connections == 0 {
            return Err(anyhow!("DB_POOL_MAX deve ser maior que zero"));
        }

        let idle_ms = parse_or(
            "DB_IDLE_TIMEOUT_MS",
            get("DB_IDLE_TIMEOUT_MS"),
            DEFAULT_IDLE_TIMEOUT_MS,
        )?;
        let acquire_ms = parse_or(
            "DB_ACQUIRE_TIMEOUT_MS",
            get("DB_ACQUIRE_TIMEOUT_MS"),
            DEFAULT_ACQUIRE_TIMEOUT_MS,
        )?;

        Ok(Self {
            target,
            max_connections,
            idle_timeout: Duration::from_millis(idle_ms),
            acquire_timeout: Duration::from_millis(acquire_ms),
        })
    }

    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        match &self.target {
            DatabaseTarget::Url(url) => {
                PgConnectOptions::from_str(url).context("DATABASE_URL inválida")
            }
            DatabaseTarget::Parts {
                host,
                port,
                database,
                user,
                password,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .database(database)
                .username(user)
                .password(password)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("APP_ADDR").unwrap_or_else(|| DEFAULT_APP_ADDR.to_string());
        let addr = raw
            .parse()
            .with_context(|| format!("APP_ADDR inválido: {raw}"))?;
        Ok(Self { addr })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} inválido: {value}")),
        None => Ok(default),
    }
}
