use std::{num::NonZeroU32, str::FromStr};

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// StoreBackend
// ---------------------------------------------------------------------------

/// Which `ReadingStore` implementation the server runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres {
        database_url: String,
        max_connections: NonZeroU32,
    },
    /// Readings live only as long as the process.
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendKind {
    Postgres,
    Memory,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow::anyhow!("unknown store backend: {other:?}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let kind: BackendKind = optional("STORE_BACKEND", "postgres")
            .parse()
            .context("STORE_BACKEND must be 'postgres' or 'memory'")?;

        let store = match kind {
            BackendKind::Postgres => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .context("missing required env var: DATABASE_URL")?,
                max_connections: optional("DATABASE_MAX_CONNECTIONS", "10")
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            },
            BackendKind::Memory => StoreBackend::Memory,
        };

        Ok(Self {
            store,
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
