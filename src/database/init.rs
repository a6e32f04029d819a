//! Connection settings and pool construction for the game database.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Pool, Postgres};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// A type alias for the database connection pool (`Pool<Postgres>`).
pub type DbPool = Pool<Postgres>;

/// Short enough that a slow database still lets us answer the interaction in time.
const ACQUIRE_TIMEOUT_SECS: u64 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("table name is empty")]
    Empty,
    #[error("`{0}` is not a plain SQL identifier")]
    Invalid(String),
}

/// A validated, optionally schema-qualified table name.
///
/// Table names cannot be bind parameters, so they are restricted to plain
/// identifiers and always emitted double-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    segments: Vec<String>,
}

impl TableName {
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        if raw.is_empty() {
            return Err(IdentifierError::Empty);
        }
        let segments = raw
            .split('.')
            .map(|segment| {
                if is_plain_identifier(segment) {
                    Ok(segment.to_string())
                } else {
                    Err(IdentifierError::Invalid(segment.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if segments.len() > 2 {
            return Err(IdentifierError::Invalid(raw.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn quoted(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("\"{s}\""))
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn is_plain_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Column type of the quest log's `mainIDX`, so the key is bound with a
/// matching type and the column's index stays usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MainIdxType {
    #[default]
    Integer,
    Text,
}

/// A `mainIDX` ready to be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainIdxKey<'a> {
    Integer(i64),
    Text(&'a str),
}

impl MainIdxType {
    /// `None` when the input cannot match any row of an integer column.
    pub fn key(self, raw: &str) -> Option<MainIdxKey<'_>> {
        match self {
            Self::Integer => raw.parse::<i64>().ok().map(MainIdxKey::Integer),
            Self::Text => Some(MainIdxKey::Text(raw)),
        }
    }
}

impl FromStr for MainIdxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" | "bigint" => Ok(Self::Integer),
            "text" | "varchar" => Ok(Self::Text),
            other => Err(format!("unknown column type `{other}`, expected `integer` or `text`")),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub member_table: TableName,
    pub quest_log_table: TableName,
    pub main_idx_type: MainIdxType,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("member_table", &self.member_table.quoted())
            .field("quest_log_table", &self.quest_log_table.quoted())
            .field("main_idx_type", &self.main_idx_type)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

/// Builds the pool without opening a connection; connections are checked out
/// per query, so a database outage surfaces on the command rather than at boot.
pub fn connect_lazy(config: &DatabaseConfig) -> DbPool {
    PgPoolOptions::new()
        .max_connections(5)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect_lazy_with(config.connect_options())
}
