//! Process configuration, read once from the environment at startup.
//!
//! Parsing goes through [`Config::from_lookup`] so tests can feed a plain map
//! instead of mutating the process environment.

use crate::database::init::{DatabaseConfig, MainIdxType, TableName};
use serenity::model::id::{GuildId, UserId};
use sqlx::postgres::PgSslMode;
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_MEMBER_TABLE: &str = "userMemberDB";
pub const DEFAULT_QUEST_LOG_TABLE: &str = "log_data_quest";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),
    #[error("`{var}` is not valid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// The set of Discord users allowed to run `/checkquest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList(HashSet<UserId>);

impl AllowList {
    pub fn permits(&self, user_id: UserId) -> bool {
        self.0.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<UserId> for AllowList {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for AllowList {
    type Err = String;

    /// Parses a comma separated list of user ids. Blank entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.parse::<u64>() {
                Ok(id) if id > 0 => Ok(UserId::new(id)),
                _ => Err(format!("`{entry}` is not a Discord user id")),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// When set, the command is registered on this guild only.
    pub guild_id: Option<GuildId>,
    pub allowed_users: AllowList,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| -> Result<String, ConfigError> {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };
        let optional = |var: &'static str| lookup(var).filter(|v| !v.trim().is_empty());

        let discord_token = required("DISCORD_BOT_TOKEN")?;

        let guild_id = optional("GUILD_ID")
            .map(|raw| match raw.trim().parse::<u64>() {
                Ok(id) if id > 0 => Ok(GuildId::new(id)),
                _ => Err(ConfigError::Invalid {
                    var: "GUILD_ID",
                    reason: format!("`{raw}` is not a guild id"),
                }),
            })
            .transpose()?;

        let allowed_users = lookup("ALLOWED_USERS")
            .unwrap_or_default()
            .parse::<AllowList>()
            .map_err(|reason| ConfigError::Invalid {
                var: "ALLOWED_USERS",
                reason,
            })?;

        let port_raw = required("DB_PORT")?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                var: "DB_PORT",
                reason: format!("`{port_raw}`: {e}"),
            })?;

        let ssl_mode = match optional("DB_SSL_MODE") {
            Some(raw) => PgSslMode::from_str(raw.trim()).map_err(|e| ConfigError::Invalid {
                var: "DB_SSL_MODE",
                reason: e.to_string(),
            })?,
            None => PgSslMode::Disable,
        };

        let main_idx_type = optional("DB_MAIN_IDX_TYPE")
            .map(|raw| {
                raw.trim()
                    .parse::<MainIdxType>()
                    .map_err(|reason| ConfigError::Invalid {
                        var: "DB_MAIN_IDX_TYPE",
                        reason,
                    })
            })
            .transpose()?
            .unwrap_or_default();

        let table = |var: &'static str, default: &str| -> Result<TableName, ConfigError> {
            let raw = optional(var).unwrap_or_else(|| default.to_string());
            TableName::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
            })
        };

        let database = DatabaseConfig {
            user: required("DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            host: required("DB_SERVER")?.trim().to_string(),
            port,
            name: required("DB_NAME")?.trim().to_string(),
            ssl_mode,
            member_table: table("DB_MEMBER_TABLE", DEFAULT_MEMBER_TABLE)?,
            quest_log_table: table("DB_QUEST_LOG_TABLE", DEFAULT_QUEST_LOG_TABLE)?,
            main_idx_type,
        };

        Ok(Self {
            discord_token,
            guild_id,
            allowed_users,
            database,
        })
    }
}
