//! Database access for the quest checker: connection setup, row models and
//! the quest log query.

pub mod init;
pub mod models;
pub mod quests;
