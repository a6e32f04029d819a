//! Row and display types for the quest log lookup.

use crate::constants::{MISSING_NICKNAME, QUEST_COMPLETED_LABEL};
use sqlx::FromRow;

/// One joined row as returned by the quest log query.
/// Every column is cast to text in SQL so the key types of the game schema don't leak in here.
#[derive(FromRow, Debug, Clone)]
pub struct QuestLogRow {
    pub account_idx: String,
    pub nick_name: Option<String>,
    pub main_idx: String,
    pub sub_idx: String,
}

/// A completed quest as shown to the game master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestLogRecord {
    pub account_id: String,
    pub nickname: String,
    pub main_id: String,
    pub sub_id: String,
    pub status_label: &'static str,
}

impl From<QuestLogRow> for QuestLogRecord {
    fn from(row: QuestLogRow) -> Self {
        let nickname = row
            .nick_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| MISSING_NICKNAME.to_string());
        Self {
            account_id: row.account_idx,
            nickname,
            main_id: row.main_idx,
            sub_id: row.sub_idx,
            status_label: QUEST_COMPLETED_LABEL,
        }
    }
}
