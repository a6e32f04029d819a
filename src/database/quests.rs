//! Quest log lookups against the game database.

use super::init::{DatabaseConfig, DbPool, MainIdxKey, MainIdxType, TableName};
use super::models::{QuestLogRecord, QuestLogRow};
use crate::constants::QUEST_COMPLETED_LOG_TYPE;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Read access to completed quest logs.
///
/// The command handler only talks to this trait, so the permission check can
/// be exercised without a live database.
#[async_trait]
pub trait QuestLogStore: Send + Sync {
    async fn completed_quests(&self, main_idx: &str) -> Result<Vec<QuestLogRecord>, sqlx::Error>;
}

/// Builds the join between the member table and the quest log table.
/// `$1` is the requested mainIDX, `$2` the log type. The key column is compared
/// as stored so an index on `mainIDX` can serve the lookup.
pub fn completed_quests_sql(member_table: &TableName, quest_log_table: &TableName) -> String {
    format!(
        r#"
        SELECT
            CAST(g."accountIDX" AS TEXT) AS account_idx,
            CAST(g."nickName" AS TEXT) AS nick_name,
            CAST(l."mainIDX" AS TEXT) AS main_idx,
            CAST(l."subIDX" AS TEXT) AS sub_idx
        FROM
            {member} AS g
        INNER JOIN
            {quest_log} AS l
        ON
            g."accountIDX" = l."accountIDX"
        WHERE
            l."mainIDX" = $1 AND l."logType" = $2
        ORDER BY
            g."accountIDX", l."subIDX";
        "#,
        member = member_table.quoted(),
        quest_log = quest_log_table.quoted(),
    )
}

/// Postgres-backed [`QuestLogStore`].
#[derive(Clone)]
pub struct PgQuestLog {
    pool: DbPool,
    sql: String,
    main_idx_type: MainIdxType,
}

impl PgQuestLog {
    pub fn new(pool: DbPool, config: &DatabaseConfig) -> Self {
        Self {
            pool,
            sql: completed_quests_sql(&config.member_table, &config.quest_log_table),
            main_idx_type: config.main_idx_type,
        }
    }
}

#[async_trait]
impl QuestLogStore for PgQuestLog {
    #[instrument(level = "debug", skip(self))]
    async fn completed_quests(&self, main_idx: &str) -> Result<Vec<QuestLogRecord>, sqlx::Error> {
        let query = sqlx::query_as::<_, QuestLogRow>(&self.sql);
        let query = match self.main_idx_type.key(main_idx) {
            Some(MainIdxKey::Integer(key)) => query.bind(key),
            Some(MainIdxKey::Text(key)) => query.bind(key),
            None => {
                debug!(target = "quests", main_idx, "key is not numeric; no row can match");
                return Ok(Vec::new());
            }
        };
        let rows = query
            .bind(QUEST_COMPLETED_LOG_TYPE)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(QuestLogRecord::from).collect())
    }
}
