//! This module defines the shared data structures used throughout the application.
//! These structs are used as `TypeMapKey`s to store shared state in Serenity's global context.

use crate::config::AllowList;
use crate::database::quests::QuestLogStore;
use crate::pager::{PagerManager, SharedPagers};
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for access from any handler.
pub struct AppState {
    /// Source of quest log records. `PgQuestLog` in production.
    pub quest_log: Arc<dyn QuestLogStore>,
    /// Users allowed to run `/checkquest`.
    pub allowed_users: AllowList,
    /// Live result messages keyed by message id.
    pub pagers: SharedPagers,
}

impl AppState {
    pub fn new(quest_log: Arc<dyn QuestLogStore>, allowed_users: AllowList) -> Self {
        Self {
            quest_log,
            allowed_users,
            pagers: PagerManager::shared(),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
