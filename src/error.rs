//! Failure modes of a `/checkquest` invocation.

use crate::constants::{
    MSG_MISSING_MAIN_IDX, MSG_PERMISSION_DENIED, MSG_QUERY_FAILED, not_found_message,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestCheckError {
    #[error("user is not on the allow-list")]
    PermissionDenied,
    #[error("no completed quests for main idx `{main_idx}`")]
    NotFound { main_idx: String },
    #[error("the `mainidx` option is missing or blank")]
    MissingArgument,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("discord error: {0}")]
    Discord(#[from] serenity::Error),
}

impl QuestCheckError {
    /// The ephemeral text shown to the invoking user.
    pub fn user_message(&self) -> String {
        match self {
            Self::PermissionDenied => MSG_PERMISSION_DENIED.to_string(),
            Self::NotFound { main_idx } => not_found_message(main_idx),
            Self::MissingArgument => MSG_MISSING_MAIN_IDX.to_string(),
            Self::Database(_) | Self::Discord(_) => MSG_QUERY_FAILED.to_string(),
        }
    }

    /// Infrastructure failures get logged server side; the rest are expected outcomes.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Discord(_))
    }
}
