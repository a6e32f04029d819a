//! Tracks every live result message and routes button presses to its state.

use super::state::{NavAction, PageView, PagerState};
use serenity::model::id::{MessageId, UserId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub type SharedPagers = Arc<RwLock<PagerManager>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The owner pressed a button; this is the page to show now.
    Updated(PageView),
    /// Someone other than the invoking user pressed a button.
    NotOwner,
    /// No live state for this message (window closed or never opened).
    Expired,
}

#[derive(Default)]
pub struct PagerManager {
    active: HashMap<MessageId, PagerState>,
}

impl PagerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedPagers {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn open(&mut self, message_id: MessageId, state: PagerState) {
        self.active.insert(message_id, state);
    }

    /// The only place a live [`PagerState`] is mutated.
    pub fn navigate(
        &mut self,
        message_id: &MessageId,
        user_id: UserId,
        action: NavAction,
    ) -> NavOutcome {
        let Some(state) = self.active.get_mut(message_id) else {
            return NavOutcome::Expired;
        };
        if state.owner_id() != user_id {
            return NavOutcome::NotOwner;
        }
        let moved = state.apply(action);
        tracing::debug!(target = "pager", message_id = %message_id, page = state.current_page(), moved, action = ?action);
        NavOutcome::Updated(state.view())
    }

    pub fn close(&mut self, message_id: &MessageId) -> Option<PagerState> {
        self.active.remove(message_id)
    }
}

/// Closes the pager for `message_id` after `window` and hands the final state
/// to `on_expire`. Does nothing if the entry was already closed.
pub fn schedule_expiry<F, Fut>(
    pagers: SharedPagers,
    message_id: MessageId,
    window: Duration,
    on_expire: F,
) -> JoinHandle<()>
where
    F: FnOnce(PagerState) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(window).await;
        let closed = pagers.write().await.close(&message_id);
        if let Some(state) = closed {
            tracing::debug!(target = "pager", message_id = %message_id, page = state.current_page(), "navigation window closed");
            on_expire(state).await;
        }
    })
}
