//! Page state for a single `/checkquest` result message.

use crate::constants::PAGE_SIZE;
use crate::database::models::QuestLogRecord;
use serenity::model::id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Next,
}

/// One record as it appears on a page: the nickname field and its status field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageField {
    pub nickname: String,
    pub status: &'static str,
}

/// Everything needed to draw one page. Produced by [`PagerState::view`], turned
/// into serenity builders by the command's ui module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub main_idx: String,
    pub page: usize,
    pub page_count: usize,
    pub fields: Vec<PageField>,
    pub back_disabled: bool,
    pub next_disabled: bool,
}

impl PageView {
    pub fn footer(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.page_count)
    }
}

#[derive(Debug, Clone)]
pub struct PagerState {
    records: Vec<QuestLogRecord>,
    current_page: usize,
    owner_id: UserId,
    main_idx: String,
}

impl PagerState {
    /// Returns `None` for an empty result; there is nothing to page through.
    pub fn new(
        owner_id: UserId,
        main_idx: impl Into<String>,
        records: Vec<QuestLogRecord>,
    ) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            records,
            current_page: 0,
            owner_id,
            main_idx: main_idx.into(),
        })
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn main_idx(&self) -> &str {
        &self.main_idx
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page + 1 >= self.page_count()
    }

    pub fn page_records(&self) -> &[QuestLogRecord] {
        let start = self.current_page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.records.len());
        &self.records[start..end]
    }

    /// Moves one page in the given direction. Out of range moves are ignored;
    /// returns whether the page changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Back if !self.is_first_page() => {
                self.current_page -= 1;
                true
            }
            NavAction::Next if !self.is_last_page() => {
                self.current_page += 1;
                true
            }
            _ => false,
        }
    }

    pub fn view(&self) -> PageView {
        PageView {
            main_idx: self.main_idx.clone(),
            page: self.current_page,
            page_count: self.page_count(),
            fields: self
                .page_records()
                .iter()
                .map(|r| PageField {
                    nickname: r.nickname.clone(),
                    status: r.status_label,
                })
                .collect(),
            back_disabled: self.is_first_page(),
            next_disabled: self.is_last_page(),
        }
    }

    /// The final rendering once the navigation window has closed.
    pub fn expired_view(&self) -> PageView {
        PageView {
            back_disabled: true,
            next_disabled: true,
            ..self.view()
        }
    }
}
