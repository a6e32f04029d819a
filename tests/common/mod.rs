//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use quest_checker_bot::database::models::{QuestLogRecord, QuestLogRow};
use quest_checker_bot::database::quests::QuestLogStore;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn record(n: usize) -> QuestLogRecord {
    QuestLogRow {
        account_idx: format!("{}", 1000 + n),
        nick_name: Some(format!("player{n}")),
        main_idx: "1234".into(),
        sub_idx: format!("{n}"),
    }
    .into()
}

pub fn records(count: usize) -> Vec<QuestLogRecord> {
    (1..=count).map(record).collect()
}

pub enum Behavior {
    Rows(Vec<QuestLogRecord>),
    Fail,
}

/// In-memory store that counts lookups and remembers the requested keys.
pub struct RecordingStore {
    behavior: Behavior,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl QuestLogStore for RecordingStore {
    async fn completed_quests(&self, main_idx: &str) -> Result<Vec<QuestLogRecord>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(main_idx.to_string());
        match &self.behavior {
            Behavior::Rows(rows) => Ok(rows.clone()),
            Behavior::Fail => Err(sqlx::Error::PoolTimedOut),
        }
    }
}
