//! Button-driven pagination over an in-memory result set.

pub mod manager;
pub mod state;

pub use manager::{NavOutcome, PagerManager, SharedPagers, schedule_expiry};
pub use state::{NavAction, PageField, PageView, PagerState};
