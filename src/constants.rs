// Central constants for the quest checker.
pub const COMMAND_NAME: &str = "checkquest";
pub const MAIN_IDX_OPTION: &str = "mainidx";

/// Records shown per embed page.
pub const PAGE_SIZE: usize = 3;
/// Lifetime of the navigation buttons, measured from the first render.
pub const PAGER_WINDOW_SECS: u64 = 60;

/// `logType` code for a completed quest in the quest log table.
pub const QUEST_COMPLETED_LOG_TYPE: i32 = 3;
pub const QUEST_COMPLETED_LABEL: &str = "Quest Completed";
pub const MISSING_NICKNAME: &str = "Not Found";

// User-facing replies.
pub const MSG_PERMISSION_DENIED: &str = "You do not have permission to use this command.";
pub const MSG_QUERY_FAILED: &str = "An error occurred while fetching quest data. Please try again.";
pub const MSG_MISSING_MAIN_IDX: &str =
    "Please provide a Main IDX, e.g. `/checkquest mainidx:1234`.";
pub const MSG_NOT_OWNER: &str = "You can't control this embed.";
pub const MSG_EXPIRED: &str = "This quest view has expired.";

pub fn not_found_message(main_idx: &str) -> String {
    format!("Quest data with Main IDX \"{main_idx}\" not found.")
}
