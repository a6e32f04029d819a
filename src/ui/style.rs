//! Central UI style constants and helpers.
pub const COLOR_QUEST_CHECK: u32 = 0x00AE86; // Teal

pub const EMOJI_BACK: &str = "⬅️";
pub const EMOJI_NEXT: &str = "➡️";

// Standard target width for padded nav button labels.
pub const BTN_W_NAV: usize = 10;

/// Pads a label to a target visible width using spaces so the two nav buttons line up.
/// Discord strips excessive trailing spaces, so the pad is clamped to 2.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_nav(label: &str) -> String {
    pad_label(label, BTN_W_NAV)
}
