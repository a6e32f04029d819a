//! Shared embed and button styling.

pub mod buttons;
pub mod style;
