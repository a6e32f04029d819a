// src/commands/mod.rs
// This file declares the existence of our command modules.

pub mod checkquest;

use serenity::builder::CreateCommand;

/// Every slash command the bot registers on startup.
pub fn all() -> Vec<CreateCommand> {
    vec![checkquest::register()]
}
