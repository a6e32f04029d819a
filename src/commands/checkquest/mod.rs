//! The `/checkquest` command: look up who completed a quest and page through them.

pub mod run;
pub mod ui;

use crate::constants::{COMMAND_NAME, MAIN_IDX_OPTION};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;

pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Check quest progress on mainIDX.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, MAIN_IDX_OPTION, "Enter MainIDX")
                .required(true),
        )
}
