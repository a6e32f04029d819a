use crate::constants::COMMAND_NAME;
use crate::interactions::ids::{CHECKQUEST_FAMILY, family};
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{error, info, warn};

pub struct Handler {
    /// Register commands on this guild only; `None` registers them globally.
    pub guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            warn!(target = "handler", "AppState missing from TypeMap; dropping interaction");
            return;
        };
        match &interaction {
            Interaction::Command(command) => match command.data.name.as_str() {
                COMMAND_NAME => {
                    commands::checkquest::run::run_slash(&ctx, command, app_state).await
                },
                _ => {}
            },
            Interaction::Component(component) => {
                if family(&component.data.custom_id) == CHECKQUEST_FAMILY {
                    interactions::checkquest_handler::handle(&ctx, component, app_state).await
                }
            }
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("The bot is online: {}!", ready.user.tag());
        let commands_to_register = commands::all();
        let result = match self.guild_id {
            Some(guild_id) => guild_id
                .set_commands(&ctx.http, commands_to_register)
                .await
                .map(|c| c.len()),
            None => Command::set_global_commands(&ctx.http, commands_to_register)
                .await
                .map(|c| c.len()),
        };
        match result {
            Ok(count) => info!(target = "handler", count, guild_id = ?self.guild_id, "Slash commands on!"),
            Err(e) => error!(target = "handler", error = ?e, "Slash commands off"),
        }
    }
}
