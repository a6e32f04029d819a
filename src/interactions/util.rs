//! Shared interaction utility helpers (ephemeral replies + logged responses).
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use serenity::prelude::Context;

/// A reply only the invoking user can see.
pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Respond to a slash command; logs failure with a tag for observability.
pub async fn respond_command(
    ctx: &Context,
    c: &CommandInteraction,
    tag: &str,
    response: CreateInteractionResponse,
) {
    if let Err(e) = c.create_response(&ctx.http, response).await {
        tracing::error!(target="ui.respond", command=%c.data.name, tag=%tag, error=?e, "create_response failed");
    }
}

/// Respond to a component press; logs failure with a tag for observability.
pub async fn respond_component(
    ctx: &Context,
    c: &ComponentInteraction,
    tag: &str,
    response: CreateInteractionResponse,
) {
    if let Err(e) = c.create_response(&ctx.http, response).await {
        tracing::error!(target="ui.respond", cid=%c.data.custom_id, tag=%tag, error=?e, "create_response failed");
    }
}
