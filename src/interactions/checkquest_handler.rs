//! Handles the Back / Next buttons on a `/checkquest` result message.

use crate::AppState;
use crate::commands::checkquest::ui::render_page;
use crate::constants::{MSG_EXPIRED, MSG_NOT_OWNER};
use crate::interactions::ids::parse_nav_action;
use crate::interactions::util::{ephemeral, respond_component};
use crate::pager::NavOutcome;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

#[tracing::instrument(level="debug", skip(ctx, component, app_state), fields(user_id = component.user.id.get(), cid = %component.data.custom_id))]
pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: Arc<AppState>) {
    let Some(action) = parse_nav_action(&component.data.custom_id) else {
        return;
    };

    // Hold the write lock only for the state transition, not the HTTP round trip.
    let outcome = app_state.pagers.write().await.navigate(
        &component.message.id,
        component.user.id,
        action,
    );

    respond_component(ctx, component, "checkquest.nav", nav_response(outcome)).await;
}

/// The reply for a button press: the new page for the owner, a caller-only notice otherwise.
pub fn nav_response(outcome: NavOutcome) -> CreateInteractionResponse {
    match outcome {
        NavOutcome::Updated(view) => {
            let (embed, components) = render_page(&view);
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .components(components),
            )
        }
        NavOutcome::NotOwner => ephemeral(MSG_NOT_OWNER),
        NavOutcome::Expired => ephemeral(MSG_EXPIRED),
    }
}
