//! Turns a [`PageView`] into the result embed and its navigation row.

use crate::constants::MSG_QUERY_FAILED;
use crate::error::QuestCheckError;
use crate::interactions::ids::nav_custom_id;
use crate::interactions::util::ephemeral;
use crate::pager::{NavAction, PageView, PagerState};
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_QUEST_CHECK, EMOJI_BACK, EMOJI_NEXT};
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::Timestamp;

pub fn create_result_embed(view: &PageView) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Hack Quest Checker")
        .description(format!("Result Quest Checker : **{}**", view.main_idx))
        .color(COLOR_QUEST_CHECK)
        .timestamp(Timestamp::now());

    for field in &view.fields {
        embed = embed
            .field("NickName", field.nickname.clone(), true)
            .field("Status Quest", field.status, true);
    }

    embed.footer(CreateEmbedFooter::new(view.footer()))
}

pub fn create_nav_row(view: &PageView) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        Btn::nav(
            nav_custom_id(NavAction::Back),
            &format!("{EMOJI_BACK} Back"),
            view.back_disabled,
        ),
        Btn::nav(
            nav_custom_id(NavAction::Next),
            &format!("{EMOJI_NEXT} Next"),
            view.next_disabled,
        ),
    ])
}

pub fn render_page(view: &PageView) -> (CreateEmbed, Vec<CreateActionRow>) {
    (create_result_embed(view), vec![create_nav_row(view)])
}

/// The public first reply carrying page 0.
pub fn result_response(view: &PageView) -> CreateInteractionResponse {
    let (embed, components) = render_page(view);
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    )
}

/// Caller-only reply for a request that never produced a result view.
pub fn error_response(err: &QuestCheckError) -> CreateInteractionResponse {
    ephemeral(err.user_message())
}

/// Failure notice sent once the result view has already been posted.
pub fn failure_followup() -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .content(MSG_QUERY_FAILED)
        .ephemeral(true)
}

/// Replaces the nav row with both buttons disabled.
pub fn controls_disabled(state: &PagerState) -> EditInteractionResponse {
    EditInteractionResponse::new().components(vec![create_nav_row(&state.expired_view())])
}
