//! Contains the run logic for the `/checkquest` command.

use super::ui;
use crate::AppState;
use crate::config::AllowList;
use crate::constants::{MAIN_IDX_OPTION, PAGER_WINDOW_SECS};
use crate::database::quests::QuestLogStore;
use crate::error::QuestCheckError;
use crate::interactions::util::respond_command;
use crate::pager::{PagerState, schedule_expiry};
use serenity::model::application::CommandInteraction;
use serenity::model::id::UserId;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Reads the `mainidx` option, trimmed. Blank values count as missing.
pub fn main_idx_option(interaction: &CommandInteraction) -> Option<String> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == MAIN_IDX_OPTION)
        .and_then(|o| o.value.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Authorizes the caller and fetches the records for `main_idx`.
///
/// The allow-list is checked before anything else, so a rejected caller never
/// reaches the store.
#[instrument(level = "debug", skip(store, allowed), fields(user_id = user_id.get()))]
pub async fn check_quest(
    store: &dyn QuestLogStore,
    allowed: &AllowList,
    user_id: UserId,
    main_idx: Option<&str>,
) -> Result<PagerState, QuestCheckError> {
    if !allowed.permits(user_id) {
        return Err(QuestCheckError::PermissionDenied);
    }
    let main_idx = main_idx.ok_or(QuestCheckError::MissingArgument)?;
    let records = store.completed_quests(main_idx).await?;
    debug!(target = "checkquest", main_idx, rows = records.len());
    PagerState::new(user_id, main_idx, records).ok_or_else(|| QuestCheckError::NotFound {
        main_idx: main_idx.to_string(),
    })
}

/// The entry point for the slash command `/checkquest`.
pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, app_state: Arc<AppState>) {
    let main_idx = main_idx_option(interaction);
    let user_id = interaction.user.id;

    let outcome = match check_quest(
        app_state.quest_log.as_ref(),
        &app_state.allowed_users,
        user_id,
        main_idx.as_deref(),
    )
    .await
    {
        Ok(state) => open_pager(ctx, interaction, &app_state, state).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        if e.is_infrastructure() {
            error!(target = "checkquest", user_id = user_id.get(), main_idx = ?main_idx, error = %e, "An error occurred while fetching quest data");
        } else {
            info!(target = "checkquest", user_id = user_id.get(), main_idx = ?main_idx, reason = %e, "request rejected");
        }
        respond_command(ctx, interaction, "checkquest.err", ui::error_response(&e)).await;
    }
}

/// Sends page 0, registers the state under the reply's message id and arms the expiry.
///
/// Errors are returned only while the interaction is still unanswered; once the
/// result view is posted, failures are reported through a follow-up instead.
async fn open_pager(
    ctx: &Context,
    interaction: &CommandInteraction,
    app_state: &AppState,
    state: PagerState,
) -> Result<(), QuestCheckError> {
    interaction
        .create_response(&ctx.http, ui::result_response(&state.view()))
        .await?;

    let message = match interaction.get_response(&ctx.http).await {
        Ok(message) => message,
        Err(e) => {
            error!(target = "checkquest", user_id = interaction.user.id.get(), error = ?e, "result view posted but its message could not be fetched");
            abandon_result_view(ctx, interaction, &state).await;
            return Ok(());
        }
    };

    info!(
        target = "checkquest",
        user_id = interaction.user.id.get(),
        main_idx = state.main_idx(),
        records = state.total_records(),
        pages = state.page_count(),
        message_id = %message.id,
        "opened result view"
    );
    app_state.pagers.write().await.open(message.id, state);

    let http = Arc::clone(&ctx.http);
    let original = interaction.clone();
    schedule_expiry(
        app_state.pagers.clone(),
        message.id,
        Duration::from_secs(PAGER_WINDOW_SECS),
        move |state| async move {
            if let Err(e) = original.edit_response(&http, ui::controls_disabled(&state)).await {
                warn!(target = "pager", error = ?e, "failed to disable controls after expiry");
            }
        },
    );
    Ok(())
}

/// Best effort: tell the caller the view is unusable and freeze its buttons.
async fn abandon_result_view(ctx: &Context, interaction: &CommandInteraction, state: &PagerState) {
    if let Err(e) = interaction
        .create_followup(&ctx.http, ui::failure_followup())
        .await
    {
        warn!(target = "checkquest", error = ?e, "failed to send failure follow-up");
    }
    if let Err(e) = interaction
        .edit_response(&ctx.http, ui::controls_disabled(state))
        .await
    {
        warn!(target = "checkquest", error = ?e, "failed to disable controls on abandoned view");
    }
}
