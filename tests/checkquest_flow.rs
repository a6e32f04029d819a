//! Authorization and lookup behaviour of `/checkquest`, driven through a fake store.
mod common;

use common::{Behavior, RecordingStore, records};
use quest_checker_bot::commands::checkquest::run::check_quest;
use quest_checker_bot::config::AllowList;
use quest_checker_bot::constants::{MSG_PERMISSION_DENIED, MSG_QUERY_FAILED};
use quest_checker_bot::AppState;
use quest_checker_bot::error::QuestCheckError;
use quest_checker_bot::pager::{NavAction, NavOutcome};
use serenity::model::id::{MessageId, UserId};
use std::sync::Arc;

const GM: UserId = UserId::new(111);
const STRANGER: UserId = UserId::new(222);

fn allow_gm() -> AllowList {
    [GM].into_iter().collect()
}

#[tokio::test]
async fn unlisted_user_never_reaches_the_database() {
    let store = RecordingStore::new(Behavior::Rows(records(5)));
    for user in [STRANGER, UserId::new(1), UserId::new(u64::MAX)] {
        let err = check_quest(&store, &allow_gm(), user, Some("1234"))
            .await
            .unwrap_err();
        assert!(matches!(err, QuestCheckError::PermissionDenied));
        assert_eq!(err.user_message(), MSG_PERMISSION_DENIED);
    }
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn empty_allow_list_refuses_everyone() {
    let store = RecordingStore::new(Behavior::Rows(records(1)));
    let err = check_quest(&store, &AllowList::default(), GM, Some("1234"))
        .await
        .unwrap_err();
    assert!(matches!(err, QuestCheckError::PermissionDenied));
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn empty_result_is_not_found_with_the_requested_key() {
    let store = RecordingStore::new(Behavior::Rows(vec![]));
    let err = check_quest(&store, &allow_gm(), GM, Some("9999"))
        .await
        .unwrap_err();
    assert!(!err.is_infrastructure());
    assert_eq!(err.user_message(), "Quest data with Main IDX \"9999\" not found.");
    assert_eq!(store.requested(), vec!["9999".to_string()]);
}

#[tokio::test]
async fn database_failure_is_reported_generically() {
    let store = RecordingStore::new(Behavior::Fail);
    let err = check_quest(&store, &allow_gm(), GM, Some("1234"))
        .await
        .unwrap_err();
    assert!(err.is_infrastructure());
    assert_eq!(err.user_message(), MSG_QUERY_FAILED);
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn missing_key_skips_the_query() {
    let store = RecordingStore::new(Behavior::Rows(records(2)));
    let err = check_quest(&store, &allow_gm(), GM, None).await.unwrap_err();
    assert!(matches!(err, QuestCheckError::MissingArgument));
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn found_rows_open_a_pager_owned_by_the_caller() {
    let store = RecordingStore::new(Behavior::Rows(records(7)));
    let state = check_quest(&store, &allow_gm(), GM, Some("1234"))
        .await
        .expect("allowed user with rows gets a pager");
    assert_eq!(state.owner_id(), GM);
    assert_eq!(state.main_idx(), "1234");
    assert_eq!(state.total_records(), 7);
    assert_eq!(state.current_page(), 0);
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn one_app_state_serves_the_command_and_its_buttons() {
    let store = Arc::new(RecordingStore::new(Behavior::Rows(records(4))));
    let app_state = Arc::new(AppState::new(store.clone(), allow_gm()));
    let for_command = Arc::clone(&app_state);
    let for_click = Arc::clone(&app_state);

    let state = check_quest(
        for_command.quest_log.as_ref(),
        &for_command.allowed_users,
        GM,
        Some("1234"),
    )
    .await
    .expect("records found");
    let msg = MessageId::new(10);
    for_command.pagers.write().await.open(msg, state);

    match for_click.pagers.write().await.navigate(&msg, GM, NavAction::Next) {
        NavOutcome::Updated(view) => assert_eq!(view.page, 1),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(store.calls(), 1);
}
