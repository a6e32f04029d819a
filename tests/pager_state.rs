//! Page math, button disabling and rendering round trips.
mod common;

use common::{record, records};
use quest_checker_bot::constants::{MISSING_NICKNAME, QUEST_COMPLETED_LABEL};
use quest_checker_bot::database::models::{QuestLogRecord, QuestLogRow};
use quest_checker_bot::pager::{NavAction, PagerState};
use serenity::model::id::UserId;

const OWNER: UserId = UserId::new(42);

fn pager(count: usize) -> PagerState {
    PagerState::new(OWNER, "1234", records(count)).expect("non-empty")
}

#[test]
fn empty_results_have_no_pager() {
    assert!(PagerState::new(OWNER, "9999", vec![]).is_none());
}

#[test]
fn page_count_is_ceiling_of_thirds() {
    for (n, pages) in [(1, 1), (2, 1), (3, 1), (4, 2), (6, 2), (7, 3), (9, 3), (10, 4)] {
        assert_eq!(pager(n).page_count(), pages, "{n} records");
    }
}

#[test]
fn buttons_disable_exactly_at_the_ends() {
    for n in 1..=13 {
        let mut state = pager(n);
        let last = state.page_count() - 1;
        for page in 0..=last {
            let view = state.view();
            assert_eq!(view.page, page);
            assert_eq!(view.back_disabled, page == 0, "{n} records, page {page}");
            assert_eq!(view.next_disabled, page == last, "{n} records, page {page}");
            state.apply(NavAction::Next);
        }
        // Pressing past the end leaves the page alone.
        assert_eq!(state.current_page(), last);
        assert!(!state.apply(NavAction::Next));
        assert_eq!(state.current_page(), last);
    }
}

#[test]
fn single_page_has_both_buttons_disabled() {
    let view = pager(3).view();
    assert!(view.back_disabled);
    assert!(view.next_disabled);
    assert_eq!(view.footer(), "Page 1 of 1");
}

#[test]
fn back_on_first_page_is_ignored() {
    let mut state = pager(5);
    assert!(!state.apply(NavAction::Back));
    assert_eq!(state.current_page(), 0);
}

#[test]
fn next_then_back_restores_the_same_rendering() {
    let mut state = pager(8);
    for page in 0..2 {
        let before = state.view();
        assert_eq!(before.page, page);
        assert!(state.apply(NavAction::Next));
        assert!(state.apply(NavAction::Back));
        assert_eq!(state.view(), before);
        state.apply(NavAction::Next);
    }
}

#[test]
fn seven_records_walkthrough() {
    let mut state = pager(7);

    let first = state.view();
    assert_eq!(first.fields.len(), 3);
    let nicknames: Vec<_> = first.fields.iter().map(|f| f.nickname.as_str()).collect();
    assert_eq!(nicknames, ["player1", "player2", "player3"]);
    assert!(first.back_disabled);
    assert!(!first.next_disabled);
    assert_eq!(first.footer(), "Page 1 of 3");

    state.apply(NavAction::Next);
    state.apply(NavAction::Next);
    let last = state.view();
    assert_eq!(last.page, 2);
    assert_eq!(last.fields.len(), 1);
    assert_eq!(last.fields[0].nickname, "player7");
    assert_eq!(last.fields[0].status, QUEST_COMPLETED_LABEL);
    assert!(!last.back_disabled);
    assert!(last.next_disabled);
    assert_eq!(last.footer(), "Page 3 of 3");
}

#[test]
fn expired_view_disables_both_buttons_on_any_page() {
    let mut state = pager(9);
    state.apply(NavAction::Next);
    let expired = state.expired_view();
    assert!(expired.back_disabled);
    assert!(expired.next_disabled);
    assert_eq!(expired.fields, state.view().fields);
}

#[test]
fn row_mapping_fills_in_placeholders() {
    let missing: QuestLogRecord = QuestLogRow {
        account_idx: "7".into(),
        nick_name: None,
        main_idx: "1234".into(),
        sub_idx: "2".into(),
    }
    .into();
    assert_eq!(missing.nickname, MISSING_NICKNAME);
    assert_eq!(missing.status_label, QUEST_COMPLETED_LABEL);

    let blank: QuestLogRecord = QuestLogRow {
        account_idx: "8".into(),
        nick_name: Some("   ".into()),
        main_idx: "1234".into(),
        sub_idx: "3".into(),
    }
    .into();
    assert_eq!(blank.nickname, MISSING_NICKNAME);

    let named = record(4);
    assert_eq!(named.nickname, "player4");
    assert_eq!(named.account_id, "1004");
    assert_eq!(named.sub_id, "4");
}
