//! Centralized custom_id string constants for interaction components.

use crate::pager::NavAction;

pub const CHECKQUEST_FAMILY: &str = "checkquest";
pub const CHECKQUEST_BACK: &str = "checkquest_back";
pub const CHECKQUEST_NEXT: &str = "checkquest_next";

pub fn nav_custom_id(action: NavAction) -> &'static str {
    match action {
        NavAction::Back => CHECKQUEST_BACK,
        NavAction::Next => CHECKQUEST_NEXT,
    }
}

pub fn parse_nav_action(id: &str) -> Option<NavAction> {
    match id {
        CHECKQUEST_BACK => Some(NavAction::Back),
        CHECKQUEST_NEXT => Some(NavAction::Next),
        _ => None,
    }
}

/// The command family a component belongs to, used for routing.
pub fn family(id: &str) -> &str {
    id.split('_').next().unwrap_or("")
}
