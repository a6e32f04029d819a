//! Component interaction routing and shared helpers.

pub mod checkquest_handler;
pub mod ids;
pub mod util;
