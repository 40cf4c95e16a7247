//! Domain events - inbound chat events and the classifier's verdicts

mod action;
mod chat_event;

pub use action::{Action, IgnoreReason};
pub use chat_event::ChatEvent;
