mod action;
mod commands;
mod history;

pub use action::Action;
pub use commands::Command;
pub use history::{History, HistoryState};
