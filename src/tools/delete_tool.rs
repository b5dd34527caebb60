use egui::Pos2;

use super::{Tool, ToolContext};
use crate::command::Command;

/// Every click removes the most recent mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteTool;

impl Tool for DeleteTool {
    fn name(&self) -> &'static str {
        "Delete"
    }

    fn on_pointer_down(&mut self, _pos: Pos2, _ctx: &ToolContext) -> Option<Command> {
        Some(Command::Undo)
    }
}
