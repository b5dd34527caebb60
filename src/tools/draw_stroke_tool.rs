use egui::Pos2;

use super::{Tool, ToolContext};
use crate::command::Command;

/// Freehand drawing. The stroke lives in the history from pointer-down on;
/// this tool only remembers whether a drag is in progress.
#[derive(Debug, Clone, Default)]
pub struct DrawStrokeTool {
    drawing: bool,
}

impl DrawStrokeTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

impl Tool for DrawStrokeTool {
    fn name(&self) -> &'static str {
        "Draw"
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext) -> Option<Command> {
        self.drawing = true;
        Some(Command::BeginStroke {
            color: ctx.color,
            at: pos,
        })
    }

    fn on_pointer_move(&mut self, pos: Pos2, _ctx: &ToolContext) -> Option<Command> {
        // Each move uses its own event position
        self.drawing.then_some(Command::ExtendStroke(pos))
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &ToolContext) -> Option<Command> {
        std::mem::take(&mut self.drawing).then_some(Command::FinishStroke)
    }

    fn deactivate(&mut self) -> Option<Command> {
        std::mem::take(&mut self.drawing).then_some(Command::FinishStroke)
    }
}
