use egui::Pos2;

use super::{Tool, ToolContext};
use crate::command::{Action, Command};
use crate::geometry;

/// Floods the nail under the pointer. Clicks between nails are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillTool;

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "Fill"
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext) -> Option<Command> {
        let region_index = geometry::hit_test(ctx.shape, pos)?;
        Some(Command::Append(Action::Fill {
            region_index,
            color: ctx.color,
        }))
    }
}
