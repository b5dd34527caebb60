use egui::Pos2;

use super::{Tool, ToolContext};
use crate::command::{Action, Command};
use crate::decoration::DecorationKind;

/// Stamps one ornament per click.
#[derive(Debug, Clone, Copy)]
pub struct StampTool {
    kind: DecorationKind,
}

impl StampTool {
    pub fn new(kind: DecorationKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> DecorationKind {
        self.kind
    }
}

impl Tool for StampTool {
    fn name(&self) -> &'static str {
        self.kind.label()
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext) -> Option<Command> {
        Some(Command::Append(Action::Decoration {
            kind: self.kind,
            at: pos,
            color: ctx.color,
            size: ctx.decoration_size,
            seed: rand::random(),
        }))
    }
}
