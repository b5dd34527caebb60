use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::decoration::DecorationKind;
use crate::geometry::ShapeKind;
use crate::settings::DoodleSettings;

mod delete_tool;
mod draw_stroke_tool;
mod fill_tool;
mod stamp_tool;

pub use delete_tool::DeleteTool;
pub use draw_stroke_tool::DrawStrokeTool;
pub use fill_tool::FillTool;
pub use stamp_tool::StampTool;

/// The interaction mode picked in the tools panel. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Draw,
    Fill,
    Delete,
    Decorate(DecorationKind),
}

impl Mode {
    pub const ALL: [Mode; 8] = [
        Mode::Draw,
        Mode::Fill,
        Mode::Delete,
        Mode::Decorate(DecorationKind::Flower),
        Mode::Decorate(DecorationKind::Bow),
        Mode::Decorate(DecorationKind::Star),
        Mode::Decorate(DecorationKind::Heart),
        Mode::Decorate(DecorationKind::Glitter),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Draw => "🖌 Draw",
            Mode::Fill => "Fill",
            Mode::Delete => "⌫ Delete",
            Mode::Decorate(kind) => kind.label(),
        }
    }
}

/// Everything a tool may read when turning a pointer event into a command.
///
/// Color and size are sampled here, at the moment the mark is created.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext {
    pub shape: ShapeKind,
    pub color: Color32,
    pub decoration_size: f32,
}

impl ToolContext {
    pub fn new(shape: ShapeKind, settings: &DoodleSettings) -> Self {
        Self {
            shape,
            color: settings.color,
            decoration_size: settings.decoration_size(),
        }
    }
}

/// Tool trait defines how one mode reacts to pointer input.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Pointer pressed on the canvas.
    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext) -> Option<Command>;

    /// Pointer dragged while held down.
    fn on_pointer_move(&mut self, _pos: Pos2, _ctx: &ToolContext) -> Option<Command> {
        None
    }

    /// Pointer released.
    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &ToolContext) -> Option<Command> {
        None
    }

    /// Called when another tool takes over. Returns a command that closes any
    /// interaction still in progress.
    fn deactivate(&mut self) -> Option<Command> {
        None
    }
}

/// Enum representing all available tools, so the controller can hold one
/// without boxing.
#[derive(Debug, Clone)]
pub enum ToolType {
    DrawStroke(DrawStrokeTool),
    Fill(FillTool),
    Delete(DeleteTool),
    Stamp(StampTool),
}

impl ToolType {
    /// A fresh tool for `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Draw => Self::DrawStroke(DrawStrokeTool::new()),
            Mode::Fill => Self::Fill(FillTool),
            Mode::Delete => Self::Delete(DeleteTool),
            Mode::Decorate(kind) => Self::Stamp(StampTool::new(kind)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::DrawStroke(_) => Mode::Draw,
            Self::Fill(_) => Mode::Fill,
            Self::Delete(_) => Mode::Delete,
            Self::Stamp(tool) => Mode::Decorate(tool.kind()),
        }
    }

    fn inner(&mut self) -> &mut dyn Tool {
        match self {
            Self::DrawStroke(tool) => tool,
            Self::Fill(tool) => tool,
            Self::Delete(tool) => tool,
            Self::Stamp(tool) => tool,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::DrawStroke(tool) => tool.name(),
            Self::Fill(tool) => tool.name(),
            Self::Delete(tool) => tool.name(),
            Self::Stamp(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext) -> Option<Command> {
        self.inner().on_pointer_down(pos, ctx)
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext) -> Option<Command> {
        self.inner().on_pointer_move(pos, ctx)
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &ToolContext) -> Option<Command> {
        self.inner().on_pointer_up(pos, ctx)
    }

    fn deactivate(&mut self) -> Option<Command> {
        self.inner().deactivate()
    }
}
