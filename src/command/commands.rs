use egui::{Color32, Pos2};

use super::Action;
use crate::geometry::ShapeKind;

/// Requests the tools and panels hand to the editor.
///
/// Commands are transient; only the [`Action`]s they produce are recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a finished mark and rebuild the frame.
    Append(Action),
    /// Pointer went down in draw mode.
    BeginStroke { color: Color32, at: Pos2 },
    /// Pointer moved while drawing.
    ExtendStroke(Pos2),
    /// Pointer released, or the draw tool was put down.
    FinishStroke,
    Undo,
    Redo,
    Reset,
    SwitchShape(ShapeKind),
}
