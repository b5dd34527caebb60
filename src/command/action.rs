use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::decoration::DecorationKind;
use crate::stroke::Stroke;

/// One visible mark on the design.
///
/// Replaying an action needs nothing besides the action itself and the
/// currently selected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Freehand line.
    Stroke(Stroke),
    /// Solid color flooded into one nail outline.
    Fill { region_index: usize, color: Color32 },
    /// A stamped ornament.
    Decoration {
        kind: DecorationKind,
        at: Pos2,
        color: Color32,
        /// Decoration-size multiplier captured when the stamp was placed.
        size: f32,
        /// Pins the sparkle layout of glitter so replays are identical.
        seed: u64,
    },
}

impl Action {
    /// Short label used by the history listing.
    pub fn label(&self) -> String {
        match self {
            Action::Stroke(stroke) => format!("Stroke ({} pts)", stroke.points().len()),
            Action::Fill { region_index, .. } => format!("Fill nail {}", region_index + 1),
            Action::Decoration { kind, .. } => kind.label().to_owned(),
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Action::Stroke(stroke) => stroke.color(),
            Action::Fill { color, .. } | Action::Decoration { color, .. } => *color,
        }
    }
}
