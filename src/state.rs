use egui::Color32;

/// What the editor is doing between pointer events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    /// A freehand stroke is open at the end of the history.
    Drawing { color: Color32 },
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}
