//! The history engine: owns the log, the frame, and the selected shape.
//!
//! Every structural change (fill, decoration, undo, redo, reset, shape switch)
//! rebuilds the frame by replaying the whole log. Only an open freehand stroke
//! paints incrementally, and finishing it replays once so the frame matches
//! the log again.

use egui::{Color32, Pos2};

use crate::command::{Action, Command, History};
use crate::error::RenderResult;
use crate::geometry::ShapeKind;
use crate::renderer::{CanvasFrame, Renderer};
use crate::state::EditorState;

#[derive(Debug)]
pub struct Editor {
    shape: ShapeKind,
    history: History,
    frame: CanvasFrame,
    renderer: Renderer,
    state: EditorState,
}

impl Editor {
    /// An empty design on `shape`.
    pub fn new(shape: ShapeKind) -> RenderResult<Self> {
        let renderer = Renderer::new();
        let mut frame = CanvasFrame::canvas()?;
        renderer.paint_outlines(&mut frame, shape);
        Ok(Self {
            shape,
            history: History::new(),
            frame,
            renderer,
            state: EditorState::Idle,
        })
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn actions(&self) -> &[Action] {
        self.history.actions()
    }

    pub fn frame(&self) -> &CanvasFrame {
        &self.frame
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Applies one command from a tool or panel.
    pub fn execute(&mut self, command: Command) {
        log::debug!("executing {command:?}");
        match command {
            Command::Append(action) => self.append(action),
            Command::BeginStroke { color, at } => self.begin_stroke(color, at),
            Command::ExtendStroke(at) => self.extend_stroke(at),
            Command::FinishStroke => self.finish_stroke(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Reset => self.reset(),
            Command::SwitchShape(shape) => self.switch_shape(shape),
        }
    }

    /// Records a finished mark and rebuilds the frame.
    pub fn append(&mut self, action: Action) {
        self.state = EditorState::Idle;
        self.history.append(action);
        self.replay();
    }

    /// Opens a stroke at `at` and paints its first dot.
    pub fn begin_stroke(&mut self, color: Color32, at: Pos2) {
        self.history.begin_stroke(color, at);
        self.state = EditorState::Drawing { color };
        self.renderer.paint_segment(&mut self.frame, at, at, color);
    }

    /// Extends the open stroke and paints only the new segment.
    pub fn extend_stroke(&mut self, at: Pos2) {
        let EditorState::Drawing { color } = self.state else {
            return;
        };
        if let Some((from, to)) = self.history.extend_stroke(at) {
            self.renderer.paint_segment(&mut self.frame, from, to, color);
        }
    }

    /// Closes the open stroke. It is already part of the history; the frame
    /// is replayed so the segment-by-segment paint is replaced by one path.
    pub fn finish_stroke(&mut self) {
        self.state = EditorState::Idle;
        if self.history.finish_stroke() {
            log::debug!("stroke finished, {} actions", self.history.len());
            self.replay();
        }
    }

    /// Drops the most recent action. No-op on an empty history.
    pub fn undo(&mut self) {
        self.state = EditorState::Idle;
        match self.history.undo() {
            Some(action) => {
                log::info!("undo {}", action.label());
                self.replay();
            }
            None => log::debug!("nothing to undo"),
        }
    }

    /// Restores the most recently undone action.
    pub fn redo(&mut self) {
        self.state = EditorState::Idle;
        match self.history.redo() {
            Some(action) => {
                log::info!("redo {}", action.label());
                self.replay();
            }
            None => log::debug!("nothing to redo"),
        }
    }

    /// Wipes the design, keeping the shape.
    pub fn reset(&mut self) {
        log::info!("resetting design on {:?}", self.shape);
        self.clear_and_paint_outlines();
    }

    /// Selects a new nail shape. A design is shape-specific, so it is wiped.
    pub fn switch_shape(&mut self, shape: ShapeKind) {
        log::info!("switching shape {:?} -> {:?}", self.shape, shape);
        self.shape = shape;
        self.clear_and_paint_outlines();
    }

    fn clear_and_paint_outlines(&mut self) {
        self.state = EditorState::Idle;
        self.history.clear();
        self.renderer.paint_outlines(&mut self.frame, self.shape);
    }

    fn replay(&mut self) {
        self.renderer
            .replay(&mut self.frame, self.shape, self.history.actions());
    }
}
