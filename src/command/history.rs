use egui::{Color32, Pos2};

use super::Action;
use crate::stroke::Stroke;

/// Logical state of the log. Nothing else about the count matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    HasActions,
}

/// The ordered log of actions that is the single source of truth for a design.
///
/// The log only ever grows at the end, shrinks at the end (undo), or is
/// cleared. Undone actions wait on a redo stack until something new is
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct History {
    actions: Vec<Action>,
    /// Actions removed by undo, most recent last
    redo_stack: Vec<Action>,
    /// Whether the trailing action is a stroke still being drawn
    stroke_open: bool,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HistoryState {
        if self.actions.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::HasActions
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn redo_stack(&self) -> &[Action] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Record a finished mark. Any undone actions are discarded.
    pub fn append(&mut self, action: Action) {
        self.stroke_open = false;
        self.redo_stack.clear();
        self.actions.push(action);
    }

    /// Start a stroke that later pointer moves will extend.
    pub fn begin_stroke(&mut self, color: Color32, start: Pos2) {
        self.append(Action::Stroke(Stroke::starting_at(color, start)));
        self.stroke_open = true;
    }

    /// Add a point to the open stroke and return the new visible segment.
    ///
    /// Returns `None` when no stroke is open.
    pub fn extend_stroke(&mut self, point: Pos2) -> Option<(Pos2, Pos2)> {
        if !self.stroke_open {
            return None;
        }
        match self.actions.last_mut() {
            Some(Action::Stroke(stroke)) => Some(stroke.push_point(point)),
            _ => None,
        }
    }

    /// Close the open stroke. It is already in the log.
    pub fn finish_stroke(&mut self) -> bool {
        std::mem::replace(&mut self.stroke_open, false)
    }

    pub fn is_stroke_open(&self) -> bool {
        self.stroke_open
    }

    /// Remove the last action. No-op on an empty log.
    pub fn undo(&mut self) -> Option<&Action> {
        let action = self.actions.pop()?;
        self.stroke_open = false;
        self.redo_stack.push(action);
        self.redo_stack.last()
    }

    /// Re-append the most recently undone action.
    pub fn redo(&mut self) -> Option<&Action> {
        let action = self.redo_stack.pop()?;
        self.stroke_open = false;
        self.actions.push(action);
        self.actions.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Forget everything, including undone actions.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.redo_stack.clear();
        self.stroke_open = false;
    }
}
