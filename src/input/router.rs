use egui::{Key, PointerButton};

use super::InputEvent;
use crate::command::Command;
use crate::editor::Editor;
use crate::settings::DoodleSettings;
use crate::tools::{Mode, Tool, ToolContext, ToolType};

/// Routes input events through the active tool and into the editor.
#[derive(Debug, Clone)]
pub struct ModeController {
    tool: ToolType,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl ModeController {
    pub fn new(mode: Mode) -> Self {
        Self {
            tool: ToolType::for_mode(mode),
        }
    }

    pub fn mode(&self) -> Mode {
        self.tool.mode()
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.tool
    }

    /// Swaps the active tool, closing whatever the old one left open.
    pub fn set_mode(&mut self, mode: Mode, editor: &mut Editor) {
        if mode == self.mode() {
            return;
        }
        if let Some(command) = self.tool.deactivate() {
            editor.execute(command);
        }
        log::info!("Tool selected: {}", mode.label());
        self.tool = ToolType::for_mode(mode);
    }

    /// Handles one input event. Returns the command that reached the editor.
    pub fn route_event(
        &mut self,
        event: &InputEvent,
        editor: &mut Editor,
        settings: &DoodleSettings,
    ) -> Option<Command> {
        let ctx = ToolContext::new(editor.shape(), settings);
        let command = match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => self.tool.on_pointer_down(location.position, &ctx),
            InputEvent::PointerMove {
                location,
                held_buttons,
            } if held_buttons.contains(&PointerButton::Primary) => {
                self.tool.on_pointer_move(location.position, &ctx)
            }
            InputEvent::PointerUp {
                location,
                button: PointerButton::Primary,
            } => self.tool.on_pointer_up(location.position, &ctx),
            InputEvent::KeyDown { key, modifiers } => shortcut(*key, *modifiers),
            _ => None,
        }?;
        editor.execute(command.clone());
        Some(command)
    }
}

/// Keyboard shortcuts for undo and redo.
fn shortcut(key: Key, modifiers: egui::Modifiers) -> Option<Command> {
    if !modifiers.command {
        return None;
    }
    match key {
        Key::Z if modifiers.shift => Some(Command::Redo),
        Key::Z => Some(Command::Undo),
        Key::Y => Some(Command::Redo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Modifiers;

    #[test]
    fn command_z_undoes_and_shift_redoes() {
        assert_eq!(shortcut(Key::Z, Modifiers::COMMAND), Some(Command::Undo));
        assert_eq!(
            shortcut(Key::Z, Modifiers::COMMAND | Modifiers::SHIFT),
            Some(Command::Redo)
        );
        assert_eq!(shortcut(Key::Y, Modifiers::COMMAND), Some(Command::Redo));
        assert_eq!(shortcut(Key::Z, Modifiers::NONE), None);
        assert_eq!(shortcut(Key::A, Modifiers::COMMAND), None);
    }
}
