use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect, pos2};

use crate::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH};

mod router;
pub use router::ModeController;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in logical canvas coordinates (400x300)
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

impl InputLocation {
    /// A location already expressed in canvas coordinates.
    pub fn canvas(position: Pos2) -> Self {
        Self {
            position,
            is_in_canvas: logical_canvas_rect().contains(position),
        }
    }
}

/// Represents the input events the editor reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// The design canvas in its own coordinate space.
pub fn logical_canvas_rect() -> Rect {
    Rect::from_min_max(Pos2::ZERO, pos2(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32))
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// Where the canvas is drawn on screen
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Maps a screen position into canvas coordinates.
    pub fn to_canvas(&self, screen: Pos2) -> Pos2 {
        let rect = self.canvas_rect;
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return screen;
        }
        let logical = logical_canvas_rect();
        pos2(
            (screen.x - rect.min.x) * logical.width() / rect.width(),
            (screen.y - rect.min.y) * logical.height() / rect.height(),
        )
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, screen: Pos2) -> InputLocation {
        InputLocation {
            position: self.to_canvas(screen),
            is_in_canvas: self.canvas_rect.contains(screen),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            // Presses come first so a drag's first point is the press position
            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = input.pointer.press_origin().or(hover) {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            if let Some(pos) = hover {
                if self.last_pointer_pos.is_some() && Some(pos) != self.last_pointer_pos {
                    let held_buttons = [PointerButton::Primary, PointerButton::Secondary]
                        .into_iter()
                        .filter(|b| input.pointer.button_down(*b))
                        .collect();
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        held_buttons,
                    });
                }
            }
            self.last_pointer_pos = hover;

            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_released(button) {
                    let pos = hover.or(input.pointer.latest_pos());
                    if let Some(pos) = pos {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}
