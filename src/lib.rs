#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod decoration;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod stroke;
pub mod texture_manager;
pub mod tools;

pub use app::DoodleApp;
pub use command::{Action, Command, History};
pub use decoration::DecorationKind;
pub use editor::Editor;
pub use geometry::{NailRegion, ShapeKind};
pub use input::{InputEvent, InputLocation, ModeController};
pub use renderer::{CanvasFrame, Renderer, reduce};
pub use settings::DoodleSettings;
pub use state::EditorState;
pub use stroke::Stroke;
pub use tools::{Mode, Tool};
