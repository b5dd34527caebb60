use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::geometry::ShapeKind;
use crate::tools::Mode;

pub const MIN_DECORATION_SIZE: f32 = 0.5;
pub const MAX_DECORATION_SIZE: f32 = 2.0;

/// Hot pink, the swatch a new customer starts with.
pub const DEFAULT_COLOR: Color32 = Color32::from_rgb(255, 105, 180);

/// User choices that survive a restart. The design itself never does.
///
/// Color and decoration size are read at the moment an action is created and
/// copied into it, so changing them never alters marks already on the nails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct DoodleSettings {
    pub color: Color32,
    pub(crate) decoration_size: f32,
    pub shape: ShapeKind,
    pub mode: Mode,
    /// Where native builds write exported designs. `None` means the working
    /// directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for DoodleSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            decoration_size: 1.0,
            shape: ShapeKind::default(),
            mode: Mode::default(),
            export_dir: None,
        }
    }
}

impl DoodleSettings {
    pub fn decoration_size(&self) -> f32 {
        self.decoration_size
    }

    /// Stores `size` clamped into the slider range.
    pub fn set_decoration_size(&mut self, size: f32) {
        self.decoration_size = clamp_decoration_size(size);
    }

    /// Repairs values a hand-edited or stale storage entry may carry.
    pub fn sanitized(mut self) -> Self {
        self.decoration_size = clamp_decoration_size(self.decoration_size);
        self
    }
}

/// Clamps a size multiplier into the slider range. Non-finite values fall
/// back to 1.0.
pub(crate) fn clamp_decoration_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(MIN_DECORATION_SIZE, MAX_DECORATION_SIZE)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_pink_square_draw() {
        let settings = DoodleSettings::default();
        assert_eq!(settings.color, DEFAULT_COLOR);
        assert_eq!(settings.decoration_size(), 1.0);
        assert_eq!(settings.shape, ShapeKind::Square);
        assert_eq!(settings.mode, Mode::Draw);
    }

    #[test]
    fn decoration_size_is_clamped() {
        let mut settings = DoodleSettings::default();
        settings.set_decoration_size(5.0);
        assert_eq!(settings.decoration_size(), MAX_DECORATION_SIZE);
        settings.set_decoration_size(0.1);
        assert_eq!(settings.decoration_size(), MIN_DECORATION_SIZE);
        settings.set_decoration_size(f32::NAN);
        assert_eq!(settings.decoration_size(), 1.0);
        settings.set_decoration_size(1.25);
        assert_eq!(settings.decoration_size(), 1.25);
    }

    #[test]
    fn sanitized_repairs_out_of_range_size() {
        let settings = DoodleSettings {
            decoration_size: 9.0,
            ..Default::default()
        };
        assert_eq!(settings.sanitized().decoration_size(), MAX_DECORATION_SIZE);
    }
}
