//! Nail outline geometry.
//!
//! Every [`ShapeKind`] describes the same five fingers laid out left to right on
//! the 400x300 design canvas. The bounding boxes never overlap, and the outline
//! of each finger is built from its box according to the shape kind.

pub mod hit_testing;

pub use hit_testing::hit_test;

use egui::{Pos2, Rect, pos2, vec2};
use serde::{Deserialize, Serialize};

/// Logical canvas size in pixels.
pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 300;

/// Number of nails on one hand.
pub const REGION_COUNT: usize = 5;

/// Bounding boxes of the square and oval nails, `(x, y, width, height)`.
const NAIL_BOXES: [(f32, f32, f32, f32); REGION_COUNT] = [
    (30.0, 100.0, 50.0, 120.0),
    (100.0, 70.0, 55.0, 150.0),
    (175.0, 55.0, 60.0, 165.0),
    (255.0, 70.0, 55.0, 150.0),
    (330.0, 100.0, 45.0, 120.0),
];

/// Stiletto nails are narrower than their square/oval counterparts.
const STILETTO_WIDTH_FACTOR: f32 = 0.8;

/// The nail outline family chosen by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Square,
    Oval,
    Stiletto,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Oval, ShapeKind::Stiletto];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Square => "Square",
            ShapeKind::Oval => "Oval",
            ShapeKind::Stiletto => "Stiletto",
        }
    }
}

/// One finger outline area. Carries geometry only, never paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NailRegion {
    pub index: usize,
    /// Top-left corner of the bounding box.
    pub anchor: Pos2,
    pub width: f32,
    pub height: f32,
}

impl NailRegion {
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.anchor, vec2(self.width, self.height))
    }

    pub fn center(&self) -> Pos2 {
        self.bounds().center()
    }
}

/// The five regions of `shape`, in left-to-right index order.
pub fn regions_for(shape: ShapeKind) -> [NailRegion; REGION_COUNT] {
    std::array::from_fn(|index| {
        let (x, y, width, height) = NAIL_BOXES[index];
        match shape {
            ShapeKind::Square | ShapeKind::Oval => NailRegion {
                index,
                anchor: pos2(x, y),
                width,
                height,
            },
            ShapeKind::Stiletto => {
                let narrow = width * STILETTO_WIDTH_FACTOR;
                NailRegion {
                    index,
                    anchor: pos2(x + (width - narrow) / 2.0, y),
                    width: narrow,
                    height,
                }
            }
        }
    })
}

/// A single segment of an outline path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Pos2),
    LineTo(Pos2),
    /// Quadratic curve: control point, then end point.
    QuadTo(Pos2, Pos2),
    Close,
}

/// A closed vector path, independent of any rendering backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlinePath {
    commands: Vec<PathCommand>,
}

impl OutlinePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Pos2) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Pos2) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(mut self, ctrl: Pos2, end: Pos2) -> Self {
        self.commands.push(PathCommand::QuadTo(ctrl, end));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[Pos2]) -> Self {
        let mut path = Self::new();
        for (i, p) in points.iter().enumerate() {
            path = if i == 0 { path.move_to(*p) } else { path.line_to(*p) };
        }
        path.close()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Every point the path references, control points included.
    pub fn points(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.commands.iter().flat_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
            PathCommand::QuadTo(c, p) => vec![c, p],
            PathCommand::Close => Vec::new(),
        })
    }
}

/// Outline of `region` drawn in the style of `shape`.
pub fn outline_path(region: &NailRegion, shape: ShapeKind) -> OutlinePath {
    let NailRegion {
        anchor: Pos2 { x, y },
        width: w,
        height: h,
        ..
    } = *region;

    match shape {
        ShapeKind::Square => OutlinePath::polygon(&[
            pos2(x, y),
            pos2(x + w, y),
            pos2(x + w, y + h),
            pos2(x, y + h),
        ]),
        ShapeKind::Oval => OutlinePath::new()
            .move_to(pos2(x, y + h))
            .line_to(pos2(x, y + w * 0.5))
            .quad_to(pos2(x, y), pos2(x + w * 0.5, y))
            .quad_to(pos2(x + w, y), pos2(x + w, y + w * 0.5))
            .line_to(pos2(x + w, y + h))
            .close(),
        ShapeKind::Stiletto => OutlinePath::new()
            .move_to(pos2(x, y + h))
            .line_to(pos2(x, y + h * 0.45))
            .quad_to(pos2(x + w * 0.1, y + h * 0.1), pos2(x + w * 0.5, y))
            .quad_to(pos2(x + w * 0.9, y + h * 0.1), pos2(x + w, y + h * 0.45))
            .line_to(pos2(x + w, y + h))
            .close(),
    }
}
