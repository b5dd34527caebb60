// src/renderer.rs
use egui::{Color32, Pos2};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, PremultipliedColorU8,
    Transform,
};

use crate::command::Action;
use crate::decoration::{self, Primitive};
use crate::error::{RenderError, RenderResult};
use crate::geometry::{self, CANVAS_HEIGHT, CANVAS_WIDTH, OutlinePath, PathCommand, ShapeKind};

/// Background behind the nails.
pub const BACKGROUND: Color32 = Color32::WHITE;
/// Neutral tone of an unpainted nail.
pub const NAIL_BASE: Color32 = Color32::from_rgb(253, 240, 235);
/// Light border drawn around every nail.
pub const NAIL_BORDER: Color32 = Color32::from_rgb(204, 204, 204);

pub const STROKE_WIDTH: f32 = 4.0;
pub const BORDER_WIDTH: f32 = 2.0;

/// The raster a design is painted into.
///
/// Only the [`Renderer`] paints into a frame. The revision is bumped on every
/// paint so the UI knows when to re-upload its texture.
#[derive(Clone)]
pub struct CanvasFrame {
    pixmap: Pixmap,
    revision: u64,
}

impl std::fmt::Debug for CanvasFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasFrame")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("revision", &self.revision)
            .finish()
    }
}

impl CanvasFrame {
    /// Allocates a transparent frame of the given size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(RenderError::SurfaceAllocation { width, height })?;
        Ok(Self {
            pixmap,
            revision: 0,
        })
    }

    /// A frame the size of the design canvas.
    pub fn canvas() -> RenderResult<Self> {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Straight-alpha color of one pixel, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixmap.pixel(x, y).map(|p: PremultipliedColorU8| {
            let c = p.demultiply();
            Color32::from_rgba_unmultiplied(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Straight-alpha RGBA bytes, as image encoders expect them.
    pub fn to_rgba_unmultiplied(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    fn touch(&mut self) -> &mut Pixmap {
        self.revision = self.revision.wrapping_add(1);
        &mut self.pixmap
    }
}

/// Paints nails, strokes, fills and ornaments into a [`CanvasFrame`].
///
/// The renderer keeps no drawing state between calls; the frame to paint into
/// is always passed explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clears the frame and paints the empty nails of `shape`.
    pub fn paint_outlines(&self, frame: &mut CanvasFrame, shape: ShapeKind) {
        frame.touch().fill(to_skia(BACKGROUND));
        for region in geometry::regions_for(shape) {
            let Some(path) = build_path(&geometry::outline_path(&region, shape)) else {
                continue;
            };
            let pixmap = frame.touch();
            fill(pixmap, &path, NAIL_BASE);
            stroke(pixmap, &path, NAIL_BORDER, BORDER_WIDTH);
        }
    }

    /// Draws a continuous line through `points`. A single point becomes a dot.
    pub fn paint_stroke(&self, frame: &mut CanvasFrame, points: &[Pos2], color: Color32) {
        match points {
            [] => {}
            [only] => self.paint_dot(frame, *only, color),
            [first, rest @ ..] => {
                let mut pb = PathBuilder::new();
                pb.move_to(first.x, first.y);
                for p in rest {
                    pb.line_to(p.x, p.y);
                }
                if let Some(path) = pb.finish() {
                    stroke(frame.touch(), &path, color, STROKE_WIDTH);
                }
            }
        }
    }

    /// Draws one segment of a stroke that is still being dragged.
    pub fn paint_segment(&self, frame: &mut CanvasFrame, from: Pos2, to: Pos2, color: Color32) {
        if from == to {
            self.paint_dot(frame, to, color);
        } else {
            self.paint_stroke(frame, &[from, to], color);
        }
    }

    /// Floods one nail with `color`, then restores its border.
    pub fn paint_fill(
        &self,
        frame: &mut CanvasFrame,
        region_index: usize,
        color: Color32,
        shape: ShapeKind,
    ) {
        let Some(region) = geometry::regions_for(shape).get(region_index).copied() else {
            log::warn!("fill for unknown nail {region_index} skipped");
            return;
        };
        let Some(path) = build_path(&geometry::outline_path(&region, shape)) else {
            return;
        };
        let pixmap = frame.touch();
        fill(pixmap, &path, color);
        stroke(pixmap, &path, NAIL_BORDER, BORDER_WIDTH);
    }

    /// Stamps the ornament a decoration action describes, using only the
    /// coordinates recorded in the action.
    pub fn paint_decoration(&self, frame: &mut CanvasFrame, action: &Action) {
        let Action::Decoration {
            kind,
            at,
            color,
            size,
            seed,
        } = action
        else {
            return;
        };
        for primitive in decoration::generate(*kind, *at, *size, *color, *seed) {
            self.paint_primitive(frame, &primitive);
        }
    }

    /// Paints one recorded action.
    pub fn paint_action(&self, frame: &mut CanvasFrame, shape: ShapeKind, action: &Action) {
        match action {
            Action::Stroke(s) => self.paint_stroke(frame, s.points(), s.color()),
            Action::Fill {
                region_index,
                color,
            } => self.paint_fill(frame, *region_index, *color, shape),
            Action::Decoration { .. } => self.paint_decoration(frame, action),
        }
    }

    /// Rebuilds the frame from scratch: outlines first, then every action in
    /// log order.
    pub fn replay(&self, frame: &mut CanvasFrame, shape: ShapeKind, actions: &[Action]) {
        self.paint_outlines(frame, shape);
        for action in actions {
            self.paint_action(frame, shape, action);
        }
    }

    fn paint_dot(&self, frame: &mut CanvasFrame, at: Pos2, color: Color32) {
        self.paint_primitive(
            frame,
            &Primitive::Disc {
                center: at,
                radius: STROKE_WIDTH / 2.0,
                color,
            },
        );
    }

    fn paint_primitive(&self, frame: &mut CanvasFrame, primitive: &Primitive) {
        let (path, color) = match primitive {
            Primitive::Disc {
                center,
                radius,
                color,
            } => (PathBuilder::from_circle(center.x, center.y, *radius), *color),
            Primitive::Path { path, color } => (build_path(path), *color),
        };
        if let Some(path) = path {
            fill(frame.touch(), &path, color);
        }
    }
}

/// A fresh canvas-sized frame holding `actions` replayed over `shape`.
pub fn reduce(shape: ShapeKind, actions: &[Action]) -> RenderResult<CanvasFrame> {
    let mut frame = CanvasFrame::canvas()?;
    Renderer::new().replay(&mut frame, shape, actions);
    Ok(frame)
}

fn to_skia(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn paint_for(color: Color32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    paint.anti_alias = true;
    paint
}

fn fill(pixmap: &mut Pixmap, path: &Path, color: Color32) {
    pixmap.fill_path(
        path,
        &paint_for(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn stroke(pixmap: &mut Pixmap, path: &Path, color: Color32, width: f32) {
    let style = tiny_skia::Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(path, &paint_for(color), &style, Transform::identity(), None);
}

fn build_path(outline: &OutlinePath) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for cmd in outline.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCommand::LineTo(p) => pb.line_to(p.x, p.y),
            PathCommand::QuadTo(c, p) => pb.quad_to(c.x, c.y, p.x, p.y),
            PathCommand::Close => pb.close(),
        }
    }
    pb.finish()
}
