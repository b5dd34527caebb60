use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::renderer::CanvasFrame;

/// Keeps the GPU copy of the design frame in step with its pixels.
///
/// The frame is re-uploaded only when its revision moved since the last
/// upload.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    /// Revision of the frame currently on the GPU
    uploaded_revision: Option<u64>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `frame` has pixels the GPU has not seen yet.
    pub fn is_stale(&self, frame: &CanvasFrame) -> bool {
        self.uploaded_revision != Some(frame.revision())
    }

    /// Returns the texture showing `frame`, uploading it first if needed.
    pub fn texture_for(&mut self, ctx: &Context, frame: &CanvasFrame) -> TextureId {
        let stale = self.is_stale(frame);
        self.uploaded_revision = Some(frame.revision());
        match &mut self.handle {
            Some(handle) => {
                if stale {
                    handle.set(color_image(frame), TextureOptions::LINEAR);
                }
                handle.id()
            }
            None => {
                let handle = ctx.load_texture("nail_design", color_image(frame), TextureOptions::LINEAR);
                let id = handle.id();
                self.handle = Some(handle);
                id
            }
        }
    }
}

fn color_image(frame: &CanvasFrame) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [frame.width() as usize, frame.height() as usize],
        frame.data(),
    )
}
