//! Flattening the design into a PNG for the booking flow.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::{ExportError, ExportResult};
use crate::renderer::CanvasFrame;

/// Name the exported design is saved or downloaded under.
pub const EXPORT_FILE_NAME: &str = "nail-art-design.png";

/// Encodes the frame as PNG bytes.
pub fn encode_png(frame: &CanvasFrame) -> ExportResult<Vec<u8>> {
    let (width, height) = (frame.width(), frame.height());
    let image = RgbaImage::from_raw(width, height, frame.to_rgba_unmultiplied())
        .ok_or(ExportError::FrameSize { width, height })?;

    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Writes the design into `dir` (the working directory when `None`).
#[cfg(not(target_arch = "wasm32"))]
pub fn export_design(
    frame: &CanvasFrame,
    dir: Option<&std::path::Path>,
) -> ExportResult<std::path::PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    let bytes = encode_png(frame)?;
    std::fs::write(&path, &bytes)?;
    log::info!("Exported design to {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Hands the design to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn export_design(frame: &CanvasFrame) -> ExportResult<()> {
    use eframe::wasm_bindgen::JsCast as _;

    let browser = |err: eframe::wasm_bindgen::JsValue| ExportError::Browser(format!("{err:?}"));

    let bytes = encode_png(frame)?;
    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(browser)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|el| browser(el.into()))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(browser)?;
    log::info!("Exported design as download ({} bytes)", bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;
    use crate::renderer::reduce;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn encoded_design_is_a_png_of_the_canvas_size() {
        let frame = reduce(ShapeKind::Oval, &[]).unwrap();
        let bytes = encode_png(&frame).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (400, 300));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn export_writes_the_named_file() {
        let dir = std::env::temp_dir().join(format!("nail_doodle_export_{}", std::process::id()));
        let frame = reduce(ShapeKind::Square, &[]).unwrap();
        let path = export_design(&frame, Some(&dir)).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        std::fs::remove_dir_all(&dir).ok();
    }
}
