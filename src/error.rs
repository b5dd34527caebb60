use thiserror::Error;

/// Errors raised while preparing a drawing surface
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to allocate a {width}x{height} drawing surface")]
    SurfaceAllocation { width: u32, height: u32 },
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while exporting the finished design
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write design: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser refused the download: {0}")]
    Browser(String),

    #[error("Frame data does not match its {width}x{height} size")]
    FrameSize { width: u32, height: u32 },
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
