//! Error type shared by the loader, the pickers and persistence.

use std::path::PathBuf;

/// Everything that can go wrong while loading, picking or saving.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    /// The image decoder rejected the file (missing, unreadable or unsupported format).
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A raw pixel buffer did not match the declared shape.
    #[error("pixel buffer of {len} samples does not match shape {rows}x{cols}x{bands}")]
    Shape {
        rows: usize,
        cols: usize,
        bands: usize,
        len: usize,
    },

    /// A saved point file contained a line that is neither a path nor a coordinate row.
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The display window could not be created or crashed.
    #[error("picker window failed: {0}")]
    Window(String),
}

impl From<eframe::Error> for PickError {
    fn from(e: eframe::Error) -> Self {
        PickError::Window(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PickError>;
