//! Image loading into a `(row, column, band)` pixel array.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::{PickError, Result};

/// Decoded 8-bit image, stored row-major as `data[(row * cols + col) * bands + band]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelArray {
    rows: usize,
    cols: usize,
    bands: usize,
    data: Vec<u8>,
}

impl PixelArray {
    /// Wrap a raw sample buffer. `bands` must be 1 to 4 and `data` must hold exactly
    /// `rows * cols * bands` samples.
    pub fn from_raw(rows: usize, cols: usize, bands: usize, data: Vec<u8>) -> Result<Self> {
        let expected = rows.checked_mul(cols).and_then(|n| n.checked_mul(bands));
        if !(1..=4).contains(&bands) || expected != Some(data.len()) {
            return Err(PickError::Shape {
                rows,
                cols,
                bands,
                len: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            bands,
            data,
        })
    }

    /// Convert a decoded image, keeping its band count.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (cols, rows) = (img.width() as usize, img.height() as usize);
        let (bands, data) = match img.color().channel_count() {
            1 => (1, img.into_luma8().into_raw()),
            2 => (2, img.into_luma_alpha8().into_raw()),
            3 => (3, img.into_rgb8().into_raw()),
            _ => (4, img.into_rgba8().into_raw()),
        };
        Self {
            rows,
            cols,
            bands,
            data,
        }
    }

    /// `(rows, cols, bands)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, self.bands)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bands(&self) -> usize {
        self.bands
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize, band: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols || band >= self.bands {
            return None;
        }
        self.data
            .get((row * self.cols + col) * self.bands + band)
            .copied()
    }

    /// Largest sample over all bands, `None` for an empty image.
    pub fn max(&self) -> Option<u8> {
        self.data.iter().copied().max()
    }

    /// Height over width. Empty images report `1.0`.
    pub fn aspect(&self) -> f64 {
        if self.cols == 0 {
            return 1.0;
        }
        self.rows as f64 / self.cols as f64
    }

    /// Copy with the row order reversed (top row becomes bottom row).
    pub fn flipped_vertically(&self) -> Self {
        let stride = self.cols * self.bands;
        let mut data = Vec::with_capacity(self.data.len());
        if stride > 0 {
            for row in self.data.chunks_exact(stride).rev() {
                data.extend_from_slice(row);
            }
        }
        Self {
            data,
            ..*self
        }
    }

    /// Expand to the RGBA image egui uploads as a texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.cols, self.rows];
        match self.bands {
            1 => egui::ColorImage::from_gray(size, &self.data),
            3 => egui::ColorImage::from_rgb(size, &self.data),
            4 => egui::ColorImage::from_rgba_unmultiplied(size, &self.data),
            _ => {
                let rgba: Vec<u8> = self
                    .data
                    .chunks_exact(2)
                    .flat_map(|la| [la[0], la[0], la[0], la[1]])
                    .collect();
                egui::ColorImage::from_rgba_unmultiplied(size, &rgba)
            }
        }
    }
}

/// Decode the image at `path`.
///
/// Errors from the decoder (missing file, unsupported format) are returned unchanged.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelArray> {
    let path = path.as_ref();
    let img = image::open(path)?;
    let pixels = PixelArray::from_dynamic(img);
    log::debug!("loaded {} with shape {:?}", path.display(), pixels.shape());
    Ok(pixels)
}

/// Something a picker can display: a file to decode or pixels already in memory.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Pixels(PixelArray),
}

impl ImageSource {
    /// Source path, if this image came from a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ImageSource::Path(p) => Some(p),
            ImageSource::Pixels(_) => None,
        }
    }

    pub fn load(self) -> Result<PixelArray> {
        match self {
            ImageSource::Path(p) => load_image(p),
            ImageSource::Pixels(px) => Ok(px),
        }
    }
}

impl From<PixelArray> for ImageSource {
    fn from(px: PixelArray) -> Self {
        ImageSource::Pixels(px)
    }
}

impl From<PathBuf> for ImageSource {
    fn from(p: PathBuf) -> Self {
        ImageSource::Path(p)
    }
}

impl From<&Path> for ImageSource {
    fn from(p: &Path) -> Self {
        ImageSource::Path(p.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(p: &str) -> Self {
        ImageSource::Path(PathBuf::from(p))
    }
}
