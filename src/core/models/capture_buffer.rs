use anyhow::{Context, Result};
use image::{DynamicImage, RgbaImage};

use crate::global_constants::MAX_CANVAS_AREA;

const BYTES_PER_PIXEL: usize = 4;

/// Decoded RGBA pixels, used both for the decoded thumbnail and for the
/// off-screen surface the requested region is drawn onto.
#[derive(Clone)]
pub struct CaptureBuffer {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CaptureBuffer {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "[CAPTURE_BUFFER] building buffer: {}x{}",
            width_pixels,
            height_pixels
        );

        Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        let (width_pixels, height_pixels) = rgba.dimensions();

        Self::build_from_raw_data(width_pixels, height_pixels, rgba.into_raw())
    }

    #[cfg(test)]
    pub(crate) fn pixel_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let start = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let pixel = self.raw_data.get(start..start + BYTES_PER_PIXEL)?;

        Some([pixel[0], pixel[1], pixel[2], pixel[3]])
    }

    /// Copies the `canvas_width × canvas_height` source rectangle at `(x, y)`
    /// onto a fresh transparent surface of exactly that size, the way a 2D
    /// canvas `drawImage` does for an unscaled copy. Source pixels outside
    /// this buffer leave the matching surface pixels transparent.
    pub fn draw_region_onto_canvas(
        &self,
        x: i32,
        y: i32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self> {
        if canvas_width == 0 || canvas_height == 0 {
            anyhow::bail!("Canvas dimensions must be greater than zero");
        }

        let canvas_area = canvas_width as u64 * canvas_height as u64;
        if canvas_area > MAX_CANVAS_AREA {
            anyhow::bail!(
                "Canvas of {}x{} exceeds the maximum area of {} pixels",
                canvas_width,
                canvas_height,
                MAX_CANVAS_AREA
            );
        }

        let canvas_len = (canvas_width as usize)
            .checked_mul(canvas_height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .context("Canvas dimensions overflow")?;
        let mut canvas = Vec::new();
        canvas
            .try_reserve_exact(canvas_len)
            .with_context(|| format!("Unable to allocate {} bytes for canvas", canvas_len))?;
        canvas.resize(canvas_len, 0u8);

        let source_left = x as i64;
        let source_top = y as i64;
        let overlap_left = source_left.max(0);
        let overlap_top = source_top.max(0);
        let overlap_right = (source_left + canvas_width as i64).min(self.width as i64);
        let overlap_bottom = (source_top + canvas_height as i64).min(self.height as i64);

        log::debug!(
            "[CAPTURE_BUFFER] drawing {}x{} at ({}, {}) from {}x{}",
            canvas_width,
            canvas_height,
            x,
            y,
            self.width,
            self.height
        );

        if overlap_right > overlap_left && overlap_bottom > overlap_top {
            let row_bytes = (overlap_right - overlap_left) as usize * BYTES_PER_PIXEL;
            let canvas_column = (overlap_left - source_left) as usize;

            for row in overlap_top..overlap_bottom {
                let source_start =
                    (row as usize * self.width as usize + overlap_left as usize) * BYTES_PER_PIXEL;
                let canvas_row = (row - source_top) as usize;
                let canvas_start =
                    (canvas_row * canvas_width as usize + canvas_column) * BYTES_PER_PIXEL;

                let source_row = self
                    .raw_data
                    .get(source_start..source_start + row_bytes)
                    .context("Source region exceeds image bounds")?;
                canvas[canvas_start..canvas_start + row_bytes].copy_from_slice(source_row);
            }
        }

        Ok(Self::build_from_raw_data(canvas_width, canvas_height, canvas))
    }

    pub fn into_image(self) -> Result<DynamicImage> {
        let rgba = RgbaImage::from_raw(self.width, self.height, self.raw_data)
            .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw data"))?;

        Ok(DynamicImage::ImageRgba8(rgba))
    }
}
