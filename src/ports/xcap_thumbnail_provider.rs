use anyhow::{Context, Result};
use async_trait::async_trait;
use image::imageops::FilterType;
use image::RgbaImage;

use crate::core::interfaces::ports::{DisplayThumbnail, ThumbnailProvider, ThumbnailRequest};
use crate::global_constants::{
    ERROR_CONTEXT_CAPTURE_MONITOR, ERROR_CONTEXT_ENUMERATE_MONITORS, ERROR_CONTEXT_MONITOR_GEOMETRY,
    LOG_TAG_THUMBNAIL,
};

pub struct XcapThumbnailProvider;

impl XcapThumbnailProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap thumbnail provider", LOG_TAG_THUMBNAIL);
        Self
    }

    fn capture_all_monitors() -> Result<Vec<DisplayThumbnail>> {
        let monitors = xcap::Monitor::all().context(ERROR_CONTEXT_ENUMERATE_MONITORS)?;
        let mut captures = Vec::with_capacity(monitors.len());

        for monitor in monitors.iter() {
            let display_id = monitor.id().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?;
            let captured = monitor
                .capture_image()
                .with_context(|| ERROR_CONTEXT_CAPTURE_MONITOR)?;

            let (width_pixels, height_pixels) = (captured.width(), captured.height());
            let image = RgbaImage::from_raw(width_pixels, height_pixels, captured.into_raw())
                .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw data"))?;

            log::debug!(
                "{} captured monitor {} at {}x{}",
                LOG_TAG_THUMBNAIL,
                display_id,
                width_pixels,
                height_pixels
            );

            captures.push(DisplayThumbnail { display_id, image });
        }

        Ok(captures)
    }

    fn fit_within(image: RgbaImage, max_width: u32, max_height: u32) -> RgbaImage {
        let (target_width, target_height) =
            fitted_dimensions(image.width(), image.height(), max_width, max_height);

        if (target_width, target_height) == image.dimensions() {
            return image;
        }

        image::imageops::resize(&image, target_width, target_height, FilterType::Triangle)
    }
}

/// Largest size with the source aspect ratio that fits the requested box.
fn fitted_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let ratio = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    let fitted_width = ((width as f64 * ratio).round() as u32).max(1);
    let fitted_height = ((height as f64 * ratio).round() as u32).max(1);

    (fitted_width, fitted_height)
}

#[async_trait]
impl ThumbnailProvider for XcapThumbnailProvider {
    async fn capture_screen_thumbnails(
        &self,
        request: ThumbnailRequest,
    ) -> Result<Vec<DisplayThumbnail>> {
        let captures = tokio::task::spawn_blocking(Self::capture_all_monitors)
            .await
            .context("monitor capture task did not complete")??;

        let thumbnails = captures
            .into_iter()
            .map(|capture| DisplayThumbnail {
                display_id: capture.display_id,
                image: Self::fit_within(capture.image, request.max_width, request.max_height),
            })
            .collect::<Vec<_>>();

        log::info!(
            "{} enumerated {} screen thumbnails within {}x{}",
            LOG_TAG_THUMBNAIL,
            thumbnails.len(),
            request.max_width,
            request.max_height
        );

        Ok(thumbnails)
    }
}
