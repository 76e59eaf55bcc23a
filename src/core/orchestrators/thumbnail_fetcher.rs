use std::sync::Arc;

use image::DynamicImage;

use crate::core::errors::CaptureError;
use crate::core::interfaces::ports::{ThumbnailProvider, ThumbnailRequest};
use crate::core::models::{DisplayInfo, ImageFormat, RawThumbnail};
use crate::global_constants::LOG_TAG_THUMBNAIL;
use crate::utils::encode_data_uri;

pub struct ThumbnailFetcher {
    thumbnail_provider: Arc<dyn ThumbnailProvider>,
    thumbnail_format: ImageFormat,
}

impl ThumbnailFetcher {
    pub fn build(thumbnail_provider: Arc<dyn ThumbnailProvider>, thumbnail_format: ImageFormat) -> Self {
        Self {
            thumbnail_provider,
            thumbnail_format,
        }
    }

    /// Requests a `width × width` thumbnail of every screen and keeps the one
    /// whose display id matches `display`.
    pub async fn fetch(&self, display: &DisplayInfo) -> Result<RawThumbnail, CaptureError> {
        let edge = display.thumbnail_edge();
        let request = ThumbnailRequest::screens_within(edge, edge);

        log::debug!(
            "{} requesting {}x{} thumbnails for display {}",
            LOG_TAG_THUMBNAIL,
            edge,
            edge,
            display.id
        );

        let thumbnails = self
            .thumbnail_provider
            .capture_screen_thumbnails(request)
            .await
            .map_err(|e| CaptureError::HostEnumeration(format!("{:#}", e)))?;

        let matching = thumbnails
            .into_iter()
            .find(|thumbnail| thumbnail.display_id == display.id)
            .ok_or(CaptureError::DisplayNotFound {
                display_id: display.id,
            })?;

        log::info!(
            "{} got {}x{} thumbnail for display {}",
            LOG_TAG_THUMBNAIL,
            matching.image.width(),
            matching.image.height(),
            display.id
        );

        let image = encode_data_uri(
            &DynamicImage::ImageRgba8(matching.image),
            self.thumbnail_format,
        )
        .map_err(|e| CaptureError::Encode(format!("{:#}", e)))?;

        Ok(RawThumbnail {
            x: 0,
            y: 0,
            width: display.width,
            height: display.height,
            image,
        })
    }
}
