use anyhow::Result;
use async_trait::async_trait;
use image::RgbaImage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Screen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbnailRequest {
    pub source_kind: SourceKind,
    pub max_width: u32,
    pub max_height: u32,
}

impl ThumbnailRequest {
    pub fn screens_within(max_width: u32, max_height: u32) -> Self {
        Self {
            source_kind: SourceKind::Screen,
            max_width,
            max_height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DisplayThumbnail {
    pub display_id: u32,
    pub image: RgbaImage,
}

#[async_trait]
pub trait ThumbnailProvider: Send + Sync {
    async fn capture_screen_thumbnails(
        &self,
        request: ThumbnailRequest,
    ) -> Result<Vec<DisplayThumbnail>>;
}
