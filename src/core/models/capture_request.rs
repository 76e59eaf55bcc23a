use serde::{Deserialize, Serialize};

use crate::global_constants::MAX_CANVAS_AREA;

/// Rectangle to extract, in the target display's logical coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRequest {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRequest {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn fits_canvas(&self) -> bool {
        self.width as u64 * self.height as u64 <= MAX_CANVAS_AREA
    }
}

/// The request echoed back with the cropped image attached as a data URI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    #[serde(flatten)]
    pub request: CaptureRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CaptureResult {
    pub fn pending(request: CaptureRequest) -> Self {
        Self {
            request,
            image: None,
        }
    }

    pub fn with_image(mut self, image_data_uri: String) -> Self {
        self.image = Some(image_data_uri);
        self
    }
}

/// Host-provided display snapshot before cropping.
#[derive(Clone, Debug, PartialEq)]
pub struct RawThumbnail {
    pub x: i32,
    pub y: i32,
    pub width: f64,
    pub height: f64,
    pub image: String,
}
