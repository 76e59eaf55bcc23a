mod capture_buffer;
mod capture_message;
mod capture_request;
mod capture_settings;
mod display;
mod image_format;
mod platform;
mod screen_point;

pub use capture_buffer::CaptureBuffer;
pub use capture_message::{CaptureMessage, MessageKind};
pub use capture_request::{CaptureRequest, CaptureResult, RawThumbnail};
pub use capture_settings::CaptureSettings;
pub use display::{
    display_nearest_point, primary_display, DisplayDescriptor, DisplayInfo, DisplayRect,
};
pub use image_format::ImageFormat;
pub use platform::{GeometryPolicy, Platform};
pub use screen_point::ScreenPoint;
