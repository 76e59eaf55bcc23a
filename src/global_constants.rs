pub const APPLICATION_NAME: &str = "display-region-capture";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_LOCATOR: &str = "[LOCATOR]";
pub const LOG_TAG_THUMBNAIL: &str = "[THUMBNAIL]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_MOUSE: &str = "[MOUSE]";
pub const LOG_TAG_CHANNEL: &str = "[CHANNEL]";

pub const MESSAGE_MOUSE_POSITION_FAILED: &str = "failed to get mouse position, using (0,0)";
pub const MESSAGE_NO_DISPLAYS: &str = "host reported no displays";
pub const MESSAGE_CAPTURE_DELIVERED: &str = "capture message delivered";
pub const MESSAGE_CAPTURE_FAILED: &str = "capture failed, no message sent";

pub const ERROR_CONTEXT_ENUMERATE_MONITORS: &str = "Unable to enumerate monitors";
pub const ERROR_CONTEXT_SCALE_FACTOR: &str = "Unable to get scale factor";
pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "Unable to capture Monitor";
pub const ERROR_CONTEXT_MONITOR_GEOMETRY: &str = "Unable to read monitor geometry";

pub const DATA_URI_PREFIX: &str = "data:";
pub const DATA_URI_BASE64_MARKER: &str = ";base64,";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Largest drawing surface accepted, in pixels (16384 × 16384).
pub const MAX_CANVAS_AREA: u64 = 268_435_456;
