use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use anyhow::Result;
use async_trait::async_trait;
use image::{Rgba, RgbaImage};

use crate::core::interfaces::ports::{
    DisplayThumbnail, MessageSink, ScreenGeometryProvider, ThumbnailProvider, ThumbnailRequest,
};
use crate::core::models::{CaptureMessage, DisplayDescriptor, DisplayRect, ScreenPoint};

pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x / 256) * 40) as u8, 255])
    })
}

pub fn display_descriptor(
    id: u32,
    bounds: DisplayRect,
    scale_factor: f64,
    is_primary: bool,
) -> DisplayDescriptor {
    DisplayDescriptor {
        id,
        bounds,
        work_area: bounds,
        scale_factor,
        is_primary,
    }
}

pub struct FakeScreenGeometry {
    cursor: Result<ScreenPoint, String>,
    displays: Vec<DisplayDescriptor>,
    enumerations: AtomicUsize,
}

impl FakeScreenGeometry {
    pub fn with_cursor(x: i32, y: i32, displays: Vec<DisplayDescriptor>) -> Self {
        Self {
            cursor: Ok(ScreenPoint::at_coordinates(x, y)),
            displays,
            enumerations: AtomicUsize::new(0),
        }
    }

    pub fn without_cursor(displays: Vec<DisplayDescriptor>) -> Self {
        Self {
            cursor: Err("no pointer".to_string()),
            displays,
            enumerations: AtomicUsize::new(0),
        }
    }

    pub fn enumeration_count(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }
}

impl ScreenGeometryProvider for FakeScreenGeometry {
    fn cursor_position(&self) -> Result<ScreenPoint> {
        self.cursor.clone().map_err(|e| anyhow::anyhow!(e))
    }

    fn all_displays(&self) -> Result<Vec<DisplayDescriptor>> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        Ok(self.displays.clone())
    }
}

pub struct FakeThumbnailProvider {
    pub outcome: Result<Vec<DisplayThumbnail>, String>,
    pub requests: Mutex<Vec<ThumbnailRequest>>,
}

impl FakeThumbnailProvider {
    pub fn returning(thumbnails: Vec<DisplayThumbnail>) -> Self {
        Self {
            outcome: Ok(thumbnails),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_requests(&self) -> Vec<ThumbnailRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ThumbnailProvider for FakeThumbnailProvider {
    async fn capture_screen_thumbnails(
        &self,
        request: ThumbnailRequest,
    ) -> Result<Vec<DisplayThumbnail>> {
        self.requests.lock().unwrap().push(request);
        self.outcome.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

#[derive(Default)]
pub struct RecordingMessageSink {
    pub messages: Mutex<Vec<CaptureMessage>>,
}

impl RecordingMessageSink {
    pub fn sent_messages(&self) -> Vec<CaptureMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl MessageSink for RecordingMessageSink {
    fn send(&self, message: CaptureMessage) -> Result<()> {
        self.messages.lock().unwrap().push(message);
        Ok(())
    }
}

thread_local! {
    static CAPTURED_LOGS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records log lines per thread, so parallel tests only see their own.
struct ThreadLocalLogger;

impl log::Log for ThreadLocalLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED_LOGS.with(|logs| {
            logs.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: ThreadLocalLogger = ThreadLocalLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Installs the recording logger and clears this thread's log lines.
pub fn start_capturing_logs() {
    INSTALL_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });

    CAPTURED_LOGS.with(|logs| logs.borrow_mut().clear());
}

pub fn captured_logs_at(level: log::Level) -> Vec<String> {
    CAPTURED_LOGS.with(|logs| {
        logs.borrow()
            .iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
