use anyhow::Result;

use crate::core::models::CaptureMessage;

/// One-way channel to the process consuming captures. No acknowledgment.
pub trait MessageSink: Send + Sync {
    fn send(&self, message: CaptureMessage) -> Result<()>;
}
