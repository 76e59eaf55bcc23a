use std::io::{Stdout, Write};
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::MessageSink;
use crate::core::models::CaptureMessage;
use crate::global_constants::LOG_TAG_CHANNEL;

/// Writes each message as one JSON line, for a parent process reading our
/// standard output.
pub struct JsonLinesMessageSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl JsonLinesMessageSink<Stdout> {
    pub fn to_stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonLinesMessageSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|_| anyhow::anyhow!("message writer lock poisoned"))
    }
}

impl<W: Write + Send> MessageSink for JsonLinesMessageSink<W> {
    fn send(&self, message: CaptureMessage) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("message writer lock poisoned"))?;

        serde_json::to_writer(&mut *writer, &message).context("failed to serialize message")?;
        writer.write_all(b"\n").context("failed to write message")?;
        writer.flush().context("failed to flush message")?;

        log::debug!("{} wrote {:?} message", LOG_TAG_CHANNEL, message.kind);
        Ok(())
    }
}
