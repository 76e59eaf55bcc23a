use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::interfaces::ports::MessageSink;
use crate::core::models::CaptureMessage;
use crate::global_constants::LOG_TAG_CHANNEL;

/// Hands capture messages to a consumer task in the same process.
pub struct ChannelMessageSink {
    sender: UnboundedSender<CaptureMessage>,
}

impl ChannelMessageSink {
    pub fn channel() -> (Self, UnboundedReceiver<CaptureMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }
}

impl MessageSink for ChannelMessageSink {
    fn send(&self, message: CaptureMessage) -> Result<()> {
        log::debug!("{} queueing {:?} message", LOG_TAG_CHANNEL, message.kind);

        self.sender
            .send(message)
            .map_err(|_| anyhow::anyhow!("capture message receiver was dropped"))
    }
}
