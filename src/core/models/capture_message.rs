use serde::{Deserialize, Serialize};

use super::CaptureResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    CaptureScreen,
}

/// The single outbound message of a successful capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureMessage {
    pub kind: MessageKind,
    pub payload: CaptureResult,
}

impl CaptureMessage {
    pub fn capture_completed(payload: CaptureResult) -> Self {
        Self {
            kind: MessageKind::CaptureScreen,
            payload,
        }
    }
}
