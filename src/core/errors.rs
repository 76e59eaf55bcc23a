use thiserror::Error;

/// Why a capture attempt produced no message.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("invalid capture request: {0}")]
    InvalidRequest(String),

    #[error("display lookup failed: {0}")]
    DisplayLookup(String),

    #[error("host thumbnail enumeration failed: {0}")]
    HostEnumeration(String),

    #[error("no thumbnail source found for display {display_id}")]
    DisplayNotFound { display_id: u32 },

    #[error("failed to decode thumbnail: {0}")]
    Decode(String),

    #[error("failed to encode captured region: {0}")]
    Encode(String),

    #[error("failed to deliver capture message: {0}")]
    Delivery(String),
}
