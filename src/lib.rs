//! Captures a rectangle of the display under the mouse cursor and forwards
//! it, as a data URI, to a consuming process over a one-way message channel.

pub mod adapters;
pub mod core;
pub mod global_constants;
pub mod ports;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use crate::core::errors::CaptureError;
pub use crate::core::models::{CaptureMessage, CaptureRequest, CaptureResult, CaptureSettings};
pub use crate::core::orchestrators::CaptureOrchestrator;
