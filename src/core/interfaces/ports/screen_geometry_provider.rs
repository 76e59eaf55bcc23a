use anyhow::Result;

use crate::core::models::{DisplayDescriptor, ScreenPoint};

/// Pointer position and display layout from the host. Both calls may block
/// on the windowing system.
pub trait ScreenGeometryProvider: Send + Sync {
    fn cursor_position(&self) -> Result<ScreenPoint>;

    fn all_displays(&self) -> Result<Vec<DisplayDescriptor>>;
}
