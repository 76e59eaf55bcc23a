use mouse_position::mouse_position::Mouse;

use crate::core::interfaces::ports::MousePositionProvider;
use crate::core::models::ScreenPoint;
use crate::global_constants::{LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED};

pub struct SystemMousePositionProvider;

impl SystemMousePositionProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing mouse position provider", LOG_TAG_MOUSE);
        Self
    }

    fn convert_mouse_reading_to_point(&self, reading: Mouse) -> Result<ScreenPoint, String> {
        match reading {
            Mouse::Position { x, y } => {
                log::debug!("{} current position: ({}, {})", LOG_TAG_MOUSE, x, y);
                Ok(ScreenPoint::at_coordinates(x, y))
            }
            Mouse::Error => {
                log::warn!("{} {}", LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED);
                Err(MESSAGE_MOUSE_POSITION_FAILED.to_string())
            }
        }
    }
}

impl MousePositionProvider for SystemMousePositionProvider {
    fn get_current_mouse_position(&self) -> Result<ScreenPoint, String> {
        self.convert_mouse_reading_to_point(Mouse::get_mouse_position())
    }
}
