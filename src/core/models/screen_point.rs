use serde::{Deserialize, Serialize};

/// A position in the host's global screen coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x_position: i32,
    pub y_position: i32,
}

impl ScreenPoint {
    pub fn at_coordinates(x_position: i32, y_position: i32) -> Self {
        log::debug!(
            "[SCREEN_POINT] creating point at ({}, {})",
            x_position,
            y_position
        );

        Self {
            x_position,
            y_position,
        }
    }

    pub fn default_origin() -> Self {
        log::debug!("[SCREEN_POINT] using default origin (0, 0)");

        Self {
            x_position: 0,
            y_position: 0,
        }
    }
}
