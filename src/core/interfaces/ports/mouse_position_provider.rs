use crate::core::models::ScreenPoint;

pub trait MousePositionProvider: Send + Sync {
    fn get_current_mouse_position(&self) -> Result<ScreenPoint, String>;
}
