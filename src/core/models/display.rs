use serde::{Deserialize, Serialize};

use super::ScreenPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DisplayRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: &ScreenPoint) -> bool {
        let right = self.x as i64 + self.width as i64;
        let bottom = self.y as i64 + self.height as i64;
        let px = point.x_position as i64;
        let py = point.y_position as i64;

        px >= self.x as i64 && px < right && py >= self.y as i64 && py < bottom
    }

    /// Squared distance from `point` to the closest pixel of this rectangle;
    /// zero when the point lies inside.
    pub fn distance_squared_to(&self, point: &ScreenPoint) -> i64 {
        let left = self.x as i64;
        let top = self.y as i64;
        let right = left + (self.width as i64 - 1).max(0);
        let bottom = top + (self.height as i64 - 1).max(0);

        let px = point.x_position as i64;
        let py = point.y_position as i64;

        let dx = if px < left {
            left - px
        } else if px > right {
            px - right
        } else {
            0
        };
        let dy = if py < top {
            top - py
        } else if py > bottom {
            py - bottom
        } else {
            0
        };

        dx * dx + dy * dy
    }
}

/// A display as reported by the host's screen-geometry provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayDescriptor {
    pub id: u32,
    pub bounds: DisplayRect,
    pub work_area: DisplayRect,
    pub scale_factor: f64,
    pub is_primary: bool,
}

/// The display containing `point`, or the closest one when the point falls
/// in a gap between displays. Ties go to the earlier display.
pub fn display_nearest_point<'a>(
    displays: &'a [DisplayDescriptor],
    point: &ScreenPoint,
) -> Option<&'a DisplayDescriptor> {
    displays
        .iter()
        .find(|display| display.bounds.contains(point))
        .or_else(|| {
            displays
                .iter()
                .min_by_key(|display| display.bounds.distance_squared_to(point))
        })
}

/// The display flagged primary, else the first one enumerated.
pub fn primary_display(displays: &[DisplayDescriptor]) -> Option<&DisplayDescriptor> {
    displays
        .iter()
        .find(|display| display.is_primary)
        .or_else(|| displays.first())
}

/// Geometry of the display under the cursor, normalized so one unit is one
/// logical pixel on the running platform. Computed fresh per capture.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayInfo {
    pub id: u32,
    pub scale_factor: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayInfo {
    /// Edge length of the square thumbnail requested for this display.
    pub fn thumbnail_edge(&self) -> u32 {
        let rounded = self.width.round();

        if rounded.is_finite() && rounded >= 1.0 {
            rounded.min(u32::MAX as f64) as u32
        } else {
            1
        }
    }
}
