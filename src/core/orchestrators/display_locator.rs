use std::sync::Arc;

use crate::core::errors::CaptureError;
use crate::core::interfaces::ports::ScreenGeometryProvider;
use crate::core::models::{
    display_nearest_point, primary_display, DisplayDescriptor, DisplayInfo, Platform, ScreenPoint,
};
use crate::global_constants::{LOG_TAG_LOCATOR, MESSAGE_MOUSE_POSITION_FAILED, MESSAGE_NO_DISPLAYS};

/// Finds the display under the cursor and normalizes its geometry for the
/// platform's scale-factor conventions.
pub struct DisplayLocator {
    geometry_provider: Arc<dyn ScreenGeometryProvider>,
    platform: Platform,
}

impl DisplayLocator {
    pub fn build(geometry_provider: Arc<dyn ScreenGeometryProvider>, platform: Platform) -> Self {
        log::debug!("{} using {} geometry policy", LOG_TAG_LOCATOR, platform);

        Self {
            geometry_provider,
            platform,
        }
    }

    /// Reads the cursor and the display layout once, on a blocking worker,
    /// so the nearest and primary displays come from the same snapshot.
    pub async fn locate(&self) -> Result<DisplayInfo, CaptureError> {
        let geometry_provider = Arc::clone(&self.geometry_provider);

        let (cursor_reading, displays) = tokio::task::spawn_blocking(move || {
            (
                geometry_provider.cursor_position(),
                geometry_provider.all_displays(),
            )
        })
        .await
        .map_err(|e| CaptureError::DisplayLookup(format!("geometry task did not complete: {}", e)))?;

        let cursor = Self::cursor_or_origin(cursor_reading);
        let displays = displays.map_err(|e| CaptureError::DisplayLookup(format!("{:#}", e)))?;

        let nearest = display_nearest_point(&displays, &cursor)
            .ok_or_else(|| CaptureError::DisplayLookup(MESSAGE_NO_DISPLAYS.to_string()))?;
        let primary = primary_display(&displays)
            .ok_or_else(|| CaptureError::DisplayLookup(MESSAGE_NO_DISPLAYS.to_string()))?;

        let display_info = self.normalize(nearest, primary);

        log::info!(
            "{} display {} at ({}, {}) size {}x{}, scale_factor={}",
            LOG_TAG_LOCATOR,
            display_info.id,
            display_info.x,
            display_info.y,
            display_info.width,
            display_info.height,
            display_info.scale_factor
        );

        Ok(display_info)
    }

    fn cursor_or_origin(cursor_reading: anyhow::Result<ScreenPoint>) -> ScreenPoint {
        match cursor_reading {
            Ok(point) => point,
            Err(e) => {
                log::warn!("{} {}: {:#}", LOG_TAG_LOCATOR, MESSAGE_MOUSE_POSITION_FAILED, e);
                ScreenPoint::default_origin()
            }
        }
    }

    fn normalize(&self, display: &DisplayDescriptor, primary: &DisplayDescriptor) -> DisplayInfo {
        let policy = self.platform.geometry_policy();

        let scale = if policy.relative_scale && primary.scale_factor > 0.0 {
            display.scale_factor / primary.scale_factor
        } else {
            1.0
        };
        let base = if policy.use_work_area {
            display.work_area
        } else {
            display.bounds
        };
        let origin_scale = if scale >= 1.0 { scale } else { 1.0 };

        log::debug!(
            "{} display {} scale_factor={} primary_scale_factor={} scale={}",
            LOG_TAG_LOCATOR,
            display.id,
            display.scale_factor,
            primary.scale_factor,
            scale
        );

        DisplayInfo {
            id: display.id,
            scale_factor: display.scale_factor,
            x: base.x as f64 * origin_scale,
            y: base.y as f64 * origin_scale,
            width: base.width as f64 * scale,
            height: base.height as f64 * scale,
        }
    }
}
