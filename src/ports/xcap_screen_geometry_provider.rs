use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::{MousePositionProvider, ScreenGeometryProvider};
use crate::core::models::{DisplayDescriptor, DisplayRect, ScreenPoint};
use crate::global_constants::{
    ERROR_CONTEXT_ENUMERATE_MONITORS, ERROR_CONTEXT_MONITOR_GEOMETRY, ERROR_CONTEXT_SCALE_FACTOR,
    LOG_TAG_LOCATOR,
};

/// Display geometry from xcap. xcap has no notion of a work area, so the
/// work area is reported as the full monitor bounds.
pub struct XcapScreenGeometryProvider {
    mouse_provider: Arc<dyn MousePositionProvider>,
}

impl XcapScreenGeometryProvider {
    pub fn initialize(mouse_provider: Arc<dyn MousePositionProvider>) -> Self {
        log::debug!("{} initializing xcap geometry provider", LOG_TAG_LOCATOR);
        Self { mouse_provider }
    }

    fn describe_monitor(&self, monitor: &xcap::Monitor) -> Result<DisplayDescriptor> {
        let id = monitor.id().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?;
        let bounds = DisplayRect::new(
            monitor.x().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            monitor.y().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            monitor.width().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            monitor.height().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
        );
        let scale_factor = monitor
            .scale_factor()
            .with_context(|| ERROR_CONTEXT_SCALE_FACTOR)?;
        let is_primary = monitor.is_primary().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?;

        Ok(build_descriptor(id, bounds, scale_factor as f64, is_primary))
    }
}

fn build_descriptor(
    id: u32,
    bounds: DisplayRect,
    scale_factor: f64,
    is_primary: bool,
) -> DisplayDescriptor {
    log::debug!(
        "{} monitor {} at ({}, {}) {}x{}, scale_factor={}, primary={}",
        LOG_TAG_LOCATOR,
        id,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        scale_factor,
        is_primary
    );

    DisplayDescriptor {
        id,
        bounds,
        work_area: bounds,
        scale_factor,
        is_primary,
    }
}

impl ScreenGeometryProvider for XcapScreenGeometryProvider {
    fn cursor_position(&self) -> Result<ScreenPoint> {
        self.mouse_provider
            .get_current_mouse_position()
            .map_err(anyhow::Error::msg)
    }

    fn all_displays(&self) -> Result<Vec<DisplayDescriptor>> {
        let monitors = xcap::Monitor::all().context(ERROR_CONTEXT_ENUMERATE_MONITORS)?;

        monitors
            .iter()
            .map(|monitor| self.describe_monitor(monitor))
            .collect()
    }
}
