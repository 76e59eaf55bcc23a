use serde::{Deserialize, Serialize};
use std::fmt;

/// Host platform, used to pick how display geometry is normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

/// How a platform reports display geometry.
///
/// `relative_scale` divides the display's scale factor by the primary
/// display's; when false the scale is fixed at 1. `use_work_area` takes the
/// usable work area as the base rectangle instead of the outer bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryPolicy {
    pub relative_scale: bool,
    pub use_work_area: bool,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    pub fn geometry_policy(&self) -> GeometryPolicy {
        match self {
            Platform::Windows => GeometryPolicy {
                relative_scale: true,
                use_work_area: false,
            },
            Platform::MacOs => GeometryPolicy {
                relative_scale: false,
                use_work_area: false,
            },
            Platform::Linux => GeometryPolicy {
                relative_scale: true,
                use_work_area: true,
            },
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::MacOs => write!(f, "macOS"),
            Platform::Linux => write!(f, "Linux"),
        }
    }
}
