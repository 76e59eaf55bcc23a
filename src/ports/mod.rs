mod mouse_position_provider;
mod xcap_screen_geometry_provider;
mod xcap_thumbnail_provider;

pub use mouse_position_provider::SystemMousePositionProvider;
pub use xcap_screen_geometry_provider::XcapScreenGeometryProvider;
pub use xcap_thumbnail_provider::XcapThumbnailProvider;
