mod message_sink;
mod mouse_position_provider;
mod screen_geometry_provider;
mod thumbnail_provider;

pub use message_sink::MessageSink;
pub use mouse_position_provider::MousePositionProvider;
pub use screen_geometry_provider::ScreenGeometryProvider;
pub use thumbnail_provider::{DisplayThumbnail, SourceKind, ThumbnailProvider, ThumbnailRequest};
