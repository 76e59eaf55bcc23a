mod capture_orchestrator;
mod display_locator;
mod thumbnail_fetcher;

pub use capture_orchestrator::CaptureOrchestrator;
pub use display_locator::DisplayLocator;
pub use thumbnail_fetcher::ThumbnailFetcher;
