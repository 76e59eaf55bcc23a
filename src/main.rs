use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use display_region_capture::adapters::JsonLinesMessageSink;
use display_region_capture::core::errors::CaptureError;
use display_region_capture::core::models::{
    CaptureRequest, CaptureResult, CaptureSettings, ImageFormat,
};
use display_region_capture::core::orchestrators::{
    CaptureOrchestrator, DisplayLocator, ThumbnailFetcher,
};
use display_region_capture::global_constants::LOG_TAG_MAIN;
use display_region_capture::ports::{
    SystemMousePositionProvider, XcapScreenGeometryProvider, XcapThumbnailProvider,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Png,
    Jpeg,
}

impl From<OutputFormat> for ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => ImageFormat::PNG,
            OutputFormat::Jpeg => ImageFormat::JPEG,
        }
    }
}

/// Capture a region of the display under the cursor and print it as a JSON
/// message on stdout.
#[derive(Debug, Parser)]
#[command(name = "region-capture", version, about)]
struct Cli {
    #[arg(long, allow_hyphen_values = true)]
    x: i32,

    #[arg(long, allow_hyphen_values = true)]
    y: i32,

    #[arg(long)]
    width: u32,

    #[arg(long)]
    height: u32,

    /// Overrides the configured output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Settings file to use instead of the per-user config
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn load_settings(cli: &Cli) -> anyhow::Result<CaptureSettings> {
    let mut settings = match &cli.settings {
        Some(path) => CaptureSettings::load_from(path)?,
        None => CaptureSettings::load().unwrap_or_else(|e| {
            log::warn!("{} using default settings: {:#}", LOG_TAG_MAIN, e);
            CaptureSettings::default()
        }),
    };

    if let Some(format) = cli.format {
        settings.output_format = format.into();
    }

    Ok(settings)
}

/// The orchestrator has already logged a failed capture, so the failure only
/// turns into a status here.
fn exit_status(outcome: &Result<CaptureResult, CaptureError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("{} Starting region capture", LOG_TAG_MAIN);

    let settings = load_settings(&cli)?;
    let platform = settings.effective_platform();

    let mouse_provider = Arc::new(SystemMousePositionProvider::initialize());
    let geometry_provider = Arc::new(XcapScreenGeometryProvider::initialize(mouse_provider));
    let thumbnail_provider = Arc::new(XcapThumbnailProvider::initialize());

    let orchestrator = CaptureOrchestrator::build(
        DisplayLocator::build(geometry_provider, platform),
        ThumbnailFetcher::build(thumbnail_provider, settings.thumbnail_format),
        Arc::new(JsonLinesMessageSink::to_stdout()),
        settings.output_format,
    );

    let request = CaptureRequest::new(cli.x, cli.y, cli.width, cli.height);
    let outcome = orchestrator.capture(request).await;

    Ok(ExitCode::from(exit_status(&outcome)))
}
