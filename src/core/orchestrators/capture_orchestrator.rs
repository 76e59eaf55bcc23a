use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::core::errors::CaptureError;
use crate::core::interfaces::ports::MessageSink;
use crate::core::models::{
    CaptureBuffer, CaptureMessage, CaptureRequest, CaptureResult, ImageFormat,
};
use crate::core::orchestrators::{DisplayLocator, ThumbnailFetcher};
use crate::global_constants::{
    LOG_TAG_CAPTURE, MAX_CANVAS_AREA, MESSAGE_CAPTURE_DELIVERED, MESSAGE_CAPTURE_FAILED,
};
use crate::utils::{decode_data_uri, encode_data_uri};

pub struct CaptureOrchestrator {
    display_locator: DisplayLocator,
    thumbnail_fetcher: ThumbnailFetcher,
    message_sink: Arc<dyn MessageSink>,
    output_format: ImageFormat,
}

impl CaptureOrchestrator {
    pub fn build(
        display_locator: DisplayLocator,
        thumbnail_fetcher: ThumbnailFetcher,
        message_sink: Arc<dyn MessageSink>,
        output_format: ImageFormat,
    ) -> Self {
        Self {
            display_locator,
            thumbnail_fetcher,
            message_sink,
            output_format,
        }
    }

    /// Runs the whole pipeline and sends exactly one message on success.
    /// Failures are logged and returned; nothing is sent for them.
    pub async fn capture(&self, request: CaptureRequest) -> Result<CaptureResult, CaptureError> {
        log::info!(
            "{} capturing {}x{} at ({}, {})",
            LOG_TAG_CAPTURE,
            request.width,
            request.height,
            request.x,
            request.y
        );

        match self.run_pipeline(request).await {
            Ok(result) => {
                log::info!("{} {}", LOG_TAG_CAPTURE, MESSAGE_CAPTURE_DELIVERED);
                Ok(result)
            }
            Err(e) => {
                log::error!("{} {}: {}", LOG_TAG_CAPTURE, MESSAGE_CAPTURE_FAILED, e);
                Err(e)
            }
        }
    }

    /// Fire-and-forget variant; the handle may be dropped.
    pub fn dispatch(
        self: &Arc<Self>,
        request: CaptureRequest,
    ) -> JoinHandle<Result<CaptureResult, CaptureError>> {
        let orchestrator = Arc::clone(self);

        tokio::spawn(async move { orchestrator.capture(request).await })
    }

    async fn run_pipeline(&self, request: CaptureRequest) -> Result<CaptureResult, CaptureError> {
        if !request.has_area() {
            return Err(CaptureError::InvalidRequest(format!(
                "width and height must be positive, got {}x{}",
                request.width, request.height
            )));
        }

        if !request.fits_canvas() {
            return Err(CaptureError::InvalidRequest(format!(
                "{}x{} exceeds the maximum canvas area of {} pixels",
                request.width, request.height, MAX_CANVAS_AREA
            )));
        }

        let display = self.display_locator.locate().await?;
        let thumbnail = self.thumbnail_fetcher.fetch(&display).await?;

        let decoded = Self::decode_thumbnail(thumbnail.image).await?;
        let image = self.draw_requested_region(&decoded, &request)?;

        let result = CaptureResult::pending(request).with_image(image);

        self.message_sink
            .send(CaptureMessage::capture_completed(result.clone()))
            .map_err(|e| CaptureError::Delivery(format!("{:#}", e)))?;

        Ok(result)
    }

    async fn decode_thumbnail(thumbnail_data_uri: String) -> Result<CaptureBuffer, CaptureError> {
        let decoded = tokio::task::spawn_blocking(move || {
            decode_data_uri(&thumbnail_data_uri).map(CaptureBuffer::from_image)
        })
        .await
        .map_err(|e| CaptureError::Decode(format!("decode task did not complete: {}", e)))?
        .map_err(|e| CaptureError::Decode(format!("{:#}", e)))?;

        log::debug!(
            "{} decoded thumbnail {}x{}",
            LOG_TAG_CAPTURE,
            decoded.width,
            decoded.height
        );

        Ok(decoded)
    }

    fn draw_requested_region(
        &self,
        thumbnail: &CaptureBuffer,
        request: &CaptureRequest,
    ) -> Result<String, CaptureError> {
        let canvas = thumbnail
            .draw_region_onto_canvas(request.x, request.y, request.width, request.height)
            .map_err(|e| CaptureError::Decode(format!("{:#}", e)))?;
        let canvas_image = canvas
            .into_image()
            .map_err(|e| CaptureError::Encode(format!("{:#}", e)))?;

        encode_data_uri(&canvas_image, self.output_format)
            .map_err(|e| CaptureError::Encode(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interfaces::ports::{DisplayThumbnail, MessageSink};
    use crate::core::models::{DisplayRect, MessageKind, Platform};
    use crate::test_support::{
        captured_logs_at, display_descriptor, gradient_image, start_capturing_logs,
        FakeScreenGeometry, FakeThumbnailProvider, RecordingMessageSink,
    };
    use image::Rgba;

    struct Harness {
        orchestrator: Arc<CaptureOrchestrator>,
        sink: Arc<RecordingMessageSink>,
    }

    fn harness_with(provider: FakeThumbnailProvider, output_format: ImageFormat) -> Harness {
        let geometry = FakeScreenGeometry::with_cursor(
            50,
            50,
            vec![display_descriptor(
                1,
                DisplayRect::new(0, 0, 640, 480),
                1.0,
                true,
            )],
        );
        let sink = Arc::new(RecordingMessageSink::default());
        let orchestrator = CaptureOrchestrator::build(
            DisplayLocator::build(Arc::new(geometry), Platform::Windows),
            ThumbnailFetcher::build(Arc::new(provider), ImageFormat::PNG),
            sink.clone(),
            output_format,
        );

        Harness {
            orchestrator: Arc::new(orchestrator),
            sink,
        }
    }

    fn single_display_provider() -> FakeThumbnailProvider {
        FakeThumbnailProvider::returning(vec![DisplayThumbnail {
            display_id: 1,
            image: gradient_image(640, 480),
        }])
    }

    #[tokio::test]
    async fn test_capture_crops_requested_region_and_sends_one_message() {
        let harness = harness_with(single_display_provider(), ImageFormat::PNG);
        let request = CaptureRequest::new(100, 50, 300, 200);

        let result = harness.orchestrator.capture(request).await.unwrap();

        let decoded = decode_data_uri(result.image.as_deref().unwrap())
            .unwrap()
            .into_rgba8();
        assert_eq!(decoded.dimensions(), (300, 200));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([100, 50, 0, 255]));
        assert_eq!(decoded.get_pixel(299, 199), &Rgba([143, 249, 40, 255]));

        let messages = harness.sink.sent_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::CaptureScreen);
        assert_eq!(messages[0].payload, result);
        assert_eq!(messages[0].payload.request, request);
    }

    #[tokio::test]
    async fn test_repeated_capture_yields_identical_pixels() {
        let harness = harness_with(single_display_provider(), ImageFormat::PNG);
        let request = CaptureRequest::new(10, 20, 64, 32);

        let first = harness.orchestrator.capture(request).await.unwrap();
        let second = harness.orchestrator.capture(request).await.unwrap();

        let first_pixels = decode_data_uri(first.image.as_deref().unwrap())
            .unwrap()
            .into_rgba8();
        let second_pixels = decode_data_uri(second.image.as_deref().unwrap())
            .unwrap()
            .into_rgba8();
        assert_eq!(first_pixels, second_pixels);
        assert_eq!(harness.sink.sent_messages().len(), 2);
    }

    #[tokio::test]
    async fn test_jpeg_output_keeps_requested_dimensions() {
        let harness = harness_with(single_display_provider(), ImageFormat::JPEG);

        let result = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 33, 17))
            .await
            .unwrap();

        let image = result.image.unwrap();
        assert!(image.starts_with("data:image/jpeg;base64,"));
        let decoded = decode_data_uri(&image).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (33, 17));
    }

    #[tokio::test]
    async fn test_region_past_thumbnail_edge_is_padded_to_requested_size() {
        let harness = harness_with(single_display_provider(), ImageFormat::PNG);

        let result = harness
            .orchestrator
            .capture(CaptureRequest::new(600, 460, 100, 50))
            .await
            .unwrap();

        let decoded = decode_data_uri(result.image.as_deref().unwrap())
            .unwrap()
            .into_rgba8();
        assert_eq!(decoded.dimensions(), (100, 50));
        assert_eq!(decoded.get_pixel(99, 49)[3], 0);
    }

    #[tokio::test]
    async fn test_host_enumeration_failure_sends_nothing() {
        let harness = harness_with(
            FakeThumbnailProvider::failing("host refused"),
            ImageFormat::PNG,
        );

        let result = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 10, 10))
            .await;

        assert!(matches!(result, Err(CaptureError::HostEnumeration(_))));
        assert!(harness.sink.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn test_missing_display_thumbnail_sends_nothing() {
        let provider = FakeThumbnailProvider::returning(vec![DisplayThumbnail {
            display_id: 99,
            image: gradient_image(640, 480),
        }]);
        let harness = harness_with(provider, ImageFormat::PNG);

        let result = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 10, 10))
            .await;

        assert!(matches!(
            result,
            Err(CaptureError::DisplayNotFound { display_id: 1 })
        ));
        assert!(harness.sink.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn test_zero_sized_request_is_rejected() {
        let harness = harness_with(single_display_provider(), ImageFormat::PNG);

        let result = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 0, 10))
            .await;

        assert!(matches!(result, Err(CaptureError::InvalidRequest(_))));
        assert!(harness.sink.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported() {
        struct ClosedSink;

        impl MessageSink for ClosedSink {
            fn send(&self, _message: CaptureMessage) -> anyhow::Result<()> {
                anyhow::bail!("receiver closed")
            }
        }

        let geometry = FakeScreenGeometry::with_cursor(
            0,
            0,
            vec![display_descriptor(1, DisplayRect::new(0, 0, 64, 64), 1.0, true)],
        );
        let orchestrator = CaptureOrchestrator::build(
            DisplayLocator::build(Arc::new(geometry), Platform::Linux),
            ThumbnailFetcher::build(
                Arc::new(FakeThumbnailProvider::returning(vec![DisplayThumbnail {
                    display_id: 1,
                    image: gradient_image(64, 64),
                }])),
                ImageFormat::PNG,
            ),
            Arc::new(ClosedSink),
            ImageFormat::PNG,
        );

        let result = orchestrator.capture(CaptureRequest::new(0, 0, 8, 8)).await;

        assert!(matches!(result, Err(CaptureError::Delivery(_))));
    }

    #[tokio::test]
    async fn test_dispatch_runs_capture_in_background() {
        let harness = harness_with(single_display_provider(), ImageFormat::PNG);

        let handle = harness
            .orchestrator
            .dispatch(CaptureRequest::new(1, 1, 5, 5));
        let result = handle.await.unwrap();

        assert!(result.is_ok());
        assert_eq!(harness.sink.sent_messages().len(), 1);
    }

    #[tokio::test]
    async fn test_oversized_request_is_rejected_without_stopping_later_captures() {
        let harness = harness_with(single_display_provider(), ImageFormat::PNG);

        let oversized = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 1 << 20, 1 << 20))
            .await;

        assert!(matches!(oversized, Err(CaptureError::InvalidRequest(_))));
        assert!(harness.sink.sent_messages().is_empty());

        let next = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 16, 16))
            .await;

        assert!(next.is_ok());
        assert_eq!(harness.sink.sent_messages().len(), 1);
    }

    fn capture_error_records() -> Vec<String> {
        captured_logs_at(log::Level::Error)
            .into_iter()
            .filter(|message| message.starts_with(LOG_TAG_CAPTURE))
            .collect()
    }

    #[tokio::test]
    async fn test_host_enumeration_failure_is_logged_once_at_error_level() {
        start_capturing_logs();
        let harness = harness_with(
            FakeThumbnailProvider::failing("host refused"),
            ImageFormat::PNG,
        );

        let _ = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 10, 10))
            .await;

        let records = capture_error_records();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains(MESSAGE_CAPTURE_FAILED));
        assert!(records[0].contains("host refused"));
    }

    #[tokio::test]
    async fn test_missing_display_is_logged_once_at_error_level() {
        start_capturing_logs();
        let provider = FakeThumbnailProvider::returning(vec![DisplayThumbnail {
            display_id: 42,
            image: gradient_image(64, 64),
        }]);
        let harness = harness_with(provider, ImageFormat::PNG);

        let _ = harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 10, 10))
            .await;

        let records = capture_error_records();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("display 1"));
    }

    #[tokio::test]
    async fn test_successful_capture_logs_no_errors() {
        start_capturing_logs();
        let harness = harness_with(single_display_provider(), ImageFormat::PNG);

        harness
            .orchestrator
            .capture(CaptureRequest::new(0, 0, 10, 10))
            .await
            .unwrap();

        assert!(capture_error_records().is_empty());
    }
}
