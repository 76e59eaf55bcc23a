use std::io::Cursor;

use anyhow::{Context, Result};
use base64::Engine;
use image::DynamicImage;

use crate::core::models::ImageFormat;
use crate::global_constants::{DATA_URI_BASE64_MARKER, DATA_URI_PREFIX};

/// Encodes `image` as a self-contained `data:<mime>;base64,...` string.
pub fn encode_data_uri(image: &DynamicImage, format: ImageFormat) -> Result<String> {
    let mut encoded_bytes = Vec::new();

    if format.supports_alpha() {
        image
            .write_to(&mut Cursor::new(&mut encoded_bytes), format.encoder_format())
            .with_context(|| format!("failed to encode image as {:?}", format))?;
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
            .write_to(&mut Cursor::new(&mut encoded_bytes), format.encoder_format())
            .with_context(|| format!("failed to encode image as {:?}", format))?;
    }

    let payload = base64::engine::general_purpose::STANDARD.encode(&encoded_bytes);

    Ok(format!(
        "{}{}{}{}",
        DATA_URI_PREFIX,
        format.mime_type(),
        DATA_URI_BASE64_MARKER,
        payload
    ))
}

pub fn decode_data_uri(data_uri: &str) -> Result<DynamicImage> {
    let without_scheme = data_uri
        .strip_prefix(DATA_URI_PREFIX)
        .context("image source is not a data URI")?;

    let (media_type, payload) = without_scheme
        .split_once(DATA_URI_BASE64_MARKER)
        .context("data URI is not base64 encoded")?;

    log::debug!(
        "[DATA_URI] decoding {} bytes of {}",
        payload.len(),
        media_type
    );

    let image_bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .context("data URI payload is not valid base64")?;

    image::load_from_memory(&image_bytes).context("data URI payload is not a supported image")
}
