//! Uploaded asset storage (S3)
//!
//! Assets live under one physical bucket with a logical bucket prefix per
//! upload surface: `gallery/`, `menu-images/`, `plan-images/`. The public
//! URL is the configured asset base URL plus the object key.

use image::ImageFormat;
use shared::error::{AppError, ErrorCode};
use uuid::Uuid;

use crate::state::AppState;

/// Maximum upload size (5 MB)
pub const MAX_ASSET_SIZE: usize = 5 * 1024 * 1024;

/// Logical buckets exposed to the admin console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetBucket {
    Gallery,
    MenuImages,
    PlanImages,
}

impl AssetBucket {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::MenuImages => "menu-images",
            Self::PlanImages => "plan-images",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gallery" => Some(Self::Gallery),
            "menu-images" => Some(Self::MenuImages),
            "plan-images" => Some(Self::PlanImages),
            _ => None,
        }
    }
}

/// Validate upload bytes: size ceiling, then a real image decode. The
/// declared content type is a hint only; the decoded format is
/// authoritative for both the rejection decision and the stored
/// extension/content type.
pub fn validate_image(data: &[u8], content_type_hint: Option<&str>) -> Result<ImageFormat, AppError> {
    if data.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::InvalidRequest,
            "Empty file",
        ));
    }

    if data.len() > MAX_ASSET_SIZE {
        return Err(AppError::with_message(
            ErrorCode::AssetTooLarge,
            format!("File too large: {} bytes (max {MAX_ASSET_SIZE})", data.len()),
        ));
    }

    if let Some(hint) = content_type_hint
        && !hint.starts_with("image/")
    {
        return Err(AppError::with_message(
            ErrorCode::AssetNotImage,
            format!("Unsupported content type: {hint}"),
        ));
    }

    let format = image::guess_format(data)
        .map_err(|_| AppError::new(ErrorCode::AssetNotImage))?;

    // Decode fully so truncated/malformed files are rejected here, not at
    // render time.
    image::load_from_memory(data)
        .map_err(|e| AppError::with_message(ErrorCode::AssetNotImage, format!("Invalid image: {e}")))?;

    Ok(format)
}

fn extension(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::WebP => "webp",
        _ => "jpg",
    }
}

/// Store validated bytes and return the public URL
pub async fn put_asset(
    state: &AppState,
    bucket: AssetBucket,
    data: Vec<u8>,
    format: ImageFormat,
) -> Result<String, AppError> {
    let key = format!("{}/{}.{}", bucket.prefix(), Uuid::new_v4(), extension(format));

    state
        .s3
        .put_object()
        .bucket(&state.assets_bucket)
        .key(&key)
        .body(data.into())
        .content_type(format.to_mime_type())
        .send()
        .await
        .map_err(|e| {
            tracing::error!(key = %key, error = %e, "S3 upload failed");
            AppError::new(ErrorCode::AssetUploadFailed)
        })?;

    tracing::info!(key = %key, "Asset uploaded");

    Ok(format!("{}/{}", state.asset_base_url, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 200, 0, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn tiny_png_accepted() {
        let format = validate_image(&tiny_png(), Some("image/png")).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn non_image_content_type_rejected() {
        let err = validate_image(&tiny_png(), Some("application/pdf")).unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::AssetNotImage);
    }

    #[test]
    fn oversized_rejected() {
        let data = vec![0u8; MAX_ASSET_SIZE + 1];
        let err = validate_image(&data, Some("image/png")).unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::AssetTooLarge);
    }

    #[test]
    fn garbage_bytes_rejected() {
        let err = validate_image(b"definitely not an image", None).unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::AssetNotImage);
    }

    #[test]
    fn bucket_names_roundtrip() {
        for b in [
            AssetBucket::Gallery,
            AssetBucket::MenuImages,
            AssetBucket::PlanImages,
        ] {
            assert_eq!(AssetBucket::from_str(b.prefix()), Some(b));
        }
        assert_eq!(AssetBucket::from_str("receipts"), None);
    }
}
