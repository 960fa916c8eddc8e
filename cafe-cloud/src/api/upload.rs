//! Asset upload endpoint — admin console uploads images, gets a public URL
//!
//! POST /api/admin/uploads/{bucket} — multipart upload → validate → S3

use axum::extract::{Multipart, Path, State};
use axum::Json;
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;
use crate::storage::{self, AssetBucket};

/// Upload response
#[derive(serde::Serialize)]
pub struct UploadResponse {
    pub url: String,
}

pub async fn upload_asset(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let bucket = AssetBucket::from_str(&bucket)
        .ok_or_else(|| AppError::with_message(ErrorCode::InvalidRequest, "Unknown bucket"))?;

    // Extract file from multipart
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::with_message(ErrorCode::InvalidRequest, format!("Multipart error: {e}"))
    })? {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            content_type = field.content_type().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::with_message(
                            ErrorCode::InvalidRequest,
                            format!("Read error: {e}"),
                        )
                    })?
                    .to_vec(),
            );
            break;
        }
    }

    let data = file_data
        .ok_or_else(|| AppError::with_message(ErrorCode::InvalidRequest, "No file provided"))?;

    let format = storage::validate_image(&data, content_type.as_deref())?;
    let url = storage::put_asset(&state, bucket, data, format).await?;

    Ok(Json(UploadResponse { url }))
}
