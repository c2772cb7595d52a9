use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::extraction::extract_text;

/// Upload cap for `/api/extract`, applied as the route's body limit.
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub characters: usize,
}

/// POST /api/extract
///
/// Accepts a multipart upload with a `file` field holding a PDF and returns its text.
pub async fn handle_extract(
    AuthUser(identity): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut pdf: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            pdf = Some(bytes);
            break;
        }
    }

    let pdf = pdf.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    let size = pdf.len();

    let text = tokio::task::spawn_blocking(move || extract_text(&pdf))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let characters = text.chars().count();
    info!(username = %identity.username, bytes = size, characters, "PDF text extracted");

    Ok(Json(ExtractResponse { text, characters }))
}
