use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json<T>` whose rejections (bad syntax, wrong or null field types, missing
/// content type) surface as `AppError::Validation` instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
