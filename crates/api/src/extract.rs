//! Request extractors with the crate's error shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` whose rejections (bad syntax, wrong content type, missing
/// body) come back as a 400 [`AppError::BadRequest`] instead of axum's
/// plain-text 415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` whose rejections (for example an id that does not
/// percent-decode to UTF-8) come back as a JSON 400 "Invalid todo ID".
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
