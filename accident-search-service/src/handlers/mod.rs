//! HTTP handlers for the accident search service.

pub mod health;
pub mod search;

use axum::extract::FromRequest;
use service_core::error::AppError;

/// `Json` extractor whose rejections render as [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
