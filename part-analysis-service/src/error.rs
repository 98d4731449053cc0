//! Errors returned by the analyze endpoint.
//!
//! Callers only ever see one of two fixed messages. Detail is logged.

use crate::services::providers::ProviderError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const IMAGE_MISSING_MESSAGE: &str = "Image not uploaded.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "An error occurred while analyzing the image.";

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("no image file in upload")]
    ImageMissing,

    #[error("failed to read multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),
}

impl AnalyzeError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalyzeError::ImageMissing => StatusCode::BAD_REQUEST,
            AnalyzeError::Multipart(_) | AnalyzeError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            AnalyzeError::ImageMissing => IMAGE_MISSING_MESSAGE,
            AnalyzeError::Multipart(_) | AnalyzeError::Provider(_) => ANALYSIS_FAILED_MESSAGE,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Error during image analysis");
        } else {
            tracing::warn!(error = %self, "Rejected analysis request");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: AnalyzeError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn missing_image_is_400_with_fixed_body() {
        let (status, body) = body_of(AnalyzeError::ImageMissing).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Image not uploaded."}"#);
    }

    #[tokio::test]
    async fn provider_failure_is_500_without_detail() {
        let err = AnalyzeError::Provider(ProviderError::ApiError(
            "Gemini API error 403 Forbidden: API key not valid".to_string(),
        ));
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            r#"{"error":"An error occurred while analyzing the image."}"#
        );
        assert!(!body.contains("403"));
    }
}
