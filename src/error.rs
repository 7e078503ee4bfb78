use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid image: {0}")]
    InvalidImage(#[from] ImageError),

    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Unsupported or corrupt image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image too large: {width}x{height} (max {max} pixels)")]
    TooLarge { width: u32, height: u32, max: u64 },

    #[error("Image has no pixels")]
    Empty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Failed to read library file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse library file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Library entry {id} has invalid color {hex:?}")]
    InvalidColor { id: u32, hex: String },

    #[error("Library is empty")]
    Empty,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidImage(ImageError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::Library(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
