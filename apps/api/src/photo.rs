//! Profile photos are stored inline as data URLs in the record.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("No photo was uploaded")]
    Empty,

    #[error("Unsupported photo type '{0}'; upload an image")]
    UnsupportedType(String),

    #[error("Photo is too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: usize, limit: usize },
}

/// Encodes uploaded image bytes as a `data:<mime>;base64,...` photo reference.
pub fn to_data_url(content_type: &str, bytes: &[u8], limit: usize) -> Result<String, PhotoError> {
    if bytes.is_empty() {
        return Err(PhotoError::Empty);
    }
    let mime = content_type.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") {
        return Err(PhotoError::UnsupportedType(content_type.to_string()));
    }
    if bytes.len() > limit {
        return Err(PhotoError::TooLarge {
            size: bytes.len(),
            limit,
        });
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
