//! Conversion of picked image files into `data:` URLs.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image file is empty")]
    Empty,
    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("`{mime}` is not an image type")]
    NotAnImage { mime: String },
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode `bytes` as `data:<mime>;base64,<payload>`, guessing the MIME type
/// from `file_name`.
pub fn encode_data_url(
    file_name: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<String, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(ImageError::NotAnImage {
            mime: mime.essence_str().to_string(),
        });
    }

    Ok(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        STANDARD.encode(bytes)
    ))
}
