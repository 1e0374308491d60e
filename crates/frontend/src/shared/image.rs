//! Client-side image checks and data-URL encoding for listing photos.

use base64::{engine::general_purpose, Engine as _};
use wasm_bindgen_futures::JsFuture;

use super::config::UploadConfig;
use super::error::UiError;

/// What is known about a picked file before reading its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl ImageMeta {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
        }
    }
}

/// Type is checked before size, so an oversized GIF reports the type error.
pub fn check_image(meta: &ImageMeta, limits: &UploadConfig) -> Result<(), UiError> {
    if !limits.accepted_types.iter().any(|t| t == &meta.mime) {
        return Err(UiError::InvalidImageType);
    }
    if meta.size >= limits.max_bytes {
        return Err(UiError::InvalidImageSize);
    }
    Ok(())
}

/// `data:{mime};base64,{payload}`
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, UiError> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UiError::FileRead(format!("{:?}", e)))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);
    Ok(bytes)
}

pub async fn encode_file(file: &web_sys::File) -> Result<String, UiError> {
    let bytes = read_file_bytes(file).await?;
    Ok(to_data_url(&file.type_(), &bytes))
}
