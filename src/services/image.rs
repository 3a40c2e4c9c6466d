// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Image intake: size ceiling and inline (data URL) encoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Largest photo accepted, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const BASE64_MARKER: &str = ";base64,";

/// A photo encoded for transport inside a JSON body.
///
/// Usually a `data:<mime>;base64,<payload>` URL; a remote `http(s)` URL is
/// also accepted from API callers and passed through to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage(String);

impl InlineImage {
    /// Encode raw image bytes as a data URL.
    pub fn encode(bytes: &[u8], mime: &str) -> Result<Self, ImageError> {
        check_size(bytes.len())?;
        Ok(Self(format!(
            "data:{};base64,{}",
            mime,
            STANDARD.encode(bytes)
        )))
    }

    /// Read and encode an image file.
    ///
    /// The size is checked from file metadata before anything is read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let size = std::fs::metadata(path)?.len();
        if size > MAX_IMAGE_BYTES as u64 {
            return Err(ImageError::TooLarge {
                size,
                limit: MAX_IMAGE_BYTES,
            });
        }
        let bytes = std::fs::read(path)?;
        Self::encode(&bytes, mime_from_path(path))
    }

    /// Accept an image string received from an API caller.
    pub fn parse(raw: &str) -> Result<Self, ImageError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ImageError::Empty);
        }

        if let Some(payload) = data_url_payload(raw) {
            check_size(decoded_len(payload))?;
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn check_size(len: usize) -> Result<(), ImageError> {
    if len == 0 {
        return Err(ImageError::Empty);
    }
    if len > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge {
            size: len as u64,
            limit: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Base64 payload of a `data:` URL, if it is one.
fn data_url_payload(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix("data:")?;
    let idx = rest.find(BASE64_MARKER)?;
    Some(&rest[idx + BASE64_MARKER.len()..])
}

/// Exact decoded length of a padded base64 payload.
fn decoded_len(payload: &str) -> usize {
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    (payload.len() / 4 * 3).saturating_sub(padding)
        + match payload.len() % 4 {
            2 => 1,
            3 => 2,
            _ => 0,
        }
}

/// Guess a MIME type from the file extension.
pub fn mime_from_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Errors from image intake.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image is empty")]
    Empty,

    #[error("Image is {size} bytes; the maximum is {limit} bytes (5 MB)")]
    TooLarge { size: u64, limit: usize },

    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),
}
