//! `data:` URI decoding
//!
//! Generation endpoints commonly inline the image as
//! `data:image/png;base64,...` instead of hosting it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use logoforge_core::{ForgeError, ForgeResult};

/// A decoded `data:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUri {
    /// Check whether a URL is a `data:` URI
    pub fn is_data_uri(url: &str) -> bool {
        url.get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
    }

    /// Decode a base64 `data:` URI
    pub fn parse(url: &str) -> ForgeResult<Self> {
        if !Self::is_data_uri(url) {
            return Err(ForgeError::invalid_image_url(short(url), "not a data: URI"));
        }

        let (header, payload) = url[5..]
            .split_once(',')
            .ok_or_else(|| ForgeError::invalid_image_url(short(url), "missing ',' separator"))?;

        let mut params = header.split(';');
        let mime_type = match params.next() {
            Some(mime) if !mime.is_empty() => mime.to_string(),
            _ => "text/plain".to_string(),
        };

        if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
            return Err(ForgeError::invalid_image_url(
                short(url),
                "only base64 data URIs are supported",
            ));
        }

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| ForgeError::invalid_image_url(short(url), e.to_string()))?;

        Ok(Self { mime_type, bytes })
    }

    /// Whether the payload is declared as PNG, the format downloads are named for
    pub fn is_png(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case("image/png")
    }
}

/// Data URIs can be megabytes long; keep error messages readable
fn short(url: &str) -> String {
    const MAX: usize = 48;
    match url.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}
