//! Image payload handling for analysis requests.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Base64 image data plus its mime type, ready for inline transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Accept a data-URI-style encoded string and strip any
    /// `data:image/<fmt>;base64,` prefix before transmission. The mime type
    /// embedded in the prefix is preserved; bare base64 input falls back to
    /// `image/jpeg`.
    pub fn from_data_uri(input: &str) -> Self {
        if let Some(rest) = input.strip_prefix("data:") {
            if let Some((header, data)) = rest.split_once(";base64,") {
                let mime_type = if header.is_empty() {
                    DEFAULT_MIME_TYPE.to_string()
                } else {
                    header.to_string()
                };
                return Self {
                    mime_type,
                    data: data.trim().to_string(),
                };
            }
        }
        Self {
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            data: input.trim().to_string(),
        }
    }

    /// Encode raw image bytes for transmission.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: BASE64_STANDARD.encode(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_prefix_is_stripped() {
        let payload = ImagePayload::from_data_uri("data:image/png;base64,AAAABBBB");
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, "AAAABBBB");
    }

    #[test]
    fn test_bare_base64_passes_through() {
        let payload = ImagePayload::from_data_uri("AAAABBBB");
        assert_eq!(payload.mime_type, "image/jpeg");
        assert_eq!(payload.data, "AAAABBBB");
    }

    #[test]
    fn test_webp_mime_is_preserved() {
        let payload = ImagePayload::from_data_uri("data:image/webp;base64,Zm9v");
        assert_eq!(payload.mime_type, "image/webp");
        assert_eq!(payload.data, "Zm9v");
    }

    #[test]
    fn test_from_bytes_round_trips() {
        let payload = ImagePayload::from_bytes(b"hello", "image/png");
        assert_eq!(payload.mime_type, "image/png");
        let decoded = BASE64_STANDARD.decode(payload.data.as_bytes()).unwrap();
        assert_eq!(decoded, b"hello");
    }
}
