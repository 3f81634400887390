//! `data:` URIs
//!
//! The profile stores its avatar as `data:<media type>;base64,<payload>`,
//! the same form a browser file reader produces.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{ImageError, Result};

/// A base64 data URI with its media type and decoded bytes
#[derive(Clone, PartialEq, Eq)]
pub struct DataUri {
    media_type: String,
    data: Vec<u8>,
}

impl DataUri {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Render as `data:<media type>;base64,<payload>`
    pub fn encode(&self) -> String {
        format!("data:{};base64,{}", self.media_type, STANDARD.encode(&self.data))
    }

    /// Parse a base64 data URI.
    ///
    /// Parameters between the media type and `;base64` (such as a charset)
    /// are accepted and dropped.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri.trim().strip_prefix("data:").ok_or(ImageError::NotDataUri)?;
        let (header, payload) = rest.split_once(',').ok_or(ImageError::NotDataUri)?;

        let mut params = header.split(';');
        let media_type = params.next().unwrap_or_default().to_string();
        if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
            return Err(ImageError::NotBase64);
        }

        let data = STANDARD.decode(payload.trim())?;
        Ok(Self { media_type, data })
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataUri")
            .field("media_type", &self.media_type)
            .field("len", &self.data.len())
            .finish()
    }
}

impl FromStr for DataUri {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_reader_format() {
        let uri = DataUri::new("image/png", b"hello".to_vec());
        assert_eq!(uri.encode(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_parse_with_extra_params() {
        let uri = DataUri::parse("data:image/svg+xml;charset=utf-8;base64,aGVsbG8=").unwrap();
        assert_eq!(uri.media_type(), "image/svg+xml");
        assert_eq!(uri.data(), b"hello");
    }

    #[test]
    fn test_empty_payload() {
        let uri = DataUri::parse("data:image/gif;base64,").unwrap();
        assert!(uri.data().is_empty());
    }

    #[test]
    fn test_rejects_non_data_and_plain_payloads() {
        assert!(matches!(
            DataUri::parse("https://example.com/a.png"),
            Err(ImageError::NotDataUri)
        ));
        assert!(matches!(
            DataUri::parse("data:text/plain,hello"),
            Err(ImageError::NotBase64)
        ));
        assert!(matches!(
            DataUri::parse("data:image/png;base64,!!!"),
            Err(ImageError::Base64(_))
        ));
    }
}
