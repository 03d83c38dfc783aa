//! Media source types for generated content.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Where media content is sourced from.
///
/// # Examples
///
/// ```
/// use muse_core::MediaSource;
///
/// let url = MediaSource::Url("https://example.com/art.png".to_string());
/// let base64 = MediaSource::Base64("iVBORw0KGgo".to_string());
/// let binary = MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// assert!(!binary.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

impl MediaSource {
    /// True when the source resolves to no data at all.
    ///
    /// An empty media reference is treated as a failed generation by the
    /// flow layer rather than returned to the caller.
    pub fn is_empty(&self) -> bool {
        match self {
            MediaSource::Url(url) => url.trim().is_empty(),
            MediaSource::Base64(data) => data.trim().is_empty(),
            MediaSource::Binary(bytes) => bytes.is_empty(),
        }
    }

    /// Render the source as an embeddable `data:` URI with the given MIME
    /// type. URL sources are returned unchanged since they are already
    /// embeddable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use muse_core::MediaSource;
    ///
    /// let source = MediaSource::Base64("aGVsbG8=".to_string());
    /// assert_eq!(
    ///     source.to_data_uri("image/png"),
    ///     "data:image/png;base64,aGVsbG8="
    /// );
    /// ```
    pub fn to_data_uri(&self, mime: &str) -> String {
        match self {
            MediaSource::Url(url) => url.clone(),
            MediaSource::Base64(data) => format!("data:{};base64,{}", mime, data),
            MediaSource::Binary(bytes) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
                format!("data:{};base64,{}", mime, encoded)
            }
        }
    }
}
