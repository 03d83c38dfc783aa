//! Output types from model responses.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported output types from the hosted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Generated image output.
    Image {
        /// MIME type of the image
        mime: Option<String>,
        /// Image payload
        source: MediaSource,
    },

    /// Structured JSON output.
    Json(serde_json::Value),
}
