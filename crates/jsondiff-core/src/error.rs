//! Error types for the edges of a comparison.
//!
//! Diffing, indexing and rendering are total over `serde_json::Value` and
//! never fail. The only failures live at the boundary: decoding the two input
//! documents and writing the finished report somewhere.

use serde_json::Value;
use thiserror::Error;

/// Errors raised before or after the core runs, never during.
#[derive(Error, Debug)]
pub enum JsonDiffError {
    /// An input document was not valid JSON.
    #[error("invalid JSON in {source_name}: {source}")]
    MalformedInput {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The rendered report could not be written to its destination.
    #[error("failed to write output to {destination}: {source}")]
    OutputWriteFailure {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout jsondiff-core.
pub type Result<T> = std::result::Result<T, JsonDiffError>;

/// Decode one input document, naming it in the error if it is malformed.
///
/// `source_name` is whatever identifies the input to a human (usually a file
/// path).
///
/// # Examples
///
/// ```
/// use jsondiff_core::{parse_document, JsonDiffError};
///
/// let value = parse_document("a.json", r#"{"x": 1}"#).unwrap();
/// assert_eq!(value["x"], 1);
///
/// let err = parse_document("b.json", "{nope").unwrap_err();
/// assert!(matches!(err, JsonDiffError::MalformedInput { .. }));
/// assert!(err.to_string().contains("b.json"));
/// ```
pub fn parse_document(source_name: &str, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| JsonDiffError::MalformedInput {
        source_name: source_name.to_string(),
        source,
    })
}
