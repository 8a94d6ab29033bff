use std::fmt;

use thiserror::Error;

/// Closed error taxonomy for the widget.
///
/// Callers can branch exhaustively on the failure kind instead of
/// string-matching messages. Only [`WidgetError::Setup`] is fatal; every
/// other variant is cycle-local and handled at the stage that produced it.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Connection-level failure; no response body was available to parse.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider reported a non-success status with a decodable envelope.
    #[error("api error {code}: {message}")]
    Api { code: i64, message: String },

    /// A body was present but could not be parsed as the expected shape.
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rendering failed against a well-formed model.
    #[error("template failure: {0}")]
    Template(String),

    /// Unrecoverable configuration or startup failure.
    #[error("setup failure: {0}")]
    Setup(String),
}

impl From<fmt::Error> for WidgetError {
    fn from(err: fmt::Error) -> Self {
        WidgetError::Template(err.to_string())
    }
}
