//! Error types for the CMS client layer.
//!
//! Rendering is a total function and never produces these; only the API
//! client does. Public getters additionally degrade most of them to empty
//! results, matching how the site treats a missing CMS response.

use thiserror::Error;

/// Result type alias for CMS operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur talking to the content API.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport failed before a response was produced.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Best available message: the first Payload validation message
        /// from the body when present, otherwise the raw body.
        message: String,
    },

    /// The response body did not decode into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: Not Found");

        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
