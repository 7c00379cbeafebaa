//! Errors raised while talking to the Huntflow API

use std::error::Error as _;
use std::fmt;
use std::path::PathBuf;

/// Failure of a single API call
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS)
    Transport(reqwest::Error),
    /// The server answered with an unexpected status code
    Status { status: u16, body: String },
    /// The response body did not have the expected shape
    Decode(String),
    /// A local file could not be read before sending it
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "request failed: {}", err),
            ApiError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "server responded with HTTP {}", status)
                } else {
                    write!(f, "server responded with HTTP {}: {}", status, body)
                }
            }
            ApiError::Decode(msg) => write!(f, "unexpected response: {}", msg),
            ApiError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
        }
    }
}

// `Display` already prints the wrapped error, so `source` starts one level
// below it and `{:#}` chains list every message once.
impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => err.source(),
            ApiError::Io { source, .. } => source.source(),
            ApiError::Status { .. } | ApiError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        ApiError::Transport(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_body() {
        let err = ApiError::Status {
            status: 400,
            body: "{\"errors\":[]}".to_string(),
        };
        assert_eq!(err.to_string(), "server responded with HTTP 400: {\"errors\":[]}");
        assert_eq!(err.status(), Some(400));

        let empty = ApiError::Status {
            status: 502,
            body: String::new(),
        };
        assert_eq!(empty.to_string(), "server responded with HTTP 502");
    }

    #[test]
    fn test_decode_has_no_status() {
        let err = ApiError::Decode("missing field `id`".to_string());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_error_chain_does_not_repeat_wrapped_message() {
        use std::error::Error;

        let err = ApiError::Io {
            path: PathBuf::from("cv.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_none());
        assert_eq!(
            format!("{:#}", anyhow::Error::new(err)),
            "failed to read 'cv.pdf': gone"
        );
    }
}
