// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Api(ApiError),
    /// Selected file is not one of the allowed avatar formats (JPEG/PNG/WebP).
    UnsupportedImageFormat,
}

/// Specific error type for remote API failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Server answered with a non-2xx status. The message is the server's
    /// `{ message }` body field when it could be parsed.
    Status { status: u16, message: Option<String> },

    /// Request never completed (DNS, connection, timeout, TLS).
    Network(String),

    /// Response body could not be decoded into the expected shape.
    Decode(String),
}

impl ApiError {
    /// Returns the user-facing reason string: the server-provided message
    /// when available, otherwise the generic status-coded fallback.
    pub fn reason(&self) -> String {
        match self {
            ApiError::Status {
                status: _,
                message: Some(message),
            } if !message.is_empty() => message.clone(),
            ApiError::Status { status, .. } => format!("Server Error: Status {status}"),
            ApiError::Network(message) | ApiError::Decode(message) => message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { .. } => write!(f, "{}", self.reason()),
            ApiError::Network(message) => write!(f, "Network error: {}", message),
            ApiError::Decode(message) => write!(f, "Invalid server response: {}", message),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
            Error::UnsupportedImageFormat => {
                write!(f, "Unsupported image format (allowed: JPEG, PNG, WebP)")
            }
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn status_error_prefers_server_message() {
        let err = ApiError::Status {
            status: 403,
            message: Some("Session expired".to_string()),
        };
        assert_eq!(err.reason(), "Session expired");
    }

    #[test]
    fn status_error_falls_back_to_generic_message() {
        let err = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.reason(), "Server Error: Status 502");
    }

    #[test]
    fn empty_server_message_falls_back_to_generic_message() {
        let err = ApiError::Status {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.reason(), "Server Error: Status 500");
    }

    #[test]
    fn unsupported_format_mentions_allowed_formats() {
        let rendered = format!("{}", Error::UnsupportedImageFormat);
        assert!(rendered.contains("JPEG"));
        assert!(rendered.contains("WebP"));
    }
}
