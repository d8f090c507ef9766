//! Error types for the NBA stats client
//!
//! Every fallible operation in the crate returns `Result<T, Error>`.
//! Decoding of individual rows is deliberately infallible and never
//! surfaces here.

use thiserror::Error;

/// Classification of an HTTP error status returned by the stats API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 404
    NotFound,
    /// 401 / 403
    Unauthorized,
    /// 429
    RateLimited,
    /// 400
    InvalidRequest,
    /// 408 / 504
    Timeout,
    /// Any other 5xx
    Server,
    /// Any other 4xx
    Client,
}

impl ApiErrorKind {
    /// Classify a status code, returning `None` for non-error statuses
    pub fn from_status(status: u16) -> Option<Self> {
        let kind = match status {
            404 => Self::NotFound,
            401 | 403 => Self::Unauthorized,
            429 => Self::RateLimited,
            400 => Self::InvalidRequest,
            408 | 504 => Self::Timeout,
            s if s >= 500 => Self::Server,
            s if s >= 400 => Self::Client,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::NotFound => "resource not found",
            Self::Unauthorized => "unauthorized",
            Self::RateLimited => "rate limited",
            Self::InvalidRequest => "invalid request",
            Self::Timeout => "request timeout",
            Self::Server => "server error",
            Self::Client => "client error",
        };
        f.write_str(text)
    }
}

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Validation Errors
    // ============================================================================
    #[error("{field} is required")]
    MissingParameter { field: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidParameter { field: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}, url {url}): {kind}")]
    Api {
        status: u16,
        url: String,
        kind: ApiErrorKind,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing parameter error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingParameter {
            field: field.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Map an HTTP status to an API error; `None` below 400
    pub fn from_status(status: u16, url: impl Into<String>) -> Option<Self> {
        ApiErrorKind::from_status(status).map(|kind| Self::Api {
            status,
            url: url.into(),
            kind,
        })
    }

    /// Whether the error was raised before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter { .. } | Error::InvalidParameter { .. }
        )
    }

    /// The API error classification, if this is an HTTP status error
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing("GameID");
        assert_eq!(err.to_string(), "GameID is required");

        let err = Error::invalid("Season", "expected YYYY-YY");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'Season': expected YYYY-YY"
        );

        let err = Error::from_status(404, "https://stats.nba.com/stats/x").unwrap();
        assert_eq!(
            err.to_string(),
            "API error (status 404, url https://stats.nba.com/stats/x): resource not found"
        );
    }

    #[test]
    fn test_from_status_classification() {
        assert_eq!(ApiErrorKind::from_status(200), None);
        assert_eq!(ApiErrorKind::from_status(302), None);
        assert_eq!(ApiErrorKind::from_status(400), Some(ApiErrorKind::InvalidRequest));
        assert_eq!(ApiErrorKind::from_status(401), Some(ApiErrorKind::Unauthorized));
        assert_eq!(ApiErrorKind::from_status(403), Some(ApiErrorKind::Unauthorized));
        assert_eq!(ApiErrorKind::from_status(404), Some(ApiErrorKind::NotFound));
        assert_eq!(ApiErrorKind::from_status(408), Some(ApiErrorKind::Timeout));
        assert_eq!(ApiErrorKind::from_status(418), Some(ApiErrorKind::Client));
        assert_eq!(ApiErrorKind::from_status(429), Some(ApiErrorKind::RateLimited));
        assert_eq!(ApiErrorKind::from_status(500), Some(ApiErrorKind::Server));
        assert_eq!(ApiErrorKind::from_status(504), Some(ApiErrorKind::Timeout));
        assert!(Error::from_status(204, "u").is_none());
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing("PlayerID").is_validation());
        assert!(Error::invalid("LeagueID", "bad").is_validation());
        assert!(!Error::config("x").is_validation());
        assert!(!Error::from_status(500, "u").unwrap().is_validation());
    }

    #[test]
    fn test_api_kind() {
        let err = Error::from_status(429, "u").unwrap();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::RateLimited));
        assert_eq!(Error::missing("x").api_kind(), None);
    }
}
