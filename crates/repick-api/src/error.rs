//! API error taxonomy.
//!
//! Three failure classes matter to callers: the request never completed
//! (`Network`), the server answered with a non-2xx status (`Status`), or
//! the body could not be decoded (`Decode`). Toggle workflows treat all
//! three the same (roll back); page workflows surface `Status` messages
//! when the backend provides one.

/// Error returned by every wrapper in this crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed mid-flight.
    #[error("network error: {message}")]
    Network {
        /// Transport-level failure description
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Backend-provided message, or the status line when absent
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("decode error: {message}")]
    Decode {
        /// Deserialization failure description
        message: String,
    },
}

impl ApiError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The HTTP status code, when the server answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether retrying the same request might succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Decode { .. } => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::decode(error.to_string())
        } else {
            Self::network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_accessor() {
        assert_eq!(ApiError::status(404, "not found").status_code(), Some(404));
        assert_eq!(ApiError::network("boom").status_code(), None);
    }

    #[test]
    fn test_transience() {
        assert!(ApiError::network("reset").is_transient());
        assert!(ApiError::status(503, "unavailable").is_transient());
        assert!(ApiError::status(429, "slow down").is_transient());
        assert!(!ApiError::status(404, "not found").is_transient());
        assert!(!ApiError::status(401, "unauthorized").is_transient());
        assert!(!ApiError::decode("bad json").is_transient());
    }

    #[test]
    fn test_display_includes_status() {
        let error = ApiError::status(400, "title is required");
        assert_eq!(error.to_string(), "request failed (400): title is required");
    }
}
