//! Application-level errors.

use repick_api::ApiError;

/// Error returned by workflows in this crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// The remote call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input rejected before any request was made.
    #[error("invalid input: {message}")]
    Invalid {
        /// What was wrong with the input
        message: String,
    },

    /// The operation needs a session and there is none.
    #[error("login required")]
    LoginRequired,
}

impl AppError {
    /// Create an invalid-input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Whether retrying without changing anything might succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_transient())
    }
}
