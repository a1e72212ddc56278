//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
///
/// The loader never produces these itself; it hands back whatever error the
/// factory produced. These are the errors the site's own factories return.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Page content bundle is missing or malformed
    #[error("Content error: {0}")]
    Content(String),

    /// Authentication provider refused to answer for this server
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Check if the failure is likely to clear up on its own
    ///
    /// Used to pick response statuses. The retry loader retries every error.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => {
                "We couldn't reach the server. Check your connection and reload.".into()
            }
            Self::Status { status, .. } if *status == 404 => "This page doesn't exist.".into(),
            Self::Status { .. } => "The server had a problem. Please try again shortly.".into(),
            Self::Content(_) | Self::Json(_) => "This page failed to load.".into(),
            Self::Auth(_) => "Please sign in again.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(SiteError::Http("reset".into()).is_retryable());
        assert!(SiteError::Status { status: 503, message: String::new() }.is_retryable());
        assert!(SiteError::Status { status: 429, message: String::new() }.is_retryable());
        assert!(!SiteError::Status { status: 404, message: String::new() }.is_retryable());
        assert!(!SiteError::Content("empty".into()).is_retryable());
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = SiteError::Http("dns lookup failed for cdn.internal".into());
        assert!(!err.user_message().contains("cdn.internal"));
    }
}
