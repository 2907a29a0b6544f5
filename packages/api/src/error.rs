use thiserror::Error;

/// Failure of a single round trip to the prompt service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no token received from server")]
    MissingToken,

    #[error("prompt has no identifier")]
    MissingId,
}

impl ApiError {
    /// Server-supplied message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Whether the server refused the credentials attached to the request.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.server_message(), Some("Email already registered"));

        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.server_message(), None);

        let blank = ApiError::Status {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(blank.server_message(), None);
        assert_eq!(ApiError::Timeout.server_message(), None);
    }

    #[test]
    fn test_is_unauthorized() {
        for status in [401, 403] {
            assert!(ApiError::Status { status, message: None }.is_unauthorized());
        }
        assert!(!ApiError::Status { status: 500, message: None }.is_unauthorized());
        assert!(!ApiError::MissingToken.is_unauthorized());
    }
}
