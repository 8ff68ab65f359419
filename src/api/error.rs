//! Transport-level errors raised by the site API

use thiserror::Error;

/// Everything that can go wrong between the client and the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured backend URL could not be parsed
    #[error("invalid backend url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection refused, DNS failure, timeout, broken body stream
    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status
    #[error("{path} returned HTTP {status}")]
    Status { path: &'static str, status: u16 },

    /// The backend answered 2xx but the body was not what we expected
    #[error("{path} returned a malformed body: {reason}")]
    Decode { path: &'static str, reason: String },
}

impl ApiError {
    /// Backend path the failed request targeted, if any
    pub fn path(&self) -> Option<&'static str> {
        match self {
            ApiError::InvalidUrl { .. } => None,
            ApiError::Transport { path, .. }
            | ApiError::Status { path, .. }
            | ApiError::Decode { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_names_path_and_code() {
        let err = ApiError::Status {
            path: "/api/quotes",
            status: 503,
        };
        assert_eq!(err.to_string(), "/api/quotes returned HTTP 503");
        assert_eq!(err.path(), Some("/api/quotes"));
    }

    #[test]
    fn test_invalid_url_has_no_path() {
        let err = ApiError::InvalidUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.path().is_none());
        assert!(err.to_string().contains("`nope`"));
    }
}
