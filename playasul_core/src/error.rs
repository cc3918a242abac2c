use beatmap_schema::{ErrorBody, ErrorCode};
use thiserror::Error;

use crate::seed::StoreError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Malformed or missing input; the caller may fix it and resubmit.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Generation ran past its deadline; the caller may retry.
    #[error("beatmap generation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        SessionError::Internal(err.to_string())
    }
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Validation(_) => ErrorCode::ValidationError,
            SessionError::Timeout { .. } => ErrorCode::Timeout,
            SessionError::Internal(_) => ErrorCode::InternalError,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        match self {
            SessionError::Validation(detail) => ErrorBody {
                code: self.code(),
                message: "Invalid input".to_string(),
                detail: Some(detail.clone()),
            },
            SessionError::Timeout { timeout_ms } => ErrorBody {
                code: self.code(),
                message: "Beatmap generation timed out".to_string(),
                detail: Some(format!("Exceeded {timeout_ms}ms SLA")),
            },
            // Internal detail stays in the logs.
            SessionError::Internal(_) => ErrorBody {
                code: self.code(),
                message: "Unexpected server error".to_string(),
                detail: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variants() {
        assert_eq!(
            SessionError::Validation("x".into()).code(),
            ErrorCode::ValidationError
        );
        assert_eq!(
            SessionError::Timeout { timeout_ms: 5 }.code(),
            ErrorCode::Timeout
        );
        assert_eq!(
            SessionError::Internal("boom".into()).code(),
            ErrorCode::InternalError
        );
    }

    #[test]
    fn timeout_body_mentions_budget() {
        let body = SessionError::Timeout { timeout_ms: 300_000 }.to_body();
        assert_eq!(body.message, "Beatmap generation timed out");
        assert_eq!(body.detail.as_deref(), Some("Exceeded 300000ms SLA"));
    }

    #[test]
    fn internal_body_hides_detail() {
        let body = SessionError::from(StoreError::Unavailable("redis down".into())).to_body();
        assert_eq!(body.code, ErrorCode::InternalError);
        assert_eq!(body.detail, None);
    }
}
