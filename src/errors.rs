use axum::http::StatusCode;
use thiserror::Error;

/// Failures of a single attendance operation. Every variant renders as the
/// line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("Secret word is required")]
    MissingCredential,

    #[error("{0}")]
    MissingSelection(&'static str),

    #[error("Please choose a valid date.")]
    InvalidDate,

    #[error("{message}")]
    RemoteRequestFailed { message: String },

    #[error("Network request failed: {0}")]
    NetworkUnavailable(String),
}

impl AttendanceError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteRequestFailed {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AttendanceError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkUnavailable(err.to_string())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<AttendanceError> for AppError {
    fn from(err: AttendanceError) -> Self {
        match err {
            AttendanceError::RemoteRequestFailed { .. } | AttendanceError::NetworkUnavailable(_) => {
                Self::bad_gateway(err.to_string())
            }
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
