use reqwest::StatusCode;
use thiserror::Error;

/// Why a photo could not be taken into the session.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("the selected file is empty")]
    EmptyFile,

    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
}

/// Everything that can go wrong between handing a photo to the analysis
/// service and holding a parsed result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("could not reach the analysis service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("analysis service answered with status {status}")]
    Status { status: StatusCode },

    #[error("analysis service sent an unexpected payload: {0}")]
    MalformedPayload(String),

    #[error("failed to build the analysis request: {0}")]
    Request(String),

    #[error("analysis request ended without reporting a result")]
    Interrupted,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("home directory not found")]
    NoHomeDir,

    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse failure category kept in the session state; the detailed error
/// only goes to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Service,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&AnalysisError> for ErrorInfo {
    fn from(err: &AnalysisError) -> Self {
        let (kind, message) = match err {
            AnalysisError::Network(_) => (
                FailureKind::Network,
                "Could not reach the analysis service. Check that it is running and try again.",
            ),
            AnalysisError::Status { .. } | AnalysisError::MalformedPayload(_) => (
                FailureKind::Service,
                "The analysis service could not process this photo.",
            ),
            AnalysisError::Request(_) | AnalysisError::Interrupted => (
                FailureKind::Internal,
                "Something went wrong while sending the photo.",
            ),
        };
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_payload_errors_are_service_failures() {
        let status = AnalysisError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let payload = AnalysisError::MalformedPayload("missing field `face_shape`".into());

        assert_eq!(ErrorInfo::from(&status).kind, FailureKind::Service);
        assert_eq!(ErrorInfo::from(&payload).kind, FailureKind::Service);
        assert_eq!(
            ErrorInfo::from(&status).message,
            ErrorInfo::from(&payload).message
        );
    }

    #[test]
    fn interrupted_is_internal() {
        let info = ErrorInfo::from(&AnalysisError::Interrupted);
        assert_eq!(info.kind, FailureKind::Internal);
        assert!(!info.message.is_empty());
    }

    #[test]
    fn display_includes_status_code() {
        let err = AnalysisError::Status {
            status: StatusCode::BAD_GATEWAY,
        };
        assert!(err.to_string().contains("502"));
    }
}
