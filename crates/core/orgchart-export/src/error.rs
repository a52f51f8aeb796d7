//! Export Error Types
//!
//! Every failure of a save-export call is returned as a value. The desktop
//! layer converts it into an [`ErrorResponse`] for the front end.

use crate::dialog::DialogError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Export operation error
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("empty export payload")]
    EmptyPayload,

    #[error("invalid data URL payload")]
    MalformedDataUrl,

    #[error("decode base64 export payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("application context is not ready")]
    ContextNotReady,

    #[error("cancelled")]
    Cancelled,

    #[error("write export file: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dialog-layer failure, message passed through untouched
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

impl ExportError {
    /// Stable error code for the front end
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyPayload => codes::EMPTY_PAYLOAD,
            Self::MalformedDataUrl => codes::MALFORMED_DATA_URL,
            Self::InvalidBase64(_) => codes::INVALID_BASE64,
            Self::ContextNotReady => codes::CONTEXT_NOT_READY,
            Self::Cancelled => codes::CANCELLED,
            Self::WriteFailed { .. } => codes::WRITE_FAILED,
            Self::Dialog(_) => codes::DIALOG_ERROR,
        }
    }

    /// True when the user dismissed the save dialog
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Serializable error for command responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&ExportError> for ErrorResponse {
    fn from(err: &ExportError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ExportError> for ErrorResponse {
    fn from(err: ExportError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// =============================================================================
// Error Codes
// =============================================================================

pub mod codes {
    pub const EMPTY_PAYLOAD: &str = "EMPTY_PAYLOAD";
    pub const MALFORMED_DATA_URL: &str = "MALFORMED_DATA_URL";
    pub const INVALID_BASE64: &str = "INVALID_BASE64";
    pub const CONTEXT_NOT_READY: &str = "CONTEXT_NOT_READY";
    pub const CANCELLED: &str = "CANCELLED";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";
    pub const DIALOG_ERROR: &str = "DIALOG_ERROR";
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_variants() {
        assert_eq!(ExportError::EmptyPayload.code(), codes::EMPTY_PAYLOAD);
        assert_eq!(ExportError::MalformedDataUrl.code(), codes::MALFORMED_DATA_URL);
        assert_eq!(ExportError::ContextNotReady.code(), codes::CONTEXT_NOT_READY);
        assert_eq!(ExportError::Cancelled.code(), codes::CANCELLED);

        let write = ExportError::WriteFailed {
            path: PathBuf::from("/nope/out.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(write.code(), codes::WRITE_FAILED);
        assert_eq!(write.to_string(), "write export file: denied");
    }

    #[test]
    fn test_dialog_error_message_is_verbatim() {
        let err = ExportError::from(DialogError::new("portal crashed"));
        assert_eq!(err.to_string(), "portal crashed");
        assert_eq!(err.code(), codes::DIALOG_ERROR);
    }

    #[test]
    fn test_error_response_from_export_error() {
        let resp = ErrorResponse::from(ExportError::Cancelled);
        assert_eq!(resp.code, "CANCELLED");
        assert_eq!(resp.message, "cancelled");
        assert!(ExportError::Cancelled.is_cancelled());
        assert!(!ExportError::EmptyPayload.is_cancelled());
    }

    #[test]
    fn test_error_response_serializes_code_and_message() {
        let resp = ErrorResponse::from(&ExportError::ContextNotReady);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], "CONTEXT_NOT_READY");
        assert_eq!(json["message"], "application context is not ready");
    }
}
