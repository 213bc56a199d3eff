use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message surfaced for server faults; the underlying cause is logged
/// server-side and never echoed to the caller.
pub const GENERIC_FAULT_MESSAGE: &str = "internal error while processing the file";

#[derive(Debug, Error)]
pub enum DeidError {
    #[error("no file supplied; expected a spreadsheet upload")]
    MissingInput,
    #[error("unsupported file type `{0}`; expected .xlsx or .xls")]
    UnsupportedFileType(String),
    #[error("file is {size} bytes; the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("decode workbook: {0}")]
    Decode(String),
    #[error("encode workbook: {0}")]
    Encode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeidError {
    /// Client faults are detected at the upload boundary before the
    /// transform runs and carry a user-actionable message. Everything
    /// else is a server fault.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            DeidError::MissingInput
                | DeidError::UnsupportedFileType(_)
                | DeidError::FileTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DeidError>;

/// Error body returned to callers by embedding services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Client faults echo their own message; server faults collapse to
    /// the generic message so internal causes stay server-side.
    pub fn from_error(error: &DeidError) -> Self {
        let message = if error.is_client_fault() {
            error.to_string()
        } else {
            GENERIC_FAULT_MESSAGE.to_string()
        };
        Self { error: message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_errors_are_client_faults() {
        assert!(DeidError::MissingInput.is_client_fault());
        assert!(DeidError::UnsupportedFileType("csv".to_string()).is_client_fault());
        assert!(
            DeidError::FileTooLarge {
                size: 11,
                limit: 10
            }
            .is_client_fault()
        );
        assert!(!DeidError::Decode("bad zip".to_string()).is_client_fault());
    }

    #[test]
    fn server_faults_never_echo_their_cause() {
        let body = ErrorBody::from_error(&DeidError::Decode("sheet1.xml truncated".to_string()));
        assert_eq!(body.error, GENERIC_FAULT_MESSAGE);

        let body = ErrorBody::from_error(&DeidError::UnsupportedFileType("pdf".to_string()));
        assert!(body.error.contains("pdf"));
    }
}
