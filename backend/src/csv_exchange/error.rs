use std::fmt;

/// Failure to turn an uploaded file into records.
///
/// Both variants are caused by the client's file and are not retriable
/// without fixing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The header does not match the declared column set, or a data row
    /// could not be read under it.
    HeaderMismatch {
        file_name: String,
        observed: Vec<String>,
        expected: Vec<String>,
    },
    /// The bytes are not UTF-8 text, or the CSV reader gave up on them.
    Unreadable { file_name: String, reason: String },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::HeaderMismatch {
                file_name,
                observed,
                expected,
            } => write!(
                f,
                "Invalid CSV header (File name: {}, Actual: [{}], Expected: [{}])",
                file_name,
                observed.join(", "),
                expected.join(", ")
            ),
            ImportError::Unreadable { file_name, reason } => {
                write!(f, "Fail to parse CSV file {}: {}", file_name, reason)
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Failure to write an export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    WriteFailed { file_name: String, cause: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::WriteFailed { file_name, cause } => {
                write!(f, "Failed to write CSV export {}: {}", file_name, cause)
            }
        }
    }
}

impl std::error::Error for ExportError {}
