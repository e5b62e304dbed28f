use crate::csv_exchange::{ExportError, ImportError};
use actix_multipart::MultipartError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use std::fmt;

/// Everything that can go wrong while serving an import or export request.
#[derive(Debug)]
pub enum EntityServiceError {
    UnknownResource(String),
    UnsupportedFile {
        file_name: String,
        content_type: Option<String>,
    },
    MissingFile,
    PayloadTooLarge {
        file_name: String,
        limit: usize,
    },
    Multipart(String),
    InvalidBody(String),
    Import(ImportError),
    Export(ExportError),
    Io(String),
}

impl EntityServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityServiceError::UnknownResource(_) => StatusCode::NOT_FOUND,
            EntityServiceError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            EntityServiceError::UnsupportedFile { .. }
            | EntityServiceError::MissingFile
            | EntityServiceError::Multipart(_)
            | EntityServiceError::InvalidBody(_)
            | EntityServiceError::Import(_) => StatusCode::BAD_REQUEST,
            EntityServiceError::Export(_) | EntityServiceError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for EntityServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityServiceError::UnknownResource(resource) => {
                write!(f, "Unknown resource: {}", resource)
            }
            EntityServiceError::UnsupportedFile {
                file_name,
                content_type,
            } => write!(
                f,
                "Please upload a CSV file ({} was sent as {})",
                file_name,
                content_type.as_deref().unwrap_or("no content type")
            ),
            EntityServiceError::MissingFile => write!(f, "Missing file"),
            EntityServiceError::PayloadTooLarge { file_name, limit } => {
                write!(
                    f,
                    "Uploaded files exceed the limit of {} bytes at {}",
                    limit, file_name
                )
            }
            EntityServiceError::Multipart(msg) => write!(f, "Malformed upload: {}", msg),
            EntityServiceError::InvalidBody(msg) => write!(f, "Invalid request body: {}", msg),
            EntityServiceError::Import(e) => write!(f, "{}", e),
            EntityServiceError::Export(e) => write!(f, "{}", e),
            EntityServiceError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for EntityServiceError {}

impl From<ImportError> for EntityServiceError {
    fn from(err: ImportError) -> Self {
        EntityServiceError::Import(err)
    }
}

impl From<ExportError> for EntityServiceError {
    fn from(err: ExportError) -> Self {
        EntityServiceError::Export(err)
    }
}

impl From<MultipartError> for EntityServiceError {
    fn from(err: MultipartError) -> Self {
        EntityServiceError::Multipart(err.to_string())
    }
}

impl From<std::io::Error> for EntityServiceError {
    fn from(err: std::io::Error) -> Self {
        EntityServiceError::Io(err.to_string())
    }
}

impl From<BlockingError> for EntityServiceError {
    fn from(err: BlockingError) -> Self {
        EntityServiceError::Io(err.to_string())
    }
}
