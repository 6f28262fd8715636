//! Document ingestion errors.
//!
//! ```rust
//! use adocument::{DocumentError, DocumentErrorKind};
//!
//! let err = DocumentError::invalid_document("missing xref table");
//! assert_eq!(err.kind, DocumentErrorKind::InvalidDocument);
//! assert_eq!(err.to_string(), "InvalidDocument: missing xref table");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentErrorKind {
    InvalidDocument,
    PageOutOfRange,
    BackendUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentError {
    pub kind: DocumentErrorKind,
    pub message: String,
}

impl DocumentError {
    pub fn new(kind: DocumentErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::new(DocumentErrorKind::InvalidDocument, message)
    }

    pub fn page_out_of_range(page_index: usize, page_count: usize) -> Self {
        Self::new(
            DocumentErrorKind::PageOutOfRange,
            format!("page index {page_index} is out of range for {page_count} pages"),
        )
    }

    pub fn backend_unavailable(message: impl Into<String>) -> Self {
        Self::new(DocumentErrorKind::BackendUnavailable, message)
    }
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for DocumentError {}
