//! Document text ingestion over pluggable parsing backends.
//!
//! A [`DocumentIngestor`] turns raw document bytes into plain text, one page
//! at a time: the text runs of each page are joined by a single space and
//! every page is terminated by a newline.
//!
//! ```rust
//! use adocument::{DocumentIngestor, StaticDocumentBackend};
//!
//! let backend = StaticDocumentBackend::from_pages(vec![
//!     vec!["A".to_string(), "B".to_string()],
//!     vec!["C".to_string()],
//! ]);
//! let ingestor = DocumentIngestor::new(std::sync::Arc::new(backend));
//!
//! let future = ingestor.ingest(b"%PDF-1.7");
//! # let _ = future;
//! ```

mod backend;
mod error;
mod ingest;
mod memory;

#[cfg(feature = "backend-lopdf")]
pub mod pdf;

pub use backend::{DocumentBackend, DocumentFuture, ParsedDocument};
pub use error::{DocumentError, DocumentErrorKind};
pub use ingest::{BackendFactory, DocumentIngestor, IngestedDocument, join_page_runs};
pub use memory::{StaticDocument, StaticDocumentBackend};

pub mod prelude {
    pub use crate::{
        DocumentBackend, DocumentError, DocumentErrorKind, DocumentIngestor, IngestedDocument,
        ParsedDocument, StaticDocumentBackend,
    };
}
