//! Page-by-page text assembly.
//!
//! ```rust
//! use adocument::join_page_runs;
//!
//! let runs = vec!["A".to_string(), "B".to_string()];
//! assert_eq!(join_page_runs(&runs), "A B\n");
//! assert_eq!(join_page_runs(&[]), "\n");
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{DocumentBackend, DocumentError};

/// Constructs a backend on first use.
pub type BackendFactory =
    Box<dyn Fn() -> Result<Arc<dyn DocumentBackend>, DocumentError> + Send + Sync>;

/// Text extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedDocument {
    pub text: String,
    pub page_count: usize,
}

/// Joins one page's text runs with single spaces and terminates the page with `\n`.
pub fn join_page_runs(runs: &[String]) -> String {
    let mut page = runs.join(" ");
    page.push('\n');
    page
}

pub struct DocumentIngestor {
    backend: Mutex<Option<Arc<dyn DocumentBackend>>>,
    factory: Option<BackendFactory>,
}

impl DocumentIngestor {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            backend: Mutex::new(Some(backend)),
            factory: None,
        }
    }

    /// Defers backend construction until the first document is ingested.
    ///
    /// A factory error is returned to that caller and construction is retried
    /// on the next ingestion.
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn DocumentBackend>, DocumentError> + Send + Sync + 'static,
    {
        Self {
            backend: Mutex::new(None),
            factory: Some(Box::new(factory)),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.backend_guard()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Extracts the text of every page in order.
    ///
    /// Pages are visited one at a time; the first failing page aborts the
    /// whole ingestion so a partially decoded document never leaks out.
    pub async fn ingest(&self, bytes: &[u8]) -> Result<IngestedDocument, DocumentError> {
        if bytes.is_empty() {
            return Err(DocumentError::invalid_document("document contains no bytes"));
        }

        let backend = self.backend()?;
        let document = backend.open(bytes).await?;
        let page_count = document.page_count();
        tracing::debug!(
            backend = backend.name(),
            byte_len = bytes.len(),
            page_count,
            "document opened"
        );

        let mut text = String::new();
        for page_index in 0..page_count {
            let runs = document.page_text_runs(page_index).await?;
            text.push_str(&join_page_runs(&runs));
        }

        Ok(IngestedDocument { text, page_count })
    }

    fn backend(&self) -> Result<Arc<dyn DocumentBackend>, DocumentError> {
        let mut slot = self.backend_guard()?;
        if let Some(backend) = slot.as_ref() {
            return Ok(Arc::clone(backend));
        }

        let factory = self.factory.as_ref().ok_or_else(|| {
            DocumentError::backend_unavailable("no document backend configured")
        })?;
        let backend = factory()?;
        *slot = Some(Arc::clone(&backend));
        Ok(backend)
    }

    fn backend_guard(
        &self,
    ) -> Result<MutexGuard<'_, Option<Arc<dyn DocumentBackend>>>, DocumentError> {
        self.backend
            .lock()
            .map_err(|_| DocumentError::backend_unavailable("document backend lock poisoned"))
    }
}

impl std::fmt::Debug for DocumentIngestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentIngestor")
            .field("initialized", &self.is_initialized())
            .field("lazy", &self.factory.is_some())
            .finish()
    }
}
