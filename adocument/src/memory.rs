//! Fixed, in-memory document backend.
//!
//! Useful when a caller already holds extracted page text, and in tests that
//! need deterministic pages without a real decoder.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{DocumentBackend, DocumentError, DocumentFuture, ParsedDocument};

#[derive(Debug, Default)]
pub struct StaticDocumentBackend {
    pages: Arc<Vec<Vec<String>>>,
    open_error: Option<DocumentError>,
    page_error: Option<(usize, DocumentError)>,
    opened: AtomicUsize,
}

impl StaticDocumentBackend {
    pub fn from_pages(pages: Vec<Vec<String>>) -> Self {
        Self {
            pages: Arc::new(pages),
            ..Self::default()
        }
    }

    /// A backend that rejects every document with `error`.
    pub fn failing(error: DocumentError) -> Self {
        Self {
            open_error: Some(error),
            ..Self::default()
        }
    }

    /// Fails extraction of the page at `page_index` after a successful open.
    pub fn with_page_error(mut self, page_index: usize, error: DocumentError) -> Self {
        self.page_error = Some((page_index, error));
        self
    }

    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl DocumentBackend for StaticDocumentBackend {
    fn name(&self) -> &'static str {
        "static"
    }

    fn open<'a>(
        &'a self,
        _bytes: &'a [u8],
    ) -> DocumentFuture<'a, Result<Box<dyn ParsedDocument>, DocumentError>> {
        Box::pin(async move {
            self.opened.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = &self.open_error {
                return Err(error.clone());
            }

            Ok(Box::new(StaticDocument {
                pages: Arc::clone(&self.pages),
                page_error: self.page_error.clone(),
            }) as Box<dyn ParsedDocument>)
        })
    }
}

#[derive(Debug, Clone)]
pub struct StaticDocument {
    pages: Arc<Vec<Vec<String>>>,
    page_error: Option<(usize, DocumentError)>,
}

impl ParsedDocument for StaticDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text_runs<'a>(
        &'a self,
        page_index: usize,
    ) -> DocumentFuture<'a, Result<Vec<String>, DocumentError>> {
        Box::pin(async move {
            if let Some((failing_index, error)) = &self.page_error
                && *failing_index == page_index
            {
                return Err(error.clone());
            }

            self.pages
                .get(page_index)
                .cloned()
                .ok_or_else(|| DocumentError::page_out_of_range(page_index, self.pages.len()))
        })
    }
}
