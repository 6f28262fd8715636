//! Document-parsing capability contracts.

use acommon::BoxFuture;

use crate::DocumentError;

pub type DocumentFuture<'a, T> = BoxFuture<'a, T>;

/// Decodes raw bytes of one document format.
pub trait DocumentBackend: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    fn open<'a>(
        &'a self,
        bytes: &'a [u8],
    ) -> DocumentFuture<'a, Result<Box<dyn ParsedDocument>, DocumentError>>;
}

/// A decoded document that yields text runs page by page.
pub trait ParsedDocument: Send + Sync {
    fn page_count(&self) -> usize;

    /// Text runs of the page at zero-based `page_index`, in reading order.
    fn page_text_runs<'a>(
        &'a self,
        page_index: usize,
    ) -> DocumentFuture<'a, Result<Vec<String>, DocumentError>>;
}
