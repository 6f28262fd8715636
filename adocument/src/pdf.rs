//! PDF decoding backed by `lopdf`.
//!
//! Parsing and text extraction are CPU-bound, so both run on tokio's blocking
//! pool; the backend must be driven from inside a tokio runtime.

use std::sync::Arc;

use lopdf::Document;

use crate::{DocumentBackend, DocumentError, DocumentFuture, ParsedDocument};

#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn open<'a>(
        &'a self,
        bytes: &'a [u8],
    ) -> DocumentFuture<'a, Result<Box<dyn ParsedDocument>, DocumentError>> {
        Box::pin(async move {
            let bytes = bytes.to_vec();
            let document = tokio::task::spawn_blocking(move || Document::load_mem(&bytes))
                .await
                .map_err(worker_failed)?
                .map_err(|err| DocumentError::invalid_document(err.to_string()))?;
            let page_numbers = document.get_pages().keys().copied().collect();

            Ok(Box::new(LopdfDocument {
                document: Arc::new(document),
                page_numbers,
            }) as Box<dyn ParsedDocument>)
        })
    }
}

/// A loaded PDF; page indices map onto the document's page tree in order.
pub struct LopdfDocument {
    document: Arc<Document>,
    page_numbers: Vec<u32>,
}

impl ParsedDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text_runs<'a>(
        &'a self,
        page_index: usize,
    ) -> DocumentFuture<'a, Result<Vec<String>, DocumentError>> {
        Box::pin(async move {
            let page_number = *self
                .page_numbers
                .get(page_index)
                .ok_or_else(|| DocumentError::page_out_of_range(page_index, self.page_numbers.len()))?;

            let document = Arc::clone(&self.document);
            let text = tokio::task::spawn_blocking(move || document.extract_text(&[page_number]))
                .await
                .map_err(worker_failed)?
                .map_err(|err| DocumentError::invalid_document(err.to_string()))?;

            Ok(text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect())
        })
    }
}

fn worker_failed(err: tokio::task::JoinError) -> DocumentError {
    DocumentError::backend_unavailable(format!("pdf worker failed: {err}"))
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_numbers", &self.page_numbers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    use super::*;
    use crate::DocumentErrorKind;

    fn single_page_pdf(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content should encode"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("document should save");
        bytes
    }

    #[tokio::test]
    async fn lopdf_backend_reads_page_text() {
        let bytes = single_page_pdf("Quarterly report");
        let parsed = LopdfBackend::new()
            .open(&bytes)
            .await
            .expect("pdf should open");

        assert_eq!(parsed.page_count(), 1);
        let runs = parsed.page_text_runs(0).await.expect("page should extract");
        assert!(runs.join(" ").contains("Quarterly report"), "runs: {runs:?}");

        let err = parsed
            .page_text_runs(1)
            .await
            .expect_err("second page does not exist");
        assert_eq!(err.kind, DocumentErrorKind::PageOutOfRange);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn lopdf_backend_decodes_off_a_single_threaded_runtime() {
        let bytes = single_page_pdf("Board minutes");
        let ticker = tokio::spawn(async { "ticked" });

        let ingested = crate::DocumentIngestor::new(std::sync::Arc::new(LopdfBackend::new()))
            .ingest(&bytes)
            .await
            .expect("pdf should ingest");

        assert_eq!(ingested.page_count, 1);
        assert!(ingested.text.contains("Board minutes"), "text: {}", ingested.text);
        assert!(ingested.text.ends_with('\n'));
        assert_eq!(ticker.await.expect("ticker should join"), "ticked");
    }

    #[tokio::test]
    async fn lopdf_backend_rejects_non_pdf_bytes() {
        let err = LopdfBackend::new()
            .open(b"definitely not a pdf")
            .await
            .err()
            .expect("garbage should fail");
        assert_eq!(err.kind, DocumentErrorKind::InvalidDocument);
    }
}
