//! Presentation-facing chat session.

use std::sync::{Arc, Mutex, MutexGuard};

use acommon::SessionId;
use adocument::DocumentIngestor;

use crate::{
    ChatError, DocumentOutcome, ExchangeController, ExchangeOutcome, Message, SessionObserver,
    SessionSnapshot, SessionStore,
};

/// Everything a renderer needs: state accessors, the input draft, and the
/// send and upload entry points.
#[derive(Debug)]
pub struct ChatSession {
    controller: ExchangeController,
    ingestor: Arc<DocumentIngestor>,
    input: Mutex<String>,
}

impl ChatSession {
    pub fn new(controller: ExchangeController, ingestor: Arc<DocumentIngestor>) -> Self {
        Self {
            controller,
            ingestor,
            input: Mutex::new(String::new()),
        }
    }

    pub fn id(&self) -> &SessionId {
        self.store().session_id()
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        self.controller.store()
    }

    pub fn transcript(&self) -> Result<Vec<Message>, ChatError> {
        self.store().transcript()
    }

    pub fn is_pending(&self) -> Result<bool, ChatError> {
        self.store().is_pending()
    }

    pub fn document_label(&self) -> Result<Option<String>, ChatError> {
        self.store().document_label()
    }

    pub fn uploading_label(&self) -> Result<Option<String>, ChatError> {
        self.store().uploading_label()
    }

    pub fn document_context(&self) -> Result<Option<String>, ChatError> {
        self.store().document_context()
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, ChatError> {
        self.store().snapshot()
    }

    pub fn input(&self) -> Result<String, ChatError> {
        Ok(self.input_guard()?.clone())
    }

    pub fn set_input(&self, text: impl Into<String>) -> Result<(), ChatError> {
        *self.input_guard()? = text.into();
        Ok(())
    }

    pub async fn submit(&self, text: &str) -> Result<Option<ExchangeOutcome>, ChatError> {
        self.controller.submit(text).await
    }

    /// Submits the current draft.
    ///
    /// The draft is cleared as soon as the user turn is accepted, before the
    /// reply arrives. A blank draft, or one sent while an exchange is pending,
    /// is left in place.
    pub async fn submit_input(&self) -> Result<Option<ExchangeOutcome>, ChatError> {
        let draft = self.input()?;
        let Some(exchange) = self.controller.begin(&draft)? else {
            return Ok(None);
        };

        self.input_guard()?.clear();
        exchange.complete().await.map(Some)
    }

    /// Ingests `bytes` as the session's document context.
    ///
    /// `display_name` is exposed as the uploading label right away. On success
    /// the extracted text and `display_name` replace the previous context and
    /// label together; on failure both are kept and the error is reported in
    /// the outcome. When uploads overlap, the last one to finish wins.
    pub async fn attach_document(
        &self,
        bytes: &[u8],
        display_name: impl Into<String>,
    ) -> Result<DocumentOutcome, ChatError> {
        let store = self.store();
        let ticket = store.begin_upload(display_name)?;

        match self.ingestor.ingest(bytes).await {
            Ok(document) => {
                let page_count = document.page_count;
                let text_len = document.text.len();
                store.commit_upload(ticket, document.text)?;
                store
                    .observers()
                    .on_ingestion_success(store.session_id(), page_count, text_len);

                Ok(DocumentOutcome::Ingested {
                    page_count,
                    text_len,
                })
            }
            Err(error) => {
                store.abandon_upload(ticket)?;
                store
                    .observers()
                    .on_ingestion_failure(store.session_id(), &error);

                Ok(DocumentOutcome::Rejected(error))
            }
        }
    }

    fn input_guard(&self) -> Result<MutexGuard<'_, String>, ChatError> {
        self.input
            .lock()
            .map_err(|_| ChatError::store("session input lock poisoned"))
    }
}
