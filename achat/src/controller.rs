//! Single-exchange orchestration between the session store and a completion provider.

use std::sync::Arc;
use std::time::Instant;

use acommon::GenerationOptions;
use aprovider::{ModelProvider, ModelRequest, ModelResponse, Role};

use crate::{
    ChatError, DEFAULT_CONTEXT_LABEL, ExchangeOutcome, FETCH_FAILED_PLACEHOLDER, Message,
    SessionObserver, SessionStore, UNAVAILABLE_PLACEHOLDER, build_contents,
};

#[derive(Clone)]
pub struct ExchangeController {
    provider: Arc<dyn ModelProvider>,
    store: Arc<SessionStore>,
    model: String,
    options: GenerationOptions,
    context_label: String,
}

impl ExchangeController {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        store: Arc<SessionStore>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            store,
            model: model.into(),
            options: GenerationOptions::plain_text(),
            context_label: DEFAULT_CONTEXT_LABEL.to_string(),
        }
    }

    pub fn with_context_label(mut self, label: impl Into<String>) -> Self {
        self.context_label = label.into();
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Runs one exchange for `raw_input`.
    ///
    /// Returns `Ok(None)` when the input is blank or another exchange is in
    /// flight; neither case touches the session. Provider failures never
    /// surface here: they become a placeholder model turn and
    /// [`ExchangeOutcome::Unavailable`]. `Err` is reserved for store failures.
    pub async fn submit(&self, raw_input: &str) -> Result<Option<ExchangeOutcome>, ChatError> {
        match self.begin(raw_input)? {
            Some(exchange) => exchange.complete().await.map(Some),
            None => Ok(None),
        }
    }

    /// Accepts the user turn and raises `pending` without contacting the provider.
    ///
    /// The returned exchange must be completed to produce the model turn;
    /// dropping it lowers `pending` and leaves the user turn unanswered.
    pub fn begin(&self, raw_input: &str) -> Result<Option<PendingExchange<'_>>, ChatError> {
        let session_id = self.store.session_id();
        let text = raw_input.trim();
        if text.is_empty() {
            tracing::debug!(session_id = %session_id, "ignoring blank submission");
            return Ok(None);
        }

        let Some(user_message) = self.store.try_begin_exchange(text)? else {
            tracing::debug!(session_id = %session_id, "exchange already pending, submission dropped");
            return Ok(None);
        };

        Ok(Some(PendingExchange {
            controller: self,
            guard: PendingGuard::new(&self.store),
            user_message,
            started: Instant::now(),
        }))
    }

    fn build_request(&self) -> Result<ModelRequest, ChatError> {
        let snapshot = self.store.snapshot()?;
        let contents = build_contents(
            &snapshot.transcript,
            snapshot.document_context.as_deref(),
            &self.context_label,
        );

        Ok(ModelRequest::new(self.model.clone(), contents).with_options(self.options.clone()))
    }
}

impl std::fmt::Debug for ExchangeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeController")
            .field("provider", &self.provider.id())
            .field("session_id", self.store.session_id())
            .field("model", &self.model)
            .field("context_label", &self.context_label)
            .finish_non_exhaustive()
    }
}

/// An accepted exchange awaiting its model turn.
pub struct PendingExchange<'a> {
    controller: &'a ExchangeController,
    guard: PendingGuard<'a>,
    user_message: Message,
    started: Instant,
}

impl PendingExchange<'_> {
    pub fn user_message(&self) -> &Message {
        &self.user_message
    }

    pub async fn complete(self) -> Result<ExchangeOutcome, ChatError> {
        let controller = self.controller;
        let store = &controller.store;
        let session_id = store.session_id();

        let request = controller.build_request()?;
        tracing::debug!(
            session_id = %session_id,
            message_id = self.user_message.id.value(),
            contents = request.contents.len(),
            "dispatching exchange"
        );

        let (content, outcome) = match controller.provider.complete(request).await {
            Ok(response) => interpret_response(&response),
            Err(error) => {
                store.observers().on_exchange_failed(session_id, &error);
                (FETCH_FAILED_PLACEHOLDER.to_string(), ExchangeOutcome::Unavailable)
            }
        };

        store.append_message(Role::Model, content)?;
        self.guard.release()?;

        store
            .observers()
            .on_exchange_complete(session_id, &outcome, self.started.elapsed());
        Ok(outcome)
    }
}

impl std::fmt::Debug for PendingExchange<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingExchange")
            .field("user_message", &self.user_message)
            .finish_non_exhaustive()
    }
}

fn interpret_response(response: &ModelResponse) -> (String, ExchangeOutcome) {
    match response
        .first_text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
    {
        Some(text) => (text.to_string(), ExchangeOutcome::Delivered(text.to_string())),
        None => (UNAVAILABLE_PLACEHOLDER.to_string(), ExchangeOutcome::Unavailable),
    }
}

/// Lowers `pending` when dropped unless already released.
///
/// Covers early returns and a dropped exchange future.
struct PendingGuard<'a> {
    store: &'a SessionStore,
    released: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(store: &'a SessionStore) -> Self {
        Self {
            store,
            released: false,
        }
    }

    fn release(mut self) -> Result<(), ChatError> {
        self.released = true;
        self.store.set_pending(false)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            let _ = self.store.set_pending(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use aprovider::{Candidate, Part, ProviderId};

    use super::*;

    fn response(candidates: Vec<Candidate>) -> ModelResponse {
        ModelResponse::new(ProviderId::Gemini, "gemini-2.5-pro", candidates)
    }

    #[test]
    fn reply_text_is_trimmed() {
        let (content, outcome) = interpret_response(&response(vec![Candidate::from_text(
            "  Hello!\n",
        )]));
        assert_eq!(content, "Hello!");
        assert_eq!(outcome, ExchangeOutcome::Delivered("Hello!".to_string()));
    }

    #[test]
    fn missing_or_blank_text_falls_back_to_unavailable_placeholder() {
        let cases = [
            response(Vec::new()),
            response(vec![Candidate::default()]),
            response(vec![Candidate {
                parts: vec![Part::default()],
            }]),
            response(vec![Candidate::from_text("   ")]),
        ];

        for case in cases {
            let (content, outcome) = interpret_response(&case);
            assert_eq!(content, UNAVAILABLE_PLACEHOLDER);
            assert_eq!(outcome, ExchangeOutcome::Unavailable);
        }
    }
}
