use std::sync::{Arc, Mutex};

use achat::prelude::*;
use achat::{FETCH_FAILED_PLACEHOLDER, UNAVAILABLE_PLACEHOLDER};
use aprovider::{
    Candidate, Content, ModelProvider, ModelRequest, ModelResponse, ProviderError,
    ProviderErrorKind, ProviderFuture, ProviderId, Role,
};
use tokio::sync::Notify;

struct ScriptedProvider {
    store: Arc<SessionStore>,
    reply: Result<Vec<Candidate>, ProviderError>,
    requests: Mutex<Vec<ModelRequest>>,
    pending_during_dispatch: Mutex<Vec<bool>>,
}

impl ScriptedProvider {
    fn new(store: Arc<SessionStore>, reply: Result<Vec<Candidate>, ProviderError>) -> Self {
        Self {
            store,
            reply,
            requests: Mutex::new(Vec::new()),
            pending_during_dispatch: Mutex::new(Vec::new()),
        }
    }

    fn replying(store: Arc<SessionStore>, text: &str) -> Self {
        Self::new(store, Ok(vec![Candidate::from_text(text)]))
    }

    fn last_request(&self) -> ModelRequest {
        self.requests
            .lock()
            .expect("requests lock")
            .last()
            .cloned()
            .expect("a request should be captured")
    }
}

impl ModelProvider for ScriptedProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            self.pending_during_dispatch
                .lock()
                .expect("pending lock")
                .push(self.store.is_pending().expect("pending"));
            let model = request.model.clone();
            self.requests.lock().expect("requests lock").push(request);

            self.reply
                .clone()
                .map(|candidates| ModelResponse::new(ProviderId::Gemini, model, candidates))
        })
    }
}

fn new_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(SessionId::from("session-1")))
}

fn controller(provider: Arc<ScriptedProvider>, store: Arc<SessionStore>) -> ExchangeController {
    ExchangeController::new(provider, store, "gemini-2.5-pro")
}

fn roles_and_contents(store: &SessionStore) -> Vec<(Role, String)> {
    store
        .transcript()
        .expect("transcript")
        .into_iter()
        .map(|message| (message.role, message.content))
        .collect()
}

#[tokio::test]
async fn delivered_reply_appends_user_then_model_turn() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::replying(store.clone(), "Hello!"));
    let controller = controller(provider.clone(), store.clone());

    let outcome = controller.submit("  Hi  ").await.expect("submit");

    assert_eq!(outcome, Some(ExchangeOutcome::Delivered("Hello!".to_string())));
    assert_eq!(
        roles_and_contents(&store),
        vec![
            (Role::User, "Hi".to_string()),
            (Role::Model, "Hello!".to_string())
        ]
    );
    assert!(!store.is_pending().expect("pending"));

    let request = provider.last_request();
    assert_eq!(request.model, "gemini-2.5-pro");
    assert_eq!(request.contents, vec![Content::user("Hi")]);
    assert_eq!(request.options.response_mime_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn each_exchange_grows_transcript_by_two() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::replying(store.clone(), "ok"));
    let controller = controller(provider.clone(), store.clone());

    for (index, prompt) in ["one", "two", "three"].into_iter().enumerate() {
        controller.submit(prompt).await.expect("submit");
        assert_eq!(store.transcript().expect("transcript").len(), (index + 1) * 2);
    }

    let request = provider.last_request();
    assert_eq!(request.contents.len(), 5);
    assert_eq!(request.contents[4], Content::user("three"));
}

#[tokio::test]
async fn blank_input_is_a_no_op() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::replying(store.clone(), "unused"));
    let controller = controller(provider.clone(), store.clone());

    assert_eq!(controller.submit("").await.expect("submit"), None);
    assert_eq!(controller.submit("   \n\t").await.expect("submit"), None);

    assert!(store.transcript().expect("transcript").is_empty());
    assert!(!store.is_pending().expect("pending"));
    assert!(provider.requests.lock().expect("requests lock").is_empty());
}

#[tokio::test]
async fn pending_is_raised_for_the_duration_of_dispatch() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::replying(store.clone(), "Hello!"));
    let controller = controller(provider.clone(), store.clone());

    controller.submit("Hi").await.expect("submit");

    assert_eq!(
        *provider.pending_during_dispatch.lock().expect("pending lock"),
        vec![true]
    );
    assert!(!store.is_pending().expect("pending"));
}

#[tokio::test]
async fn provider_failure_appends_fetch_failed_placeholder() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::new(
        store.clone(),
        Err(ProviderError::transport("connection refused")),
    ));
    let controller = controller(provider, store.clone());

    let outcome = controller.submit("Hi").await.expect("submit");

    assert_eq!(outcome, Some(ExchangeOutcome::Unavailable));
    assert_eq!(
        roles_and_contents(&store),
        vec![
            (Role::User, "Hi".to_string()),
            (Role::Model, FETCH_FAILED_PLACEHOLDER.to_string())
        ]
    );
    assert!(!store.is_pending().expect("pending"));
}

#[tokio::test]
async fn empty_candidates_append_unavailable_placeholder() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::new(store.clone(), Ok(Vec::new())));
    let controller = controller(provider, store.clone());

    let outcome = controller.submit("Hi").await.expect("submit");

    assert_eq!(outcome, Some(ExchangeOutcome::Unavailable));
    let transcript = store.transcript().expect("transcript");
    assert_eq!(transcript[1].content, UNAVAILABLE_PLACEHOLDER);
    assert_eq!(transcript[1].role, Role::Model);
}

#[tokio::test]
async fn document_context_trails_every_payload_until_replaced() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::replying(store.clone(), "noted"));
    let controller = controller(provider.clone(), store.clone());

    store
        .set_document_context(Some("A B\nC\n".to_string()))
        .expect("context");
    controller.submit("first").await.expect("submit");
    assert_eq!(
        provider.last_request().contents.last(),
        Some(&Content::user("Context PDF:\nA B\nC\n"))
    );

    controller.submit("second").await.expect("submit");
    let request = provider.last_request();
    assert_eq!(request.contents.len(), 4);
    assert_eq!(request.contents[3], Content::user("Context PDF:\nA B\nC\n"));

    store
        .set_document_context(Some("D\n".to_string()))
        .expect("context");
    controller.submit("third").await.expect("submit");
    assert_eq!(
        provider.last_request().contents.last(),
        Some(&Content::user("Context PDF:\nD\n"))
    );

    // Context is payload-only; the transcript never records it.
    assert!(
        store
            .transcript()
            .expect("transcript")
            .iter()
            .all(|message| !message.content.starts_with("Context PDF:"))
    );
}

#[tokio::test]
async fn context_label_is_configurable() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::replying(store.clone(), "ok"));
    let controller = controller(provider.clone(), store.clone()).with_context_label("Document:");

    store
        .set_document_context(Some("text".to_string()))
        .expect("context");
    controller.submit("Hi").await.expect("submit");

    assert_eq!(
        provider.last_request().contents.last(),
        Some(&Content::user("Document:\ntext"))
    );
}

#[tokio::test]
async fn dropping_an_accepted_exchange_releases_pending() {
    let store = new_store();
    let provider = Arc::new(ScriptedProvider::replying(store.clone(), "unused"));
    let controller = controller(provider, store.clone());

    let exchange = controller
        .begin("Hi")
        .expect("begin")
        .expect("exchange should be accepted");
    assert_eq!(exchange.user_message().content, "Hi");
    assert!(store.is_pending().expect("pending"));

    drop(exchange);
    assert!(!store.is_pending().expect("pending"));
    assert_eq!(store.transcript().expect("transcript").len(), 1);
}

struct GatedProvider {
    started: Arc<Notify>,
    release: Arc<Notify>,
}

impl ModelProvider for GatedProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            self.started.notify_one();
            self.release.notified().await;
            Ok(ModelResponse::new(
                ProviderId::Gemini,
                request.model,
                vec![Candidate::from_text("late reply")],
            ))
        })
    }
}

#[tokio::test]
async fn submit_while_pending_is_dropped_not_queued() {
    let store = new_store();
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let controller = Arc::new(ExchangeController::new(
        Arc::new(GatedProvider {
            started: started.clone(),
            release: release.clone(),
        }),
        store.clone(),
        "gemini-2.5-pro",
    ));

    let in_flight = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.submit("first").await })
    };
    started.notified().await;

    assert!(store.is_pending().expect("pending"));
    assert_eq!(controller.submit("second").await.expect("submit"), None);
    assert_eq!(store.transcript().expect("transcript").len(), 1);

    release.notify_one();
    let outcome = in_flight
        .await
        .expect("task should join")
        .expect("submit should succeed");

    assert_eq!(outcome, Some(ExchangeOutcome::Delivered("late reply".to_string())));
    assert_eq!(
        roles_and_contents(&store),
        vec![
            (Role::User, "first".to_string()),
            (Role::Model, "late reply".to_string())
        ]
    );
}

#[derive(Default)]
struct FailureCounter {
    failures: Mutex<Vec<ProviderErrorKind>>,
}

impl SessionObserver for FailureCounter {
    fn on_exchange_failed(&self, _session_id: &SessionId, error: &ProviderError) {
        self.failures.lock().expect("failures lock").push(error.kind);
    }
}

#[tokio::test]
async fn provider_failure_is_reported_once_through_observers() {
    let counter = Arc::new(FailureCounter::default());
    let store = Arc::new(
        SessionStore::new(SessionId::from("session-1")).with_observer(counter.clone()),
    );
    let provider = Arc::new(ScriptedProvider::new(
        store.clone(),
        Err(ProviderError::rate_limited("slow down")),
    ));
    let controller = controller(provider, store.clone());

    controller.submit("Hi").await.expect("submit");

    assert_eq!(
        *counter.failures.lock().expect("failures lock"),
        vec![ProviderErrorKind::RateLimited]
    );
}
