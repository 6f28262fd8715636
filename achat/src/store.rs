//! In-memory session state.
//!
//! ```rust
//! use achat::{SessionStore, SessionId};
//! use aprovider::Role;
//!
//! let store = SessionStore::new(SessionId::from("session-1"));
//! let first = store.append_message(Role::User, "Hi").expect("append");
//! let second = store.append_message(Role::Model, "Hello!").expect("append");
//!
//! assert!(first.id < second.id);
//! assert_eq!(store.transcript().expect("transcript").len(), 2);
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use acommon::SessionId;
use aprovider::Role;

use crate::{
    ChatError, Message, MessageId, ObserverSet, SessionObserver, SessionSnapshot, UploadTicket,
};

#[derive(Debug, Default)]
struct SessionState {
    transcript: Vec<Message>,
    pending: bool,
    document_context: Option<String>,
    document_label: Option<String>,
    uploading: Option<(u64, String)>,
    next_id: u64,
    next_upload: u64,
}

impl SessionState {
    fn push(&mut self, role: Role, content: String) -> Message {
        self.next_id += 1;
        let message = Message {
            id: MessageId::new(self.next_id),
            role,
            content,
        };
        self.transcript.push(message.clone());
        message
    }

    fn finish_upload(&mut self, upload_id: u64) {
        if self
            .uploading
            .as_ref()
            .is_some_and(|(id, _)| *id == upload_id)
        {
            self.uploading = None;
        }
    }
}

/// Ordered transcript plus the in-flight flag and document context of one session.
///
/// Every operation completes under a single lock acquisition; observers run
/// after the lock is released.
#[derive(Debug)]
pub struct SessionStore {
    session_id: SessionId,
    state: Mutex<SessionState>,
    observers: ObserverSet,
}

impl SessionStore {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            state: Mutex::new(SessionState::default()),
            observers: ObserverSet::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn with_observers(mut self, observers: impl IntoIterator<Item = Arc<dyn SessionObserver>>) -> Self {
        for observer in observers {
            self.observers.push(observer);
        }
        self
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn observers(&self) -> &ObserverSet {
        &self.observers
    }

    /// Appends a message with a fresh id. User turns are trimmed and must not be empty.
    pub fn append_message(
        &self,
        role: Role,
        content: impl Into<String>,
    ) -> Result<Message, ChatError> {
        let content = normalize_content(role, content.into())?;
        let message = self.state()?.push(role, content);

        self.observers
            .on_message_appended(&self.session_id, &message);
        Ok(message)
    }

    pub fn set_pending(&self, pending: bool) -> Result<(), ChatError> {
        let changed = {
            let mut state = self.state()?;
            let changed = state.pending != pending;
            state.pending = pending;
            changed
        };

        if changed {
            self.observers.on_pending_changed(&self.session_id, pending);
        }
        Ok(())
    }

    /// Replaces the stored document context wholesale.
    ///
    /// Context installed this way did not come from an upload, so the
    /// document label is cleared alongside it.
    pub fn set_document_context(&self, context: Option<String>) -> Result<(), ChatError> {
        self.set_document(None, context)
    }

    /// Replaces the document label and context together.
    pub fn set_document(
        &self,
        label: Option<String>,
        context: Option<String>,
    ) -> Result<(), ChatError> {
        {
            let mut state = self.state()?;
            state.document_label = label;
            state.document_context = context.clone();
        }

        self.observers
            .on_document_context_changed(&self.session_id, context.as_deref());
        Ok(())
    }

    /// Records `label` as the upload in flight.
    ///
    /// The committed label and context stay as they are until the returned
    /// ticket is passed to [`SessionStore::commit_upload`].
    pub fn begin_upload(&self, label: impl Into<String>) -> Result<UploadTicket, ChatError> {
        let label = label.into();
        let ticket = {
            let mut state = self.state()?;
            state.next_upload += 1;
            state.uploading = Some((state.next_upload, label.clone()));
            UploadTicket {
                id: state.next_upload,
                label,
            }
        };

        self.observers
            .on_document_attached(&self.session_id, &ticket.label);
        Ok(ticket)
    }

    /// Installs an upload's text and label in one step.
    ///
    /// The last upload to commit wins, whatever order the uploads started in.
    pub fn commit_upload(&self, ticket: UploadTicket, context: String) -> Result<(), ChatError> {
        {
            let mut state = self.state()?;
            state.finish_upload(ticket.id);
            state.document_label = Some(ticket.label);
            state.document_context = Some(context.clone());
        }

        self.observers
            .on_document_context_changed(&self.session_id, Some(&context));
        Ok(())
    }

    /// Ends an upload without touching the committed label or context.
    pub fn abandon_upload(&self, ticket: UploadTicket) -> Result<(), ChatError> {
        self.state()?.finish_upload(ticket.id);
        Ok(())
    }

    /// Appends the user turn and raises `pending` in one step.
    ///
    /// Returns `None` without touching state while another exchange is in flight.
    pub fn try_begin_exchange(&self, user_text: &str) -> Result<Option<Message>, ChatError> {
        let content = normalize_content(Role::User, user_text.to_string())?;
        let message = {
            let mut state = self.state()?;
            if state.pending {
                return Ok(None);
            }

            let message = state.push(Role::User, content);
            state.pending = true;
            message
        };

        self.observers
            .on_message_appended(&self.session_id, &message);
        self.observers.on_pending_changed(&self.session_id, true);
        Ok(Some(message))
    }

    pub fn transcript(&self) -> Result<Vec<Message>, ChatError> {
        Ok(self.state()?.transcript.clone())
    }

    pub fn is_pending(&self) -> Result<bool, ChatError> {
        Ok(self.state()?.pending)
    }

    pub fn document_context(&self) -> Result<Option<String>, ChatError> {
        Ok(self.state()?.document_context.clone())
    }

    /// Name of the document the current context came from.
    pub fn document_label(&self) -> Result<Option<String>, ChatError> {
        Ok(self.state()?.document_label.clone())
    }

    /// Name of the latest upload while it is still in flight.
    pub fn uploading_label(&self) -> Result<Option<String>, ChatError> {
        Ok(self.state()?.uploading.as_ref().map(|(_, label)| label.clone()))
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, ChatError> {
        let state = self.state()?;
        Ok(SessionSnapshot {
            session_id: self.session_id.clone(),
            transcript: state.transcript.clone(),
            pending: state.pending,
            document_context: state.document_context.clone(),
            document_label: state.document_label.clone(),
            uploading_label: state.uploading.as_ref().map(|(_, label)| label.clone()),
        })
    }

    fn state(&self) -> Result<MutexGuard<'_, SessionState>, ChatError> {
        self.state
            .lock()
            .map_err(|_| ChatError::store("session store lock poisoned"))
    }
}

fn normalize_content(role: Role, content: String) -> Result<String, ChatError> {
    match role {
        Role::User => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                return Err(ChatError::invalid_request("user message must not be empty"));
            }
            Ok(trimmed.to_string())
        }
        Role::Model => Ok(content),
    }
}
