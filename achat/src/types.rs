//! Transcript, snapshot, and exchange outcome types.

use std::fmt::{Display, Formatter};

use acommon::SessionId;
use aprovider::{Content, Role};

/// Model turn appended when a reply carries no usable text.
pub const UNAVAILABLE_PLACEHOLDER: &str = "⚠️ AI response unavailable.";
/// Model turn appended when the completion call itself fails.
pub const FETCH_FAILED_PLACEHOLDER: &str = "⚠️ Failed to fetch response.";
pub const DEFAULT_CONTEXT_LABEL: &str = "Context PDF:";

/// Creation-ordered message identifier, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
}

impl From<&Message> for Content {
    fn from(value: &Message) -> Self {
        Content::new(value.role, value.content.clone())
    }
}

/// Point-in-time copy of a session handed to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub transcript: Vec<Message>,
    pub pending: bool,
    pub document_context: Option<String>,
    pub document_label: Option<String>,
    pub uploading_label: Option<String>,
}

/// Handle for one in-flight document upload.
#[derive(Debug, PartialEq, Eq)]
pub struct UploadTicket {
    pub(crate) id: u64,
    pub(crate) label: String,
}

impl UploadTicket {
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Caller-visible result of one exchange.
///
/// Every failure cause collapses into `Unavailable`; the transcript carries
/// the matching placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Delivered(String),
    Unavailable,
}

impl ExchangeOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivered(_) => "delivered",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Result of attaching a document to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Ingested { page_count: usize, text_len: usize },
    Rejected(adocument::DocumentError),
}

impl DocumentOutcome {
    pub fn is_ingested(&self) -> bool {
        matches!(self, Self::Ingested { .. })
    }
}
