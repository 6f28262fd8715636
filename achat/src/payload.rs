//! Request payload assembly from session state.
//!
//! ```rust
//! use achat::{DEFAULT_CONTEXT_LABEL, build_contents};
//!
//! let contents = build_contents(&[], Some("page one\n"), DEFAULT_CONTEXT_LABEL);
//! assert_eq!(contents.len(), 1);
//! assert_eq!(contents[0].text, "Context PDF:\npage one\n");
//! ```

use aprovider::Content;

use crate::Message;

/// Maps the transcript to request contents in order and, when a non-empty
/// document context is present, appends it as a trailing user entry.
pub fn build_contents(
    transcript: &[Message],
    document_context: Option<&str>,
    context_label: &str,
) -> Vec<Content> {
    let mut contents = transcript.iter().map(Content::from).collect::<Vec<_>>();

    if let Some(context) = document_context
        && !context.is_empty()
    {
        contents.push(Content::user(format!("{context_label}\n{context}")));
    }

    contents
}
