//! Small convenience constructors for common types.

use crate::{Content, Role};

pub fn user_content(text: impl Into<String>) -> Content {
    Content::new(Role::User, text)
}

pub fn model_content(text: impl Into<String>) -> Content {
    Content::new(Role::Model, text)
}

pub fn parse_role(value: &str) -> Option<Role> {
    match value.trim().to_ascii_lowercase().as_str() {
        "user" => Some(Role::User),
        "model" | "assistant" => Some(Role::Model),
        _ => None,
    }
}
