//! Message aggregate.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;
use super::identifier::define_positive_id;

define_positive_id! {
    /// Storage-assigned message identifier.
    MessageId
}

/// Validation errors for message value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageValidationError {
    /// Content was empty once trimmed.
    #[error("content must not be empty")]
    EmptyContent,
}

/// Non-empty message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageContent(String);

impl MessageContent {
    /// Validate and construct a [`MessageContent`].
    pub fn new(content: impl Into<String>) -> Result<Self, MessageValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(MessageValidationError::EmptyContent);
        }
        Ok(Self(content))
    }
}

impl AsRef<str> for MessageContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MessageContent> for String {
    fn from(value: MessageContent) -> Self {
        value.0
    }
}

impl TryFrom<String> for MessageContent {
    type Error = MessageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored message. Holds only the owning user's key, never the user itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub content: MessageContent,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub content: MessageContent,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", true)]
    #[case(" \n", false)]
    fn content_rejects_blank(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(MessageContent::new(raw).is_ok(), ok);
    }

    #[rstest]
    fn message_serialises_user_id_in_camel_case() {
        let now = Utc::now();
        let message = Message {
            id: MessageId::new(3).expect("id"),
            content: MessageContent::new("hello").expect("content"),
            user_id: UserId::new(9).expect("user id"),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&message).expect("serialise message");
        assert_eq!(value.get("userId").and_then(serde_json::Value::as_i64), Some(9));
    }
}
