//! Conversation log and message model

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Agent,
}

/// Message payload.
///
/// `ResearchPanel` marks the entry where the host should render the research
/// workflow panel instead of text. The prototype signalled this with a magic
/// string; here it is a proper variant so no caller ever compares sentinels.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text(String),
    ResearchPanel,
}

impl MessageBody {
    /// Literal text of the message, if it has any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageBody::Text(text) => Some(text),
            MessageBody::ResearchPanel => None,
        }
    }
}

/// A single conversation entry. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Unique per message; used only for stable correlation.
    pub id: Uuid,
    pub author_id: String,
    /// Display name of the producer.
    pub author_label: String,
    pub origin: Origin,
    pub body: MessageBody,
    /// Attachment names, possibly empty, never optional.
    pub attachments: Vec<String>,
    pub created_at: DateTime<Local>,
}

impl Message {
    /// Build a user-authored text message.
    pub fn user(
        author_id: impl Into<String>,
        author_label: impl Into<String>,
        text: impl Into<String>,
        attachments: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: author_id.into(),
            author_label: author_label.into(),
            origin: Origin::User,
            body: MessageBody::Text(text.into()),
            attachments,
            created_at: Local::now(),
        }
    }

    /// Build an agent-authored message with the given body.
    pub fn agent(
        author_id: impl Into<String>,
        author_label: impl Into<String>,
        body: MessageBody,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: author_id.into(),
            author_label: author_label.into(),
            origin: Origin::Agent,
            body,
            attachments: Vec::new(),
            created_at: Local::now(),
        }
    }
}

/// Append-only conversation log.
///
/// Entries are never mutated or removed, and all appends happen from one
/// logical thread of control, so insertion order is also chronological order.
#[derive(Debug, Default)]
pub struct ConversationLog {
    entries: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.entries.get(index)
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
