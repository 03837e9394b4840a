//! # Chat Messages
//!
//! File: cli/src/conversation/message.rs
//! Author: Christi Mahu
//!
//! A message is immutable once the store has created it: fields are private
//! and only exposed through accessors. `Serialize` is derived so messages can
//! be handed straight to the Tera templates in `core::templating`.

use crate::assistant::{Level, Sections};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Identifier assigned by the owning [`ConversationStore`](super::ConversationStore).
pub type MessageId = u64;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Bot,
}

/// A single entry in the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    timestamp: DateTime<Local>,
    level: Option<Level>,
    sections: Option<Sections>,
}

impl Message {
    pub(super) fn new(
        id: MessageId,
        role: Role,
        content: String,
        level: Option<Level>,
        sections: Option<Sections>,
    ) -> Self {
        Self {
            id,
            role,
            content,
            timestamp: Local::now(),
            level,
            sections,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Level the message was written at. The welcome message has none.
    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn sections(&self) -> Option<&Sections> {
        self.sections.as_ref()
    }
}
