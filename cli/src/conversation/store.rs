//! # Conversation Store
//!
//! File: cli/src/conversation/store.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An append-only, insertion-ordered list of messages. The store is the only
//! place messages are created, so ids stay unique and increasing. Messages
//! cannot be edited, removed or looked up by id.
//!

use super::message::{Message, MessageId, Role};
use crate::assistant::topics::{WELCOME_CONTENT, WELCOME_SECTIONS};
use crate::assistant::{Level, Sections};
use tracing::trace;

/// Ordered, append-only message history.
#[derive(Debug)]
pub struct ConversationStore {
    messages: Vec<Message>,
    next_id: MessageId,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store that opens with the assistant's greeting.
    pub fn with_welcome() -> Self {
        let mut store = Self::new();
        store.append_bot(
            WELCOME_CONTENT.to_string(),
            None,
            Some(WELCOME_SECTIONS.to_sections()),
        );
        store
    }

    /// Appends a message written by the student at `level`.
    pub fn append_student(&mut self, content: impl Into<String>, level: Level) -> &Message {
        self.push(Role::Student, content.into(), Some(level), None)
    }

    /// Appends an assistant message.
    pub fn append_bot(
        &mut self,
        content: impl Into<String>,
        level: Option<Level>,
        sections: Option<Sections>,
    ) -> &Message {
        self.push(Role::Bot, content.into(), level, sections)
    }

    /// Every message in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn push(
        &mut self,
        role: Role,
        content: String,
        level: Option<Level>,
        sections: Option<Sections>,
    ) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        trace!("Appending {:?} message #{}", role, id);
        self.messages
            .push(Message::new(id, role, content, level, sections));
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::select_response;

    #[test]
    fn appends_in_order_with_increasing_ids() {
        let mut store = ConversationStore::new();
        store.append_student("first", Level::High);
        store.append_bot("second", Some(Level::High), None);
        store.append_student("third", Level::Middle);

        let ids: Vec<MessageId> = store.messages().iter().map(Message::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let contents: Vec<&str> = store.messages().iter().map(Message::content).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn default_store_also_starts_ids_at_one() {
        let mut store = ConversationStore::default();
        assert_eq!(store.append_student("hi", Level::High).id(), 1);
        assert_eq!(store.append_student("again", Level::High).id(), 2);
    }

    #[test]
    fn student_messages_carry_level() {
        let mut store = ConversationStore::new();
        let msg = store.append_student("What is gravity?", Level::University);
        assert_eq!(msg.role(), Role::Student);
        assert_eq!(msg.level(), Some(Level::University));
        assert!(msg.sections().is_none());
    }

    #[test]
    fn bot_messages_keep_sections() {
        let mut store = ConversationStore::new();
        let sections = select_response("gravity", Level::High);
        let msg = store.append_bot("Here", Some(Level::High), Some(sections.clone()));
        assert_eq!(msg.role(), Role::Bot);
        assert_eq!(msg.sections(), Some(&sections));
    }

    #[test]
    fn welcome_store_has_greeting() {
        let store = ConversationStore::with_welcome();
        assert_eq!(store.len(), 1);
        let greeting = &store.messages()[0];
        assert_eq!(greeting.role(), Role::Bot);
        assert_eq!(greeting.content(), WELCOME_CONTENT);
        assert_eq!(greeting.level(), None);
        let sections = greeting.sections().unwrap();
        assert!(sections.example.is_none());
    }

    #[test]
    fn empty_store() {
        let store = ConversationStore::new();
        assert!(store.is_empty());
        assert!(store.last().is_none());
    }
}
