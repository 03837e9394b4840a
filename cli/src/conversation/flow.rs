//! # Submission Flow
//!
//! File: cli/src/conversation/flow.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives a conversation from student input to bot reply.
//!
//! ## Architecture
//!
//! - `ChatSession` owns the `ConversationStore` and is its only writer.
//! - `submit` appends the student message and spawns a timer task. The task
//!   sleeps for the configured delay, runs the responder, and sends the answer
//!   back over an unbounded channel. It never touches the store.
//! - `Replies` is the receiving end. The owner of the session awaits it and
//!   hands each reply to `accept`, which appends the bot message.
//!
//! Keeping the receiver separate from the session lets a `tokio::select!`
//! loop wait on stdin and on replies at the same time without both branches
//! borrowing the session.
//!
//! Each submission has its own timer and nothing serializes them. With equal
//! delays the replies normally arrive in submission order, but that is not
//! guaranteed; bot messages are appended in arrival order.
//!
//! ## Example
//!
//! ```rust,ignore
//! let (mut session, mut replies) =
//!     ChatSession::new(ConversationStore::with_welcome(), Level::High, Duration::from_secs(1));
//! session.submit("What is gravity?");
//! let answered = session.drain(&mut replies).await;
//! ```
//!

use super::message::{Message, MessageId};
use super::store::ConversationStore;
use crate::assistant::{select_response, Level, Sections};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Content line shown above every generated answer.
pub const BOT_REPLY_CONTENT: &str = "Here's what I found for you:";

/// Where the session is in the submit/answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    /// `pending` questions have been submitted but not yet answered.
    AwaitingResponse { pending: usize },
}

/// An answer computed by a timer task, waiting to be appended.
#[derive(Debug)]
pub struct PendingReply {
    question_id: MessageId,
    level: Level,
    sections: Sections,
}

impl PendingReply {
    /// Id of the student message this answers.
    pub fn question_id(&self) -> MessageId {
        self.question_id
    }
}

/// Receiving end for answers produced by timer tasks.
#[derive(Debug)]
pub struct Replies {
    rx: mpsc::UnboundedReceiver<PendingReply>,
}

impl Replies {
    /// Waits for the next answer. Returns `None` once the session is dropped.
    pub async fn recv(&mut self) -> Option<PendingReply> {
        self.rx.recv().await
    }
}

/// A single student's conversation with the assistant.
#[derive(Debug)]
pub struct ChatSession {
    store: ConversationStore,
    level: Level,
    delay: Duration,
    pending: usize,
    tx: mpsc::UnboundedSender<PendingReply>,
}

impl ChatSession {
    /// Creates a session over `store` starting at `level`, answering after `delay`.
    pub fn new(store: ConversationStore, level: Level, delay: Duration) -> (Self, Replies) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            store,
            level,
            delay,
            pending: 0,
            tx,
        };
        (session, Replies { rx })
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Changes the level for questions submitted from now on.
    pub fn set_level(&mut self, level: Level) {
        info!("Student level changed from {} to {}", self.level, level);
        self.level = level;
    }

    pub fn state(&self) -> FlowState {
        match self.pending {
            0 => FlowState::Idle,
            pending => FlowState::AwaitingResponse { pending },
        }
    }

    /// Submits a question.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the student message
    /// is appended and a timer task is spawned to answer it, so this must be
    /// called from within a tokio runtime.
    pub fn submit(&mut self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }

        let level = self.level;
        let question_id = self.store.append_student(text, level).id();
        self.pending += 1;
        debug!(
            "Submitted question #{} at level {} ({} pending)",
            question_id, level, self.pending
        );

        let question = text.to_string();
        let delay = self.delay;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let sections = select_response(&question, level);
            let reply = PendingReply {
                question_id,
                level,
                sections,
            };
            if tx.send(reply).is_err() {
                debug!("Session closed before question #{} was answered", question_id);
            }
        });

        Some(question_id)
    }

    /// Appends the bot message for a reply received from [`Replies`].
    pub fn accept(&mut self, reply: PendingReply) -> &Message {
        if self.pending == 0 {
            warn!(
                "Received reply for question #{} with nothing pending",
                reply.question_id
            );
        }
        self.pending = self.pending.saturating_sub(1);
        debug!(
            "Answering question #{} ({} still pending)",
            reply.question_id, self.pending
        );
        self.store.append_bot(
            BOT_REPLY_CONTENT,
            Some(reply.level),
            Some(reply.sections),
        )
    }

    /// Waits for every outstanding reply and appends them.
    ///
    /// Returns the ids of the bot messages appended, in arrival order.
    pub async fn drain(&mut self, replies: &mut Replies) -> Vec<MessageId> {
        let mut answered = Vec::with_capacity(self.pending);
        while self.pending > 0 {
            match replies.recv().await {
                Some(reply) => answered.push(self.accept(reply).id()),
                None => break,
            }
        }
        answered
    }
}
