//! # EduBot Conversation
//!
//! File: cli/src/conversation/mod.rs
//! Author: Christi Mahu
//!
//! - `message`: The immutable message record
//! - `store`: The append-only conversation history
//! - `flow`: Submission handling and delayed replies
//!

pub mod flow;
pub mod message;
pub mod store;

pub use flow::{ChatSession, FlowState, Replies};
pub use message::{Message, MessageId, Role};
pub use store::ConversationStore;
