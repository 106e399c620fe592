//! # Application State
//!
//! Conversation state for Farmer Rag. Domain data only; presentation state
//! (scroll offsets, cursor position) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── agent: Arc<dyn FarmAgent>   // transport adapter
//! ├── draft: String               // not-yet-submitted question
//! ├── messages: Vec<Message>      // conversation, insertion order
//! ├── is_loading: bool            // a request is in flight
//! └── error: Option<String>       // last request failure
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::agent::FarmAgent;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One bubble in the conversation. Never edited once pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

pub struct App {
    pub agent: Arc<dyn FarmAgent>,
    pub draft: String,
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl App {
    pub fn new(agent: Arc<dyn FarmAgent>) -> Self {
        Self {
            agent,
            draft: String::new(),
            messages: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}
