//! # Actions
//!
//! Everything that can happen in Farmer Rag becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The farm agent answers? That's `Action::AnswerReceived(text)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the draft question verbatim (typing or a sample pick).
    QuestionChanged(String),
    /// Send the current draft.
    Submit,
    /// The agent answered the in-flight question.
    AnswerReceived(String),
    /// The in-flight question failed; carries the failure's message.
    RequestFailed(String),
    Quit,
}

/// I/O requested by `update()`. Executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the farm agent this question (the untrimmed draft).
    Ask(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QuestionChanged(text) => {
            app.draft = text;
            Effect::None
        }
        Action::Submit => {
            // One request in flight at a time
            if app.is_loading {
                debug!("Submit ignored: request already in flight");
                return Effect::None;
            }
            if app.draft.trim().is_empty() {
                debug!("Submit ignored: blank draft");
                return Effect::None;
            }

            app.is_loading = true;
            app.error = None;
            app.messages.push(Message::user(app.draft.trim()));
            let question = std::mem::take(&mut app.draft);

            info!("Question submitted (turn {})", app.messages.len());
            Effect::Ask(question)
        }
        Action::AnswerReceived(text) => {
            app.messages.push(Message::bot(text));
            app.is_loading = false;
            Effect::None
        }
        Action::RequestFailed(message) => {
            warn!("Turn failed: {}", message);
            app.error = Some(message);
            app.is_loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
