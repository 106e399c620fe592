//! Bridges the pure reducer and the async transport.
//!
//! `resolve` is the single resolution point of a turn: whatever the agent
//! returns becomes exactly one `Action` for `update()`.

use std::sync::Arc;

use log::debug;

use crate::agent::FarmAgent;
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;

/// Ask the agent and convert the outcome into the action that closes the turn.
pub async fn resolve(agent: Arc<dyn FarmAgent>, question: String) -> Action {
    match agent.ask(&question).await {
        Ok(answer) => Action::AnswerReceived(answer),
        Err(e) => Action::RequestFailed(e.to_string()),
    }
}

/// Submit the current draft and drive the turn to completion in place.
///
/// Returns the effect of the submission; `Effect::None` means the draft was
/// rejected and no request was made.
pub async fn run_turn(app: &mut App) -> Effect {
    match update(app, Action::Submit) {
        Effect::Ask(question) => {
            debug!("Running turn with agent '{}'", app.agent.name());
            let action = resolve(app.agent.clone(), question.clone()).await;
            update(app, action);
            Effect::Ask(question)
        }
        other => other,
    }
}
