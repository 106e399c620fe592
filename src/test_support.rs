//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::agent::{AgentError, FarmAgent};
use crate::core::state::App;

/// An agent that replays a fixed outcome and records every question it gets.
pub struct ScriptedAgent {
    outcome: Result<String, AgentError>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedAgent {
    pub fn answering(answer: &str) -> Self {
        Self {
            outcome: Ok(answer.to_string()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: AgentError) -> Self {
        Self {
            outcome: Err(error),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Questions received so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl FarmAgent for ScriptedAgent {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn ask(&self, question: &str) -> Result<String, AgentError> {
        self.questions.lock().unwrap().push(question.to_string());
        self.outcome.clone()
    }
}

/// Creates a test App whose agent answers "ok".
pub fn test_app() -> App {
    app_with(ScriptedAgent::answering("ok"))
}

/// Creates a test App backed by the given agent.
pub fn app_with(agent: ScriptedAgent) -> App {
    App::new(Arc::new(agent))
}
