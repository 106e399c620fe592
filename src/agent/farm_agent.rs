use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while asking the farm agent.
/// The controller treats every variant the same way: its `Display` text
/// becomes the error banner, so `Network` and `Parse` show the failure
/// message unchanged.
#[derive(Debug, Clone)]
pub enum AgentError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The agent answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body was not JSON or had no `response` field.
    Parse(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Network(msg) => write!(f, "{msg}"),
            AgentError::Api { status, message } => {
                write!(f, "request failed (HTTP {status}): {message}")
            }
            AgentError::Parse(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgentError {}

#[async_trait]
pub trait FarmAgent: Send + Sync {
    /// Returns a short label for logs and the title bar.
    fn name(&self) -> &str;

    /// Sends one question and returns the agent's textual answer.
    async fn ask(&self, question: &str) -> Result<String, AgentError>;
}
