//! HTTP transport for the farm agent.
//!
//! One `POST` per question:
//!
//! ```text
//! → {"question": "How did carrots do?"}
//! ← {"response": "Carrots earned $500 profit."}
//! ```
//!
//! Fields other than `response` are ignored. Failures are logged and handed
//! back unchanged; there is no retry and no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::agent::{AgentError, FarmAgent};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/api/ask";

/// The request body for the ask endpoint
#[derive(Serialize, Debug)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// The response body from the ask endpoint
#[derive(Deserialize, Debug)]
pub struct AskResponse {
    pub response: String,
}

/// Farm agent reached over HTTP
pub struct HttpFarmAgent {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpFarmAgent {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FarmAgent for HttpFarmAgent {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, question: &str) -> Result<String, AgentError> {
        info!(
            "Asking farm agent at {} (question_len={})",
            self.endpoint,
            question.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|e| {
                warn!("Farm agent request failed: {}", e);
                AgentError::Network(e.to_string())
            })?;

        debug!("Farm agent response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Farm agent API error: {} - {}", status, err_body);
            return Err(AgentError::Api {
                status,
                message: err_body,
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read farm agent response body: {}", e);
            AgentError::Network(e.to_string())
        })?;

        let parsed: AskResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Malformed farm agent response: {} (body={})", e, body);
            AgentError::Parse(e.to_string())
        })?;

        info!("Farm agent answered ({} bytes)", parsed.response.len());
        Ok(parsed.response)
    }
}
