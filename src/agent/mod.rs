pub mod farm_agent;
pub mod http;

pub use farm_agent::{AgentError, FarmAgent};
pub use http::{AskRequest, AskResponse, DEFAULT_ENDPOINT, HttpFarmAgent};
