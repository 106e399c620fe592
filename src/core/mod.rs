//! # Core Application Logic
//!
//! Farmer Rag's conversation controller.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (conversation) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   Agent    │
//!          │  Adapter   │                │ (HTTP call)│
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and `Message` type
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`turn`]: Awaiting the agent and feeding the result back
//! - [`samples`]: Built-in example questions
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod samples;
pub mod state;
pub mod turn;
