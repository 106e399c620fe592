//! # TUI Components
//!
//! Every component either renders from props alone (`TitleBar`, `Bubble`)
//! or keeps presentation-only state and turns key presses into its own
//! events (`QuestionForm`, `MessageListState`). None of them touch the
//! conversation state; the event loop routes their events to `update()`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status line)
//! ├── message.rs        (Single bubble renderer)
//! ├── message_list.rs   (Scrollable conversation + banners)
//! └── question_form.rs  (Draft editor with action hints)
//! ```

pub mod message;
pub mod message_list;
pub mod question_form;
pub mod title_bar;

pub use message::Bubble;
pub use message_list::{MessageList, MessageListState};
pub use question_form::{FormEvent, QuestionForm};
pub use title_bar::TitleBar;
