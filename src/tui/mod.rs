//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Draws only when something changed: a terminal event arrived or a
//! background task reported back. Idle polls block for up to 250ms.
//!
//! The farm agent call runs in a spawned tokio task that sends exactly one
//! `Action` back over a channel. Only this loop calls `update()`, so the
//! conversation state has a single writer.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::agent::{FarmAgent, HttpFarmAgent};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::samples;
use crate::core::state::App;
use crate::core::turn;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, MessageListState, QuestionForm};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the conversation)
pub struct TuiState {
    pub message_list: MessageListState,
    pub form: QuestionForm,
    /// Shown in the title bar
    pub endpoint: String,
}

impl TuiState {
    pub fn new(endpoint: String) -> Self {
        Self {
            message_list: MessageListState::new(),
            form: QuestionForm::new(),
            endpoint,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Runs its hook when dropped, so every exit path out of `run` (including
/// `?` on a failed draw) puts the terminal back.
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Form events map onto controller actions. A generated sample goes through
/// `QuestionChanged`, exactly like typed text.
fn form_action(event: FormEvent) -> Action {
    match event {
        FormEvent::Changed(text) => Action::QuestionChanged(text),
        FormEvent::GenerateSample => {
            Action::QuestionChanged(samples::random_question().to_string())
        }
        FormEvent::Submit => Action::Submit,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let agent: Arc<dyn FarmAgent> = Arc::new(HttpFarmAgent::new(config.endpoint.clone()));
    let mut app = App::new(agent);
    let mut tui = TuiState::new(config.endpoint);

    let mut terminal = ratatui::init();
    // Declared before the mode guard so it drops last
    let _restore_guard = RestoreOnDrop {
        restore: ratatui::restore,
    };
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync form props with App state
        tui.form.sync(&app.draft, app.is_loading);

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.message_list.handle_event(&event);
                }
                _ => {
                    let Some(form_event) = tui.form.handle_event(&event) else {
                        continue;
                    };
                    let action = form_action(form_event);
                    debug!("Form action: {:?}", action);
                    if let Effect::Ask(question) = update(&mut app, action) {
                        // A new turn pins the view back to the latest bubble
                        tui.message_list.stick_to_bottom = true;
                        spawn_request(&app, question, tx.clone());
                    }
                }
            }
            // Keep the form's copy current before the next queued event
            tui.form.sync(&app.draft, app.is_loading);
        }

        if should_quit {
            break;
        }

        // Handle background task actions (agent replies)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    }

    info!("Shutting down ({} messages this session)", app.messages.len());
    Ok(())
}

fn spawn_request(app: &App, question: String, tx: mpsc::Sender<Action>) {
    info!("Spawning farm agent request via '{}'", app.agent.name());
    let agent = app.agent.clone();
    tokio::spawn(async move {
        let action = turn::resolve(agent, question).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver farm agent result: receiver dropped");
        }
    });
}
