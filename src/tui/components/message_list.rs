//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent scroll state) and the
//! conversation props `(messages, is_loading, error)`. Which bubbles appear
//! is decided by [`bubbles`], a pure function of those props.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Bubble;
use crate::tui::event::TuiEvent;

/// Bubbles to draw, in order: every message, then the searching indicator
/// while loading, then the error banner if one is set.
pub fn bubbles<'a>(messages: &'a [Message], is_loading: bool, error: Option<&'a str>) -> Vec<Bubble<'a>> {
    let mut out: Vec<Bubble<'a>> = messages.iter().map(Bubble::Message).collect();
    if is_loading {
        out.push(Bubble::Searching);
    }
    if let Some(e) = error {
        out.push(Bubble::Error(e));
    }
    out
}

/// Sum of bubble heights, saturating at the largest canvas a scroll view
/// can hold.
fn total_height(heights: &[u16]) -> u16 {
    heights.iter().fold(0u16, |acc, &h| acc.saturating_add(h))
}

/// Scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Bubble heights from the last render
    pub heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            heights: Vec::new(),
            viewport_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        total_height(&self.heights).saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub is_loading: bool,
    pub error: Option<&'a str>,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        is_loading: bool,
        error: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            messages,
            is_loading,
            error,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let items = bubbles(self.messages, self.is_loading, self.error);

        self.state.heights = items
            .iter()
            .map(|b| b.calculate_height(content_width))
            .collect();
        let canvas_height = total_height(&self.state.heights);

        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (bubble, &height) in items.into_iter().zip(self.state.heights.iter()) {
            // Bubbles past the clamped canvas have nowhere to go
            if y_offset >= canvas_height {
                break;
            }
            let height = height.min(canvas_height - y_offset);
            scroll_view.render_widget(bubble, Rect::new(0, y_offset, content_width, height));
            y_offset = y_offset.saturating_add(height);
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Implemented on `MessageListState` because `MessageList` is rebuilt every
/// frame and cannot hold the scroll position.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(
        state: &mut MessageListState,
        messages: &[Message],
        is_loading: bool,
        error: Option<&str>,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                MessageList::new(state, messages, is_loading, error).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn bubbles_follow_message_order() {
        let messages = vec![Message::user("q"), Message::bot("a")];
        let out = bubbles(&messages, false, None);
        assert_eq!(
            out,
            vec![Bubble::Message(&messages[0]), Bubble::Message(&messages[1])]
        );
    }

    #[test]
    fn loading_appends_searching_indicator() {
        let messages = vec![Message::user("How did carrots do?")];
        let out = bubbles(&messages, true, None);
        assert_eq!(out.last(), Some(&Bubble::Searching));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn error_banner_comes_last() {
        let messages = vec![Message::user("Did we grow cabbage?")];
        let out = bubbles(&messages, true, Some("Network Error"));
        assert_eq!(
            out,
            vec![
                Bubble::Message(&messages[0]),
                Bubble::Searching,
                Bubble::Error("Network Error"),
            ]
        );
    }

    #[test]
    fn empty_conversation_has_no_bubbles() {
        assert!(bubbles(&[], false, None).is_empty());
    }

    #[test]
    fn render_shows_messages_and_banners() {
        let mut state = MessageListState::new();
        let messages = vec![Message::user("Did we grow cabbage?")];
        let text = render_to_text(&mut state, &messages, true, Some("Network Error"));

        assert!(text.contains("Did we grow cabbage?"));
        assert!(text.contains("Searching your farm data"));
        assert!(text.contains("Network Error"));
        assert_eq!(state.heights.len(), 3);
    }

    #[test]
    fn total_height_saturates() {
        assert_eq!(total_height(&[3, 4]), 7);
        assert_eq!(total_height(&[30_000, 30_000, 30_000]), u16::MAX);
    }

    #[test]
    fn very_tall_conversation_renders_without_overflow() {
        // Width 6 leaves one content column, so each line is one row and the
        // canvas stays narrow while its height passes u16::MAX.
        let answer = "x\n".repeat(25_000);
        let messages = vec![
            Message::bot(&answer),
            Message::bot(&answer),
            Message::bot(&answer),
        ];
        let mut state = MessageListState::new();
        let mut terminal = Terminal::new(TestBackend::new(6, 10)).unwrap();
        terminal
            .draw(|f| {
                MessageList::new(&mut state, &messages, false, None).render(f, f.area());
            })
            .unwrap();

        assert_eq!(state.heights.len(), 3);
        assert!(state.heights.iter().all(|&h| h > 25_000));
        assert_eq!(state.max_offset(), u16::MAX - 10);
    }

    #[test]
    fn scroll_up_detaches_and_scroll_down_repins() {
        let mut state = MessageListState::new();
        state.heights = vec![3; 10];
        state.viewport_height = 10;

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);

        state.scroll_state.set_offset(Position { x: 0, y: 30 });
        state.handle_event(&TuiEvent::ScrollDown);
        assert!(state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, 20);
    }

    #[test]
    fn clamp_scroll_limits_offset() {
        let mut state = MessageListState::new();
        state.heights = vec![3, 3];
        state.viewport_height = 4;
        state.scroll_state.set_offset(Position { x: 0, y: 50 });

        state.clamp_scroll();
        assert_eq!(state.scroll_state.offset().y, 2);
    }
}
