//! # QuestionForm Component
//!
//! Multi-line editor for the draft question plus the two form actions:
//! generate a sample question (Ctrl+G) and send (Enter).
//!
//! The draft itself belongs to the controller. The form keeps a copy as a
//! prop, edits it locally for cursor handling, and reports every edit as
//! `FormEvent::Changed` so the controller stays the single owner.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;
/// Left + right borders
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Maximum visible draft lines before the box scrolls internally
const MAX_VISIBLE_LINES: u16 = 5;
/// The action hint row under the box
const HINT_HEIGHT: u16 = 1;

pub const PLACEHOLDER: &str = "Ask about your farm data...";

/// High-level events emitted by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The draft now reads exactly this
    Changed(String),
    Submit,
    GenerateSample,
}

/// Draft editor with action hints.
///
/// # Props
///
/// - `draft`: the controller's draft question
/// - `is_loading`: dims the Send hint while a request is in flight
pub struct QuestionForm {
    pub draft: String,
    pub is_loading: bool,
    /// Cursor position as byte offset in `draft`
    cursor: usize,
    /// First visible visual line
    scroll_offset: u16,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionForm {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            is_loading: false,
            cursor: 0,
            scroll_offset: 0,
        }
    }

    /// Take the controller's draft. A draft replaced from outside (sample
    /// pick, submission) moves the cursor to its end.
    pub fn sync(&mut self, draft: &str, is_loading: bool) {
        self.is_loading = is_loading;
        if self.draft != draft {
            self.draft = draft.to_string();
            self.cursor = self.draft.len();
        }
    }

    /// Total height including borders and the hint row.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let lines = visual_lines(&self.draft, inner).len() as u16;
        lines.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD + HINT_HEIGHT
    }

    fn edited(&self) -> Option<FormEvent> {
        Some(FormEvent::Changed(self.draft.clone()))
    }

    fn hint_line(&self) -> Line<'static> {
        let key = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let send_style = if self.is_loading {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(" Ctrl+G", key),
            Span::raw(" Generate Sample Question   "),
            Span::styled("Enter", key.patch(send_style)),
            Span::styled(" Send", send_style),
            Span::raw("   "),
            Span::styled("Ctrl+J", key),
            Span::raw(" Newline   "),
            Span::styled("Esc", key),
            Span::raw(" Quit"),
        ])
    }
}

impl Component for QuestionForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [box_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(HINT_HEIGHT)]).areas(area);

        let inner_width = box_area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let visible_rows = box_area.height.saturating_sub(VERTICAL_OVERHEAD);
        let (cursor_row, cursor_col) = cursor_row_col(&self.draft[..self.cursor], inner_width);

        // Keep the cursor row on screen
        let cursor_row = cursor_row as u16;
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if visible_rows > 0 && cursor_row >= self.scroll_offset + visible_rows {
            self.scroll_offset = cursor_row + 1 - visible_rows;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Question");

        let body = if self.draft.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            let lines: Vec<Line> = visual_lines(&self.draft, inner_width)
                .into_iter()
                .skip(self.scroll_offset as usize)
                .take(visible_rows as usize)
                .map(Line::from)
                .collect();
            Paragraph::new(lines).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(body.block(block), box_area);
        frame.render_widget(Paragraph::new(self.hint_line()), hint_area);

        let x = box_area.x + 1 + cursor_col as u16;
        let y = box_area.y + 1 + cursor_row.saturating_sub(self.scroll_offset);
        frame.set_cursor_position((x, y));
    }
}

impl EventHandler for QuestionForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.draft.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.edited()
            }
            TuiEvent::Paste(text) => {
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.draft.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.edited()
            }
            TuiEvent::Backspace => {
                let prev = prev_char_boundary(&self.draft, self.cursor)?;
                self.draft.drain(prev..self.cursor);
                self.cursor = prev;
                self.edited()
            }
            TuiEvent::Delete => {
                let next = next_char_boundary(&self.draft, self.cursor)?;
                self.draft.drain(self.cursor..next);
                self.edited()
            }
            TuiEvent::CursorLeft => {
                if let Some(prev) = prev_char_boundary(&self.draft, self.cursor) {
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorRight => {
                if let Some(next) = next_char_boundary(&self.draft, self.cursor) {
                    self.cursor = next;
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = self.draft[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.draft[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.draft.len());
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submit),
            TuiEvent::GenerateSample => Some(FormEvent::GenerateSample),
            _ => None,
        }
    }
}

/// Hard-wrap `text` into rows of at most `width` characters.
/// Every logical line yields at least one row.
fn visual_lines(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut rows = Vec::new();
    for logical in text.split('\n') {
        let chars: Vec<char> = logical.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Row and column of the cursor given the text before it.
fn cursor_row_col(before: &str, width: usize) -> (usize, usize) {
    if width == 0 {
        return (0, 0);
    }
    let mut row = 0;
    let mut logical = before.split('\n').peekable();
    while let Some(line) = logical.next() {
        let len = line.chars().count();
        if logical.peek().is_some() {
            row += len.max(1).div_ceil(width);
        } else {
            return (row + len / width, len % width);
        }
    }
    (row, 0)
}

fn prev_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}
