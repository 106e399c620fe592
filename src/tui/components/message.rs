use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::state::{Message, Sender};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

pub const BOT_PREFIX: &str = "🧑‍🌾: ";
pub const SEARCHING_TEXT: &str = "🕓 Searching your farm data…";
pub const ERROR_PREFIX: &str = "❗ ";

/// One bubble in the conversation view.
///
/// Besides the conversation messages themselves, the list shows two
/// transient bubbles that are never part of the message history: the
/// "searching" indicator while a request is in flight and the error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bubble<'a> {
    Message(&'a Message),
    Searching,
    Error(&'a str),
}

impl<'a> Bubble<'a> {
    /// Text shown inside the bubble.
    pub fn content(&self) -> String {
        match self {
            Bubble::Message(m) => match m.sender {
                Sender::User => m.text.clone(),
                Sender::Bot => format!("{BOT_PREFIX}{}", m.text),
            },
            Bubble::Searching => SEARCHING_TEXT.to_string(),
            Bubble::Error(e) => format!("{ERROR_PREFIX}{e}"),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Bubble::Message(m) => match m.sender {
                Sender::User => "you",
                Sender::Bot => "farmer",
            },
            Bubble::Searching => "",
            Bubble::Error(_) => "error",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Bubble::Message(m) => match m.sender {
                Sender::User => Style::default().fg(Color::Green),
                Sender::Bot => Style::default().fg(Color::Blue),
            },
            Bubble::Searching => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            Bubble::Error(_) => Style::default().fg(Color::Red),
        }
    }

    /// Calculate the height required for this bubble given a width.
    ///
    /// Uses `textwrap` with options matching Ratatui's `Paragraph` wrapping,
    /// so the list can size its scroll view before drawing anything.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding
            return 1;
        }

        let content = self.content();
        let content = content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        // A scroll canvas is at most u16::MAX rows
        u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }
}

impl<'a> Widget for Bubble<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let border_style = match self {
            // Transient bubbles keep a full-strength border
            Bubble::Message(_) => style.add_modifier(Modifier::DIM),
            Bubble::Searching | Bubble::Error(_) => style,
        };

        let block = Block::bordered()
            .title(self.title())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let content = self.content();
        Paragraph::new(content.trim())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(bubble: Bubble, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(bubble, f.area()))
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
    fn bot_content_gets_farmer_prefix() {
        let msg = Message::bot("Carrots earned $500 profit.");
        assert_eq!(
            Bubble::Message(&msg).content(),
            "🧑‍🌾: Carrots earned $500 profit."
        );
    }

    #[test]
    fn user_content_is_verbatim() {
        let msg = Message::user("How did carrots do?");
        assert_eq!(Bubble::Message(&msg).content(), "How did carrots do?");
    }

    #[test]
    fn error_content_gets_marker() {
        assert_eq!(Bubble::Error("Network Error").content(), "❗ Network Error");
    }

    #[test]
    fn calculate_height_single_line_fits() {
        let msg = Message::user("Hello");
        assert_eq!(
            Bubble::Message(&msg).calculate_height(80),
            1 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let msg = Message::user("Hello world");
        // width 9 → content_width 5: "Hello" | "world"
        assert_eq!(
            Bubble::Message(&msg).calculate_height(9),
            2 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_empty_content_returns_border_height() {
        let msg = Message::user("");
        assert_eq!(Bubble::Message(&msg).calculate_height(80), VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_clamps_very_long_messages() {
        let text = "a\n".repeat(70_000);
        let msg = Message::bot(&text);
        assert_eq!(Bubble::Message(&msg).calculate_height(80), u16::MAX);
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        assert_eq!(Bubble::Searching.calculate_height(0), 1);
    }

    #[test]
    fn styles_distinguish_senders() {
        let user = Message::user("a");
        let bot = Message::bot("b");
        assert_eq!(Bubble::Message(&user).style().fg, Some(Color::Green));
        assert_eq!(Bubble::Message(&bot).style().fg, Some(Color::Blue));
        assert_eq!(Bubble::Error("x").style().fg, Some(Color::Red));
    }

    #[test]
    fn render_shows_title_and_text() {
        let msg = Message::user("Did we grow cabbage?");
        let text = rendered_text(Bubble::Message(&msg), 40, 3);
        assert!(text.contains("you"));
        assert!(text.contains("Did we grow cabbage?"));
    }
}
