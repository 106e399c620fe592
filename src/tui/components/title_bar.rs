//! # TitleBar Component
//!
//! Single-line header: the app title, the agent endpoint, and a status
//! segment while a request is in flight.
//!
//! 1. **Loading**: `"Farmer Rag🥬 | http://localhost:5001/api/ask | Searching…"`
//! 2. **Idle**: `"Farmer Rag🥬 | http://localhost:5001/api/ask"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const TITLE: &str = "Farmer Rag🥬";

/// Top status bar. All fields are props.
pub struct TitleBar {
    pub endpoint: String,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(endpoint: String, is_loading: bool) -> Self {
        Self {
            endpoint,
            is_loading,
        }
    }

    fn text(&self) -> String {
        if self.is_loading {
            format!("{TITLE} | {} | Searching…", self.endpoint)
        } else {
            format!("{TITLE} | {}", self.endpoint)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn idle_shows_title_and_endpoint() {
        let mut title_bar = TitleBar::new("http://farm.local/api/ask".to_string(), false);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Farmer Rag"));
        assert!(text.contains("http://farm.local/api/ask"));
        assert!(!text.contains("Searching"));
    }

    #[test]
    fn loading_adds_status_segment() {
        let title_bar = TitleBar::new("http://farm.local/api/ask".to_string(), true);
        assert!(title_bar.text().ends_with("| Searching…"));
    }
}
