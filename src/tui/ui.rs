use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let form_height = tui.form.calculate_height(frame.area().width);
    let [title_area, main_area, form_area] =
        Layout::vertical([Length(1), Min(0), Length(form_height)]).areas(frame.area());

    TitleBar::new(tui.endpoint.clone(), app.is_loading).render(frame, title_area);

    MessageList::new(
        &mut tui.message_list,
        &app.messages,
        app.is_loading,
        app.error.as_deref(),
    )
    .render(frame, main_area);

    tui.form.render(frame, form_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Message;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_empty_page() {
        let app = test_app();
        let mut tui = TuiState::new("http://localhost:5001/api/ask".to_string());
        let text = draw_to_text(&app, &mut tui);

        assert!(text.contains("Farmer Rag"));
        assert!(text.contains("Ask about your farm data..."));
        assert!(text.contains("Generate Sample Question"));
    }

    #[test]
    fn test_draw_conversation_with_error() {
        let mut app = test_app();
        app.messages.push(Message::user("Did we grow cabbage?"));
        app.error = Some("Network Error".to_string());
        let mut tui = TuiState::new("http://localhost:5001/api/ask".to_string());
        tui.form.sync(&app.draft, app.is_loading);

        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Did we grow cabbage?"));
        assert!(text.contains("Network Error"));
        assert!(!text.contains("Searching your farm data"));
    }
}
