use crate::app::AppState;
use crate::domain::View;
use crate::ui::styles::{error_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn hints_for(view: View) -> &'static str {
    match view {
        View::AllClear => " q quit   a add task",
        View::CreationForm => " Ctrl+C quit   Enter add   Esc cancel",
        View::ListWithForm => " Ctrl+C quit   Enter add   Esc cancel   ↑/↓ select",
        View::ListWithAddButton => " q quit   a add   ↑/↓ select   Space done   d delete",
    }
}

/// Render the keybindings hint bar, or the last save error
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match &app.last_error {
        Some(error) => Line::from(Span::styled(format!(" {}", error), error_style())),
        None => Line::from(Span::styled(hints_for(app.view()), hint_style())),
    };

    f.render_widget(Paragraph::new(line), area);
}

/// Render the "Inbox" header row
pub fn render_header(f: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(" Inbox", title_style()));
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_match_view() {
        assert!(hints_for(View::AllClear).contains("add task"));
        assert!(hints_for(View::CreationForm).contains("Esc cancel"));
        assert!(hints_for(View::ListWithForm).contains("select"));
        assert!(hints_for(View::ListWithAddButton).contains("d delete"));
    }

    #[test]
    fn test_hints_fit_narrow_terminal_with_quit_first() {
        for view in [
            View::AllClear,
            View::CreationForm,
            View::ListWithForm,
            View::ListWithAddButton,
        ] {
            let hints = hints_for(view);
            assert!(hints.chars().count() <= 60, "{:?} hints too wide", view);
            assert!(hints.trim_start().split("   ").next().unwrap().ends_with("quit"));
        }
    }
}
