use crate::app::AppState;
use crate::ui::styles::{accent_style, border_style, hint_style, placeholder_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Buy a new laptop";

/// Render the task creation form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Clear, area);

    let mut lines = Vec::new();

    let input_line = if app.draft.is_empty() {
        Line::from(vec![
            Span::raw("> "),
            Span::styled("█", accent_style()), // Cursor
            Span::styled(PLACEHOLDER, placeholder_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::raw(app.draft.as_str()),
            Span::styled("█", accent_style()),
        ])
    };
    lines.push(input_line);
    lines.push(Line::raw(""));

    // Submit is greyed out until there is a title
    let submit_style = if app.can_submit() {
        accent_style()
    } else {
        hint_style()
    };
    lines.push(Line::from(vec![
        Span::styled("[Esc]", title_style()),
        Span::raw(" Cancel    "),
        Span::styled("[Enter] Add task", submit_style),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Create a new task ", title_style())),
    );

    f.render_widget(paragraph, area);
}
