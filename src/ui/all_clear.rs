use crate::ui::layout::create_centered_area;
use crate::ui::styles::{accent_style, icon_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Inbox tray with a check mark
const INBOX_CHECK_ICON: [&str; 5] = [
    "┌─────────────┐",
    "│      ✓      │",
    "│             │",
    "├───┐     ┌───┤",
    "└───┴─────┴───┘",
];

/// Render the empty-inbox screen
pub fn render_all_clear(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = INBOX_CHECK_ICON
        .iter()
        .map(|row| Line::from(Span::styled(*row, icon_style())))
        .collect();

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("All clear", title_style())));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[a]", accent_style()),
        Span::raw(" Add Task"),
    ]));

    let height = lines.len() as u16;
    let centered = create_centered_area(area, height);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, centered);
}
