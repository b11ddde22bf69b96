use crate::domain::View;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the creation form (border + input + hints)
pub const FORM_HEIGHT: u16 = 5;

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub list_area: Option<Rect>,
    pub form_area: Option<Rect>,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top: "Inbox" header (1 row)
/// - Body: task list and/or creation form, depending on the view
/// - Bottom: keybindings bar (1 row)
pub fn create_layout(area: Rect, view: View) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    let header_area = main_chunks[0];
    let body_area = main_chunks[1];
    let keybindings_area = main_chunks[2];

    let (list_area, form_area) = match (view.shows_list(), view.shows_form()) {
        (false, false) => (None, None),
        (true, false) => (Some(body_area), None),
        (false, true) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
                .split(body_area);
            (None, Some(chunks[0]))
        }
        (true, true) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(FORM_HEIGHT)])
                .split(body_area);
            (Some(chunks[0]), Some(chunks[1]))
        }
    };

    MainLayout {
        header_area,
        body_area,
        list_area,
        form_area,
        keybindings_area,
    }
}

/// Centre a block of `height` rows inside `area`
pub fn create_centered_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(height),
            Constraint::Percentage(35),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
