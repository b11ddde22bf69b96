pub mod all_clear;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::View;
use all_clear::render_all_clear;
use input_form::render_input_form;
use keybindings::{render_header, render_keybindings};
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the view selected by the current status
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let view = app.view();
    let layout = create_layout(size, view);

    render_header(f, layout.header_area);
    render_keybindings(f, app, layout.keybindings_area);

    if view == View::AllClear {
        render_all_clear(f, layout.body_area);
    }

    if let Some(list_area) = layout.list_area {
        render_list_pane(f, app, list_area);
    }

    if let Some(form_area) = layout.form_area {
        render_input_form(f, app, form_area);
    }
}
