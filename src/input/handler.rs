use crate::app::AppState;
use crate::domain::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key press. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.view() {
        View::AllClear => handle_all_clear(app, key),
        View::CreationForm | View::ListWithForm => handle_form(app, key),
        View::ListWithAddButton => handle_list(app, key),
    }
}

/// Keys on the empty "all clear" screen
fn handle_all_clear(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Enter => {
            app.start_creation();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Keys while browsing the task list
fn handle_list(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            false
        }

        // Mark done / undone
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
            false
        }

        // Delete (done tasks only)
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            false
        }

        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_creation();
            false
        }

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,

        _ => false,
    }
}

/// Keys while the creation form is open. Every printable key goes to the draft.
fn handle_form(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Esc => app.cancel_creation(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.form_add_char(c),

        // In the combined view the list stays navigable
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        _ => {}
    }
    false
}
