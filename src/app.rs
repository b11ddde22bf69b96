use crate::domain::{update, Action, State, Task, View};
use crate::persistence::Storage;

/// The store: owns the inbox state and the storage it is mirrored into,
/// plus presentation-only state (form draft, selection).
pub struct AppState {
    state: State,
    storage: Box<dyn Storage>,
    /// Text typed into the creation form
    pub draft: String,
    /// Cursor position in the task list (display order)
    pub selected_index: usize,
    /// Last persistence failure, shown in the footer until the next good save
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let state = storage.load();
        Self {
            state,
            storage,
            draft: String::new(),
            selected_index: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn view(&self) -> View {
        View::for_status(self.state.status)
    }

    /// Run one transition, then persist if anything changed
    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let next = update(self.state.clone(), action);

        if next == self.state {
            tracing::debug!(action = name, "action had no effect");
            return;
        }

        tracing::debug!(action = name, from = ?self.state.status, to = ?next.status, "dispatch");
        self.state = next;
        self.clamp_selection();
        self.persist();
    }

    fn persist(&mut self) {
        match self.storage.save(&self.state) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(error = %message, "failed to save inbox");
                self.last_error = Some(format!("Could not save: {}", message));
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.state.tasks.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Open the creation form with an empty draft
    pub fn start_creation(&mut self) {
        self.draft.clear();
        self.dispatch(Action::StartTaskCreation);
    }

    /// Close the creation form, discarding the draft
    pub fn cancel_creation(&mut self) {
        self.draft.clear();
        self.dispatch(Action::CancelTaskCreation);
    }

    pub fn form_add_char(&mut self, c: char) {
        if self.state.status.form_open() {
            self.draft.push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if self.state.status.form_open() {
            self.draft.pop();
        }
    }

    /// Submit is disabled while the draft is blank
    pub fn can_submit(&self) -> bool {
        self.state.status.form_open() && !self.draft.trim().is_empty()
    }

    /// Create a task from the draft. Returns false when submit is disabled.
    pub fn submit_form(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let title = std::mem::take(&mut self.draft).trim().to_string();
        self.dispatch(Action::AddTask(Task::new(title)));
        self.selected_index = self.state.tasks.len().saturating_sub(1);
        true
    }

    /// Add a task without going through the form (CLI `add`)
    pub fn add_task(&mut self, title: &str) -> bool {
        let before = self.state.tasks.len();
        self.dispatch(Action::AddTask(Task::new(title.trim())));
        self.state.tasks.len() > before
    }

    /// Currently highlighted task, if the list is on screen
    pub fn selected_task(&self) -> Option<&Task> {
        if !self.view().shows_list() {
            return None;
        }
        self.state.tasks.at(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.state.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Flip `done` on the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let toggled = task.toggled();
            self.dispatch(Action::UpdateTask(toggled));
        }
    }

    /// Delete the selected task. Only done tasks can be deleted.
    pub fn delete_selected(&mut self) -> bool {
        let id = match self.selected_task() {
            Some(task) if task.done => task.id.clone(),
            _ => return false,
        };
        self.dispatch(Action::DeleteTask(id));
        true
    }
}
