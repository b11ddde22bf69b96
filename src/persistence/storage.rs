use crate::domain::State;
use crate::persistence::files::state_file;
use crate::persistence::snapshot::{load_or_default, save_state};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Side-effecting boundary the store persists through after each transition
pub trait Storage {
    /// Initial state; never fails, falls back to the empty state
    fn load(&self) -> State;

    fn save(&mut self, state: &State) -> Result<()>;
}

/// Snapshot kept in `state.json` inside the inbox directory
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: state_file(dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> State {
        load_or_default(&self.path)
    }

    fn save(&mut self, state: &State) -> Result<()> {
        save_state(&self.path, state)
    }
}

/// In-memory storage for tests. Clones share the same save history.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    saved: std::rc::Rc<std::cell::RefCell<Vec<State>>>,
    fail: bool,
}

#[cfg(test)]
impl MemoryStorage {
    /// Storage whose every save fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> usize {
        self.saved.borrow().len()
    }

    pub fn last(&self) -> Option<State> {
        self.saved.borrow().last().cloned()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self) -> State {
        self.last().unwrap_or_default()
    }

    fn save(&mut self, state: &State) -> Result<()> {
        if self.fail {
            anyhow::bail!("disk full");
        }
        self.saved.borrow_mut().push(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{update, Action, Task};
    use tempfile::tempdir;

    #[test]
    fn test_json_storage_round_trip() {
        let temp_dir = tempdir().unwrap();
        let mut storage = JsonFileStorage::in_dir(temp_dir.path());
        assert_eq!(storage.load(), State::default());

        let state = update(State::default(), Action::AddTask(Task::new("Walk dog")));
        storage.save(&state).unwrap();

        let reopened = JsonFileStorage::in_dir(temp_dir.path());
        assert_eq!(reopened.load(), state);
        assert!(reopened.path().ends_with("state.json"));
    }

    #[test]
    fn test_json_storage_save_into_missing_dir_fails() {
        let temp_dir = tempdir().unwrap();
        let mut storage = JsonFileStorage::in_dir(&temp_dir.path().join("gone"));
        assert!(storage.save(&State::default()).is_err());
    }
}
