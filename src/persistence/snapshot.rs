use crate::domain::{State, TableError};
use crate::persistence::files::{atomic_write, backup_file};
use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Why a stored snapshot could not be used
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot is not a valid inbox state: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("snapshot breaks the task collection: {0}")]
    Invalid(#[from] TableError),
}

/// Load and validate the snapshot at `path`. `Ok(None)` when there is none.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<Option<State>, LoadError> {
    let content = match fs::read_to_string(path.as_ref()) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let state: State = serde_json::from_str(&content)?;
    Ok(Some(state.validated()?))
}

/// Load the snapshot, falling back to the empty state on any failure.
///
/// An unusable file is copied aside before it can be overwritten.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> State {
    let path = path.as_ref();

    match load_state(path) {
        Ok(Some(state)) => {
            tracing::info!(tasks = state.tasks.len(), status = ?state.status, "loaded snapshot");
            state
        }
        Ok(None) => {
            tracing::info!(path = %path.display(), "no snapshot yet, starting empty");
            State::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "unusable snapshot, starting empty");
            match backup_file(path) {
                Ok(backup) => tracing::warn!(backup = %backup.display(), "kept unusable snapshot"),
                Err(err) => tracing::warn!(error = %err, "could not back up unusable snapshot"),
            }
            State::default()
        }
    }
}

/// Write the snapshot atomically
pub fn save_state<P: AsRef<Path>>(path: P, state: &State) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    atomic_write(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{update, Action, Status, Task};
    use crate::persistence::files::state_file;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn backups_in(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".corrupt-"))
            .count()
    }

    #[test]
    fn test_missing_snapshot() {
        let temp_dir = tempdir().unwrap();
        let path = state_file(temp_dir.path());

        assert!(load_state(&path).unwrap().is_none());
        assert_eq!(load_or_default(&path), State::default());
        assert_eq!(backups_in(temp_dir.path()), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let path = state_file(temp_dir.path());

        let state = update(State::default(), Action::AddTask(Task::new("Buy milk")));
        let state = update(state, Action::StartTaskCreation);
        save_state(&path, &state).unwrap();

        let loaded = load_state(&path).unwrap().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.status, Status::NewTaskPrompt);
    }

    #[test]
    fn test_snapshot_layout() {
        let temp_dir = tempdir().unwrap();
        let path = state_file(temp_dir.path());

        let task = Task {
            id: "a".to_string(),
            title: "Buy milk".to_string(),
            done: false,
        };
        let state = update(State::default(), Action::AddTask(task));
        save_state(&path, &state).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "status": 3,
                "tasks": {
                    "byId": { "a": { "id": "a", "title": "Buy milk", "done": false } },
                    "allIds": ["a"]
                }
            })
        );
    }

    #[test]
    fn test_corrupt_json_falls_back_and_backs_up() {
        let temp_dir = tempdir().unwrap();
        let path = state_file(temp_dir.path());
        fs::write(&path, "{\"status\": 3, \"tasks\": ").unwrap();

        assert!(matches!(load_state(&path), Err(LoadError::Parse(_))));
        assert_eq!(load_or_default(&path), State::default());
        assert_eq!(backups_in(temp_dir.path()), 1);
    }

    #[test]
    fn test_unknown_status_tag_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = state_file(temp_dir.path());
        fs::write(&path, r#"{"status":9,"tasks":{"byId":{},"allIds":[]}}"#).unwrap();

        assert!(matches!(load_state(&path), Err(LoadError::Parse(_))));
        assert_eq!(load_or_default(&path), State::default());
    }

    #[test]
    fn test_broken_table_falls_back() {
        let temp_dir = tempdir().unwrap();
        let path = state_file(temp_dir.path());
        fs::write(&path, r#"{"status":3,"tasks":{"byId":{},"allIds":["a"]}}"#).unwrap();

        assert!(matches!(
            load_state(&path),
            Err(LoadError::Invalid(TableError::DanglingId(_)))
        ));
        assert_eq!(load_or_default(&path), State::default());
        assert_eq!(backups_in(temp_dir.path()), 1);
    }

    #[test]
    fn test_inconsistent_status_is_repaired_not_dropped() {
        let temp_dir = tempdir().unwrap();
        let path = state_file(temp_dir.path());
        fs::write(
            &path,
            r#"{"status":0,"tasks":{"byId":{"a":{"id":"a","title":"Buy milk","done":true}},"allIds":["a"]}}"#,
        )
        .unwrap();

        let state = load_or_default(&path);
        assert_eq!(state.status, Status::TaskListShown);
        assert!(state.tasks.get("a").unwrap().done);
        assert_eq!(backups_in(temp_dir.path()), 0);
    }
}
