use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use uuid::Uuid;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create an open task with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            done: false,
        }
    }

    /// Copy of this task with `done` flipped
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// Violation of the task collection invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("id {0} is listed but has no stored task")]
    DanglingId(String),
    #[error("id {0} is listed more than once")]
    DuplicateId(String),
    #[error("task {0} is stored but not listed")]
    OrphanTask(String),
    #[error("task stored under key {key} has id {id}")]
    KeyMismatch { key: String, id: String },
}

/// Tasks keyed by id, plus the display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTable {
    by_id: BTreeMap<String, Task>,
    all_ids: Vec<String>,
}

impl TaskTable {
    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.by_id.get(id)
    }

    /// Ids in display order
    pub fn ids(&self) -> &[String] {
        &self.all_ids
    }

    /// Tasks in display order
    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.ids().iter().filter_map(|id| self.get(id))
    }

    /// Task at a display position
    pub fn at(&self, index: usize) -> Option<&Task> {
        self.ids().get(index).and_then(|id| self.get(id))
    }

    pub fn done_count(&self) -> usize {
        self.by_id.values().filter(|t| t.done).count()
    }

    /// Append a task. Returns false (and changes nothing) if the id is taken.
    pub fn push(&mut self, task: Task) -> bool {
        if self.contains(&task.id) {
            return false;
        }
        self.all_ids.push(task.id.clone());
        self.by_id.insert(task.id.clone(), task);
        true
    }

    /// Replace a stored task in place. Returns false if the id is unknown.
    pub fn replace(&mut self, task: Task) -> bool {
        match self.by_id.get_mut(&task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Remove a task from both the mapping and the order
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let task = self.by_id.remove(id)?;
        self.all_ids.retain(|listed| listed != id);
        Some(task)
    }

    /// Report the first invariant violation, if any
    pub fn check(&self) -> Result<(), TableError> {
        let mut seen = HashSet::with_capacity(self.all_ids.len());
        for id in &self.all_ids {
            if !seen.insert(id.as_str()) {
                return Err(TableError::DuplicateId(id.clone()));
            }
            if !self.by_id.contains_key(id) {
                return Err(TableError::DanglingId(id.clone()));
            }
        }

        for (key, task) in &self.by_id {
            if key != &task.id {
                return Err(TableError::KeyMismatch {
                    key: key.clone(),
                    id: task.id.clone(),
                });
            }
            if !seen.contains(key.as_str()) {
                return Err(TableError::OrphanTask(key.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            done: false,
        }
    }

    #[test]
    fn test_new_task_has_unique_id() {
        let a = Task::new("Buy milk");
        let b = Task::new("Buy milk");
        assert_ne!(a.id, b.id);
        assert!(!a.done);
    }

    #[test]
    fn test_toggled() {
        let t = task("a", "Buy milk");
        let toggled = t.toggled();
        assert!(toggled.done);
        assert_eq!(toggled.id, t.id);
        assert!(!toggled.toggled().done);
    }

    #[test]
    fn test_push_keeps_order_and_rejects_duplicates() {
        let mut table = TaskTable::default();
        assert!(table.push(task("a", "first")));
        assert!(table.push(task("b", "second")));
        assert!(!table.push(task("a", "again")));

        assert_eq!(table.ids(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.get("a").unwrap().title, "first");
        assert!(table.check().is_ok());
    }

    #[test]
    fn test_replace_unknown_is_rejected() {
        let mut table = TaskTable::default();
        table.push(task("a", "first"));
        assert!(!table.replace(task("zzz", "ghost")));
        assert_eq!(table.len(), 1);
        assert!(table.check().is_ok());
    }

    #[test]
    fn test_remove_clears_mapping_and_order() {
        let mut table = TaskTable::default();
        table.push(task("a", "first"));
        table.push(task("b", "second"));

        let removed = table.remove("a").unwrap();
        assert_eq!(removed.title, "first");
        assert!(!table.contains("a"));
        assert_eq!(table.ids(), &["b".to_string()]);
        assert!(table.remove("a").is_none());
        assert!(table.check().is_ok());
    }

    #[test]
    fn test_iter_and_at_follow_display_order() {
        let mut table = TaskTable::default();
        table.push(task("z", "last alphabetically"));
        table.push(task("a", "first alphabetically"));

        let titles: Vec<&str> = table.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["last alphabetically", "first alphabetically"]);
        assert_eq!(table.at(1).unwrap().id, "a");
        assert!(table.at(2).is_none());
    }

    #[test]
    fn test_check_detects_violations() {
        let dangling: TaskTable =
            serde_json::from_str(r#"{"byId":{},"allIds":["a"]}"#).unwrap();
        assert_eq!(dangling.check(), Err(TableError::DanglingId("a".into())));

        let orphan: TaskTable = serde_json::from_str(
            r#"{"byId":{"a":{"id":"a","title":"x","done":false}},"allIds":[]}"#,
        )
        .unwrap();
        assert_eq!(orphan.check(), Err(TableError::OrphanTask("a".into())));

        let duplicate: TaskTable = serde_json::from_str(
            r#"{"byId":{"a":{"id":"a","title":"x","done":false}},"allIds":["a","a"]}"#,
        )
        .unwrap();
        assert_eq!(duplicate.check(), Err(TableError::DuplicateId("a".into())));

        let mismatch: TaskTable = serde_json::from_str(
            r#"{"byId":{"a":{"id":"b","title":"x","done":false}},"allIds":["a"]}"#,
        )
        .unwrap();
        assert_eq!(
            mismatch.check(),
            Err(TableError::KeyMismatch {
                key: "a".into(),
                id: "b".into()
            })
        );
    }
}
