use serde::{Deserialize, Serialize};

use super::enums::Status;
use super::task::{TableError, TaskTable};

/// Whole application state, persisted as one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub status: Status,
    pub tasks: TaskTable,
}

impl State {
    /// Validate a freshly loaded state.
    ///
    /// A broken collection is an error. A status that disagrees with the
    /// collection is re-derived, keeping whether the form was open.
    pub fn validated(self) -> Result<Self, TableError> {
        self.tasks.check()?;
        let is_empty = self.tasks.is_empty();
        if self.status.is_consistent_with(is_empty) {
            return Ok(self);
        }

        let repaired = Status::derive(is_empty, self.status.form_open());
        tracing::warn!(
            from = ?self.status,
            to = ?repaired,
            "repaired status inconsistent with task collection"
        );
        Ok(Self {
            status: repaired,
            tasks: self.tasks,
        })
    }
}
