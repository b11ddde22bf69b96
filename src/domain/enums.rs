use serde::{Deserialize, Serialize};
use std::fmt;

use super::task::Task;

/// Coarse UI mode of the inbox
///
/// Persisted as an integer tag (Empty=0 ... TaskListShown=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Status {
    /// No tasks, no creation form
    #[default]
    Empty,
    /// Creation form open on an empty inbox
    FirstTaskPrompt,
    /// Creation form open below the task list
    NewTaskPrompt,
    /// Task list with the add affordance
    TaskListShown,
}

impl Status {
    /// Compute the status consistent with the collection and the form
    pub fn derive(is_empty: bool, form_open: bool) -> Self {
        match (is_empty, form_open) {
            (true, false) => Self::Empty,
            (true, true) => Self::FirstTaskPrompt,
            (false, true) => Self::NewTaskPrompt,
            (false, false) => Self::TaskListShown,
        }
    }

    /// Whether the creation form is visible in this status
    pub fn form_open(&self) -> bool {
        matches!(self, Self::FirstTaskPrompt | Self::NewTaskPrompt)
    }

    /// Check that this status agrees with the collection's emptiness
    pub fn is_consistent_with(&self, is_empty: bool) -> bool {
        *self == Self::derive(is_empty, self.form_open())
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        match status {
            Status::Empty => 0,
            Status::FirstTaskPrompt => 1,
            Status::NewTaskPrompt => 2,
            Status::TaskListShown => 3,
        }
    }
}

/// Integer tag outside the known status range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus(pub u8);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status tag {}", self.0)
    }
}

impl TryFrom<u8> for Status {
    type Error = UnknownStatus;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Empty),
            1 => Ok(Self::FirstTaskPrompt),
            2 => Ok(Self::NewTaskPrompt),
            3 => Ok(Self::TaskListShown),
            other => Err(UnknownStatus(other)),
        }
    }
}

/// Everything the user can ask the inbox to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask(Task),
    /// Replace a stored task (used to toggle `done`)
    UpdateTask(Task),
    StartTaskCreation,
    CancelTaskCreation,
    DeleteTask(String),
}

impl Action {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTask(_) => "AddTask",
            Self::UpdateTask(_) => "UpdateTask",
            Self::StartTaskCreation => "StartTaskCreation",
            Self::CancelTaskCreation => "CancelTaskCreation",
            Self::DeleteTask(_) => "DeleteTask",
        }
    }
}
