use super::enums::Status;

/// Which screen to draw. Selected purely from the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Empty inbox: "all clear" with a start-creation affordance
    AllClear,
    /// Creation form only
    CreationForm,
    /// Task list with the creation form below it
    ListWithForm,
    /// Task list with the add affordance
    ListWithAddButton,
}

impl View {
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Empty => Self::AllClear,
            Status::FirstTaskPrompt => Self::CreationForm,
            Status::NewTaskPrompt => Self::ListWithForm,
            Status::TaskListShown => Self::ListWithAddButton,
        }
    }

    pub fn shows_list(&self) -> bool {
        matches!(self, Self::ListWithForm | Self::ListWithAddButton)
    }

    pub fn shows_form(&self) -> bool {
        matches!(self, Self::CreationForm | Self::ListWithForm)
    }
}
