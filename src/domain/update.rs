use super::enums::{Action, Status};
use super::state::State;

/// Transition function: compute the next state from the current one.
///
/// Pure. Persistence is the caller's job. An action whose precondition does
/// not hold returns the state untouched, status included.
pub fn update(state: State, action: Action) -> State {
    let State { status, mut tasks } = state;

    match action {
        Action::AddTask(task) => {
            if task.title.trim().is_empty() || !tasks.push(task) {
                return State { status, tasks };
            }
            State {
                status: Status::TaskListShown,
                tasks,
            }
        }

        Action::UpdateTask(task) => {
            tasks.replace(task);
            State { status, tasks }
        }

        Action::StartTaskCreation => State {
            status: Status::derive(tasks.is_empty(), true),
            tasks,
        },

        Action::CancelTaskCreation => State {
            status: Status::derive(tasks.is_empty(), false),
            tasks,
        },

        Action::DeleteTask(id) => {
            if tasks.remove(&id).is_none() {
                return State { status, tasks };
            }
            State {
                status: Status::derive(tasks.is_empty(), false),
                tasks,
            }
        }
    }
}
