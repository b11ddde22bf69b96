pub mod enums;
pub mod state;
pub mod task;
pub mod update;
pub mod views;

pub use enums::{Action, Status};
pub use state::State;
pub use task::{TableError, Task, TaskTable};
pub use update::update;
pub use views::View;
