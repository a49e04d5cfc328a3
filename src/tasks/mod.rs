//! Task and project model.

mod store;
pub mod types;

#[cfg(test)]
pub use store::MockTaskStore;
pub use store::TaskStore;
pub use types::{NewTask, Project, Status, Task};
