pub mod coordinator;
pub mod replay;
pub mod swipe_list;
pub mod task_ops;
pub mod tracker;

pub use coordinator::{OpenRowRegistry, RevealCoordinator};
pub use swipe_list::SwipeList;
pub use task_ops::{TaskError, TaskList};
pub use tracker::GestureTracker;
