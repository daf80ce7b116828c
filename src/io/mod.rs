pub mod config_io;
pub mod script;
pub mod task_io;
