pub mod config;
pub mod gesture;
pub mod row;

pub use config::*;
pub use gesture::*;
pub use row::*;
