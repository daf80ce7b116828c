pub mod animation;
pub mod app;
pub mod input;
pub mod render;
pub mod row_strip;
pub mod theme;

pub use app::run;
