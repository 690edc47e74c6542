//! Application state and core logic

pub mod screen;
pub mod state;

pub use screen::{InputMode, MenuOption, Screen};
pub use state::App;
