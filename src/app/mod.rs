//! Application state and logic
//!
//! The view state, its projection, and the reducer that turns events
//! into state changes and commands. Nothing here performs I/O.

pub mod cli;
pub mod events;
mod input;
mod navigation;
mod process_ops;
pub mod projection;
mod sort;
mod state;
mod text_input;
mod view_mode;

pub use cli::Args;
pub use events::{AppEvent, Command};
pub use sort::SortColumn;
pub use state::ViewState;
pub use text_input::TextInput;
pub use view_mode::Mode;
