//! User interface rendering
//!
//! Layout is pure: the view state becomes a fixed-size [`Grid`] of
//! styled cells, and only the painter talks to the terminal.
//! - `render` - Frame assembly and painting
//! - `components` - Header, separators, column header, filter and status bars, kill box
//! - `process_list` - Scrollable process rows
//! - `help` - Help screen
//! - `grid` - Character grid
//! - `theme` - Styles and colors
//! - `utils` - Truncation, padding and column widths

mod components;
mod grid;
mod help;
mod process_list;
mod render;
mod theme;
mod utils;

pub use render::{paint, print_frame, render_frame, RenderOptions};
