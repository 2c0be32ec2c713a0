//! TUI widgets for interactive components.

mod notices;
mod select_list;
mod text_input;

pub use notices::render_notices;
pub use select_list::SelectList;
pub use text_input::TextInput;
