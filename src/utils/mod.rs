pub mod environment;
pub mod terminal;

pub use environment::{HISTORY_FILE_NAME, format_path_with_tilde, get_history_path};
pub use terminal::sanitize_for_display;
