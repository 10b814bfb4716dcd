//! Shared utilities: text input state, layout helpers, style helpers, paths.

pub mod layout;
pub mod path;
pub mod style;
pub mod text_input;

pub use layout::{centered_popup, create_standard_layout};
pub use path::{config_path, log_dir};
pub use text_input::TextInput;
