// Utilities
pub mod error;
pub mod formatter;
pub mod path_display;
pub mod path_input;
