// Core Layer
pub mod actions;

pub use actions::Action;
