// UI Components
pub mod command_bar;
pub mod dialog;
pub mod panel;
pub mod status_bar;
pub mod warning;

pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{Dialog, DialogKind, InputPurpose};
pub use panel::Panel;
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
