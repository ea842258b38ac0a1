// System Layer
pub mod content;
pub mod export;
pub mod filesystem;
pub mod logging;
pub mod settings;

pub use content::{read_content, FileContent};
pub use export::{export_to_file, with_default_extension, ExportSummary};
pub use filesystem::FileSystem;
pub use settings::Settings;
