pub mod fs;
pub mod stage;
pub mod walker;

pub use fs::{is_markdown, read_to_string, resolve, write};
pub use stage::{Stager, Staging};
pub use walker::{content_files, process_collection, process_file};
