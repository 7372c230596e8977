pub mod discover;
pub mod reader;

pub use discover::{find_source_file, period_from_filename};
pub use reader::{SourceData, read_source};
