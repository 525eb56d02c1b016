pub mod find_source_references;

pub use find_source_references::{find_source_references, SourceReference};
