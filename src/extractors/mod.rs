pub mod extract_query_descriptor;

pub use extract_query_descriptor::{extract_query_descriptor, QueryDescriptor};
