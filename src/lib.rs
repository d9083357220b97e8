//! ValGraph — immutable value-semantics graph library.
//!
//! Models directed and undirected relationships between string-identified
//! entities (regions and their adjacency, dependency links, ...), each
//! vertex carrying an opaque payload. Every insertion returns a new, fully
//! independent graph value; a published graph is frozen forever.

pub mod cli;
pub mod graph;
pub mod ident;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{GraphBuilder, ValueGraph};
pub use ident::generate_id;
pub use types::{GraphError, GraphResult, Region};
