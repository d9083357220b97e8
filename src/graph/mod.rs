//! Immutable graph operations — the core data structure.

pub mod builder;
pub mod value_graph;

pub use builder::GraphBuilder;
pub use value_graph::ValueGraph;
