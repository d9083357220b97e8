//! Identifier generation — a convenience for minting vertex ids.
//!
//! Independent of the graph: no uniqueness check is performed against any
//! existing graph, collisions are possible in principle (and astronomically
//! unlikely).

use uuid::Uuid;

/// Generate a random RFC 4122 version-4 identifier in the canonical
/// lowercase hyphenated form (8-4-4-4-12 hex groups).
///
/// Stateless per call, backed by the OS random source.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
