//! A concrete vertex payload: a geographic region.
//!
//! The graph itself is payload-agnostic; `Region` is the record the CLI demo
//! and the example program store in each vertex (regions and their
//! adjacency). Any `Clone` type works just as well.

use serde::Serialize;

/// A named region with its capital and area in square kilometres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    /// Full region name.
    pub name: String,
    /// Capital city.
    pub capital: String,
    /// Area in km².
    pub area: u64,
}

impl Region {
    /// Create a new region record.
    pub fn new(name: impl Into<String>, capital: impl Into<String>, area: u64) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            area,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (capital {}, {} km²)", self.name, self.capital, self.area)
    }
}
