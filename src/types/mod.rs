//! All data types for the ValGraph library.

pub mod error;
pub mod region;

pub use error::{GraphError, GraphResult};
pub use region::Region;
