//! Read-only customer reference data.

pub mod directory;
pub mod types;

pub use directory::CustomerDirectory;
pub use types::{Customer, Segment};
