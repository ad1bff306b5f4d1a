//! Route Tree
//!
//! Immutable route nodes, the staging builder that creates them, and the
//! merge algorithm that combines two trees into a new one.

mod merge;
mod node;
mod staging;

pub use node::*;
pub use staging::*;
