//! PathTree Core Library
//!
//! This crate provides the immutable route tree and the matching engine for
//! PathTree.
//!
//! # Architecture
//!
//! Routes are staged in mutable builders and frozen into a tree of
//! [`RouteTreeNode`]s. A frozen tree is never mutated again: merging two trees
//! produces a new root and shares every subtree that only one side contributes.
//! The matcher walks the tree one segment at a time with a fixed priority
//! (literal, then parametric, then wildcard) and never backtracks.
//!
//! # Modules
//!
//! - `error`: Build-time fault type
//! - `segment`: Parametric segment parsers (string, number, user-defined)
//! - `result`: Per-attempt match accumulator and the context handed to handlers
//! - `handler`: Handler and request capabilities
//! - `tree`: Route tree nodes, the staging node builder and the merge algorithm
//! - `matcher`: Traversal state machine
//! - `path`: Splitting raw paths into segments

pub mod error;
pub mod handler;
pub mod matcher;
pub mod path;
pub mod result;
pub mod segment;
pub mod tree;

// Re-export commonly used types
pub use error::RouteError;
pub use handler::{MergeHandler, PathSegments, RouteHandler};
pub use matcher::{match_route, Matcher};
pub use path::{path_segments, SegmentedPath};
pub use result::{MatchResult, RouteMatch};
pub use segment::{NumberSegment, ParametricSegment, SegmentValue, StringSegment};
pub use tree::{ParametricChild, RouteTreeNode, RouteTreeNodeBuilder};
