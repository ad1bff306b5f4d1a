//! Staging builder for a single node.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::error::RouteError;
use crate::segment::ParametricSegment;

use super::node::{ParametricChild, RouteTreeNode};

/// Check a literal key: non-empty, ASCII letters, digits, `-`, `.`, `_`, `~`.
#[inline]
pub fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
}

/// Mutable staging area for one node.
///
/// Literal children are keyed by exact segment text; inserting an existing
/// key replaces the previous child. The parametric and wildcard slots can be
/// filled once each. [`create_node`](Self::create_node) freezes the builder.
pub struct RouteTreeNodeBuilder<H> {
    handler: Option<Arc<H>>,
    literal_children: HashMap<String, Arc<RouteTreeNode<H>>>,
    parametric_child: Option<ParametricChild<H>>,
    wildcard_child: Option<Arc<RouteTreeNode<H>>>,
}

impl<H> RouteTreeNodeBuilder<H> {
    pub fn new() -> Self {
        Self {
            handler: None,
            literal_children: HashMap::new(),
            parametric_child: None,
            wildcard_child: None,
        }
    }

    pub fn set_handler(&mut self, handler: H) {
        self.handler = Some(Arc::new(handler));
    }

    /// Set a handler that is already shared with other nodes.
    pub fn set_shared_handler(&mut self, handler: Arc<H>) {
        self.handler = Some(handler);
    }

    pub fn add_literal_child(
        &mut self,
        segment: impl Into<String>,
        node: RouteTreeNode<H>,
    ) -> Result<(), RouteError> {
        let segment = segment.into();
        if !is_valid_segment(&segment) {
            return Err(RouteError::InvalidSegment(segment));
        }
        self.literal_children.insert(segment, Arc::new(node));
        Ok(())
    }

    pub fn set_parametric_child(
        &mut self,
        segment: Arc<dyn ParametricSegment>,
        node: RouteTreeNode<H>,
    ) -> Result<(), RouteError> {
        if self.parametric_child.is_some() {
            return Err(RouteError::DuplicateParametricChild);
        }
        self.parametric_child = Some(ParametricChild::new(segment, node));
        Ok(())
    }

    pub fn set_wildcard_child(&mut self, node: RouteTreeNode<H>) -> Result<(), RouteError> {
        if self.wildcard_child.is_some() {
            return Err(RouteError::DuplicateWildcardChild);
        }
        self.wildcard_child = Some(Arc::new(node));
        Ok(())
    }

    /// Freeze the staged state into an immutable node.
    pub fn create_node(self, label: impl Into<String>) -> RouteTreeNode<H> {
        let label = label.into();
        debug!(
            "creating node {}: handler={}, literals={}, parametric={}, wildcard={}",
            label,
            self.handler.is_some(),
            self.literal_children.len(),
            self.parametric_child.is_some(),
            self.wildcard_child.is_some(),
        );
        RouteTreeNode::from_parts(
            label,
            self.handler,
            self.literal_children,
            self.parametric_child,
            self.wildcard_child,
        )
    }
}

impl<H> Default for RouteTreeNodeBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
