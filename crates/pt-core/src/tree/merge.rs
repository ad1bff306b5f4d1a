//! Deep left-to-right merge of route trees.
//!
//! Neither input is modified. Positions present in both trees get new nodes;
//! subtrees present on one side only are shared by reference.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::error::RouteError;
use crate::handler::MergeHandler;

use super::node::{ParametricChild, RouteTreeNode};

impl<H: MergeHandler> RouteTreeNode<H> {
    /// Merge `other` into a copy of `self`.
    ///
    /// Where both trees have a handler at the same position, `self`'s handler
    /// is merged with `other`'s via [`MergeHandler::merge`]. Where both have a
    /// parametric child, `other`'s segment descriptor wins and the subtrees are
    /// merged. The merged node carries `other`'s label.
    pub fn merge(&self, other: &RouteTreeNode<H>) -> RouteTreeNode<H> {
        debug!("merging route tree {} into {}", other.label(), self.label());
        self.merge_node(other)
    }

    /// Merge a sequence of trees left to right.
    pub fn merge_all<I>(nodes: I) -> Result<RouteTreeNode<H>, RouteError>
    where
        I: IntoIterator<Item = RouteTreeNode<H>>,
    {
        let mut nodes = nodes.into_iter();
        let first = nodes.next().ok_or(RouteError::NothingToMerge)?;
        Ok(nodes.fold(first, |acc, node| acc.merge(&node)))
    }

    fn merge_node(&self, other: &RouteTreeNode<H>) -> RouteTreeNode<H> {
        RouteTreeNode::from_parts(
            other.label().to_string(),
            self.merged_handler(other),
            self.merged_literal_children(other),
            self.merged_parametric_child(other),
            self.merged_wildcard_child(other),
        )
    }

    fn merged_handler(&self, other: &RouteTreeNode<H>) -> Option<Arc<H>> {
        match (self.shared_handler(), other.shared_handler()) {
            (Some(mine), Some(theirs)) => Some(Arc::new(mine.merge(theirs))),
            (Some(mine), None) => Some(Arc::clone(mine)),
            (None, theirs) => theirs.cloned(),
        }
    }

    fn merged_literal_children(&self, other: &RouteTreeNode<H>) -> HashMap<String, Arc<RouteTreeNode<H>>> {
        let mut children = self.shared_literal_children().clone();

        for (segment, theirs) in other.shared_literal_children() {
            let merged = match self.shared_literal_children().get(segment) {
                Some(mine) => Arc::new(mine.merge_node(theirs)),
                None => Arc::clone(theirs),
            };
            children.insert(segment.clone(), merged);
        }

        children
    }

    fn merged_parametric_child(&self, other: &RouteTreeNode<H>) -> Option<ParametricChild<H>> {
        match (self.parametric_child(), other.parametric_child()) {
            (Some(mine), Some(theirs)) => Some(ParametricChild::new(
                Arc::clone(theirs.shared_segment()),
                mine.shared_node().merge_node(theirs.shared_node()),
            )),
            (Some(mine), None) => Some(mine.clone()),
            (None, theirs) => theirs.cloned(),
        }
    }

    fn merged_wildcard_child(&self, other: &RouteTreeNode<H>) -> Option<Arc<RouteTreeNode<H>>> {
        match (self.shared_wildcard_child(), other.shared_wildcard_child()) {
            (Some(mine), Some(theirs)) => Some(Arc::new(mine.merge_node(theirs))),
            (Some(mine), None) => Some(Arc::clone(mine)),
            (None, theirs) => theirs.cloned(),
        }
    }
}
