//! Immutable route tree nodes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RouteError;
use crate::segment::ParametricSegment;

/// Label given to tree roots.
pub const ROOT_LABEL: &str = "::ROOT::";
/// Label given to wildcard subtrees.
pub const WILDCARD_LABEL: &str = "::WILDCARD::";
/// Label given to the leaf of a single route.
pub const BOTTOM_LABEL: &str = "::BOTTOM::";

/// Label given to the subtree behind a parametric segment.
pub fn param_label(param_name: &str) -> String {
    format!("::PARAM:{param_name}::")
}

// =============================================================================
// Parametric Child
// =============================================================================

/// A parametric segment paired with the subtree it leads to.
pub struct ParametricChild<H> {
    segment: Arc<dyn ParametricSegment>,
    node: Arc<RouteTreeNode<H>>,
}

impl<H> ParametricChild<H> {
    pub fn new(segment: Arc<dyn ParametricSegment>, node: RouteTreeNode<H>) -> Self {
        Self {
            segment,
            node: Arc::new(node),
        }
    }

    /// Pair up optional parts. Both or neither must be present.
    pub fn from_parts(
        segment: Option<Arc<dyn ParametricSegment>>,
        node: Option<Arc<RouteTreeNode<H>>>,
    ) -> Result<Option<Self>, RouteError> {
        match (segment, node) {
            (Some(segment), Some(node)) => Ok(Some(Self { segment, node })),
            (None, None) => Ok(None),
            _ => Err(RouteError::IncompleteParametricChild),
        }
    }

    pub fn segment(&self) -> &dyn ParametricSegment {
        self.segment.as_ref()
    }

    pub fn node(&self) -> &RouteTreeNode<H> {
        &self.node
    }

    pub(crate) fn shared_segment(&self) -> &Arc<dyn ParametricSegment> {
        &self.segment
    }

    pub(crate) fn shared_node(&self) -> &Arc<RouteTreeNode<H>> {
        &self.node
    }
}

impl<H> Clone for ParametricChild<H> {
    fn clone(&self) -> Self {
        Self {
            segment: Arc::clone(&self.segment),
            node: Arc::clone(&self.node),
        }
    }
}

impl<H> fmt::Debug for ParametricChild<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricChild")
            .field("segment", &self.segment)
            .field("node", &self.node)
            .finish()
    }
}

// =============================================================================
// Route Tree Node
// =============================================================================

/// One position in a compiled route tree. Immutable.
///
/// A node without a handler is a pass-through: `/foo/bar/baz` can be routed
/// without `/foo/bar` being routable. Build nodes with
/// [`RouteTreeNodeBuilder`](super::RouteTreeNodeBuilder) or merge existing
/// trees.
pub struct RouteTreeNode<H> {
    label: String,
    handler: Option<Arc<H>>,
    literal_children: HashMap<String, Arc<RouteTreeNode<H>>>,
    parametric_child: Option<ParametricChild<H>>,
    wildcard_child: Option<Arc<RouteTreeNode<H>>>,
}

impl<H> RouteTreeNode<H> {
    pub(crate) fn from_parts(
        label: String,
        handler: Option<Arc<H>>,
        literal_children: HashMap<String, Arc<RouteTreeNode<H>>>,
        parametric_child: Option<ParametricChild<H>>,
        wildcard_child: Option<Arc<RouteTreeNode<H>>>,
    ) -> Self {
        Self {
            label,
            handler,
            literal_children,
            parametric_child,
            wildcard_child,
        }
    }

    /// A root without handler or children.
    pub fn empty() -> Self {
        Self::from_parts(ROOT_LABEL.to_string(), None, HashMap::new(), None, None)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_deref()
    }

    pub(crate) fn shared_handler(&self) -> Option<&Arc<H>> {
        self.handler.as_ref()
    }

    /// Literal children take precedence over parametric and wildcard children
    /// for the same segment text.
    pub fn contains_literal_child(&self, segment: &str) -> bool {
        self.literal_children.contains_key(segment)
    }

    pub fn literal_child(&self, segment: &str) -> Option<&RouteTreeNode<H>> {
        self.literal_children.get(segment).map(Arc::as_ref)
    }

    /// Literal children ordered by key.
    pub fn literal_children(&self) -> Vec<(&str, &RouteTreeNode<H>)> {
        let mut children: Vec<_> = self
            .literal_children
            .iter()
            .map(|(key, node)| (key.as_str(), node.as_ref()))
            .collect();
        children.sort_by(|a, b| a.0.cmp(b.0));
        children
    }

    pub fn literal_child_count(&self) -> usize {
        self.literal_children.len()
    }

    pub(crate) fn shared_literal_children(&self) -> &HashMap<String, Arc<RouteTreeNode<H>>> {
        &self.literal_children
    }

    pub fn has_parametric_child(&self) -> bool {
        self.parametric_child.is_some()
    }

    pub fn parametric_child(&self) -> Option<&ParametricChild<H>> {
        self.parametric_child.as_ref()
    }

    pub fn parametric_segment(&self) -> Option<&dyn ParametricSegment> {
        self.parametric_child.as_ref().map(ParametricChild::segment)
    }

    pub fn parametric_node(&self) -> Option<&RouteTreeNode<H>> {
        self.parametric_child.as_ref().map(ParametricChild::node)
    }

    /// Everything past this node's position is handed to the wildcard child.
    pub fn has_wildcard_child(&self) -> bool {
        self.wildcard_child.is_some()
    }

    pub fn wildcard_child(&self) -> Option<&RouteTreeNode<H>> {
        self.wildcard_child.as_deref()
    }

    pub(crate) fn shared_wildcard_child(&self) -> Option<&Arc<RouteTreeNode<H>>> {
        self.wildcard_child.as_ref()
    }

    /// True if the node has no handler and no children.
    pub fn is_empty(&self) -> bool {
        self.handler.is_none()
            && self.literal_children.is_empty()
            && self.parametric_child.is_none()
            && self.wildcard_child.is_none()
    }
}

impl<H> Default for RouteTreeNode<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H> fmt::Debug for RouteTreeNode<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.literal_children.keys().collect();
        keys.sort();
        f.debug_struct("RouteTreeNode")
            .field("label", &self.label)
            .field("has_handler", &self.handler.is_some())
            .field("literal_children", &keys)
            .field("parametric_child", &self.parametric_child.as_ref().map(|c| c.segment.param_name()))
            .field("wildcard_child", &self.wildcard_child.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{NumberSegment, StringSegment};

    #[test]
    fn test_empty_node() {
        let node: RouteTreeNode<()> = RouteTreeNode::empty();
        assert_eq!(node.label(), ROOT_LABEL);
        assert!(node.is_empty());
        assert!(!node.has_handler());
        assert!(!node.has_parametric_child());
        assert!(!node.has_wildcard_child());
        assert!(node.literal_children().is_empty());
    }

    #[test]
    fn test_parametric_child_from_parts() {
        let segment: Arc<dyn ParametricSegment> = Arc::new(StringSegment::new("id"));
        let node: Arc<RouteTreeNode<()>> = Arc::new(RouteTreeNode::empty());

        let both = ParametricChild::from_parts(Some(Arc::clone(&segment)), Some(Arc::clone(&node)))
            .expect("both parts should pair");
        assert_eq!(both.map(|c| c.segment().param_name().to_string()), Some("id".to_string()));

        let neither = ParametricChild::<()>::from_parts(None, None).expect("no parts should be fine");
        assert!(neither.is_none());

        assert_eq!(
            ParametricChild::from_parts(Some(segment), None::<Arc<RouteTreeNode<()>>>).unwrap_err(),
            RouteError::IncompleteParametricChild
        );
        assert_eq!(
            ParametricChild::from_parts(None, Some(node)).unwrap_err(),
            RouteError::IncompleteParametricChild
        );
    }

    #[test]
    fn test_accessors_on_populated_node() {
        let mut literals = HashMap::new();
        literals.insert("b".to_string(), Arc::new(RouteTreeNode::empty()));
        literals.insert("a".to_string(), Arc::new(RouteTreeNode::empty()));
        let param = ParametricChild::new(Arc::new(NumberSegment::new("id")), RouteTreeNode::<u32>::empty());
        let node = RouteTreeNode::from_parts(
            "n".to_string(),
            Some(Arc::new(5u32)),
            literals,
            Some(param),
            Some(Arc::new(RouteTreeNode::empty())),
        );

        assert_eq!(node.handler(), Some(&5));
        assert!(node.contains_literal_child("a"));
        assert!(!node.contains_literal_child("c"));
        let keys: Vec<&str> = node.literal_children().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(node.parametric_segment().map(|s| s.param_name()), Some("id"));
        assert!(node.parametric_node().is_some());
        assert!(node.wildcard_child().is_some());
        assert!(!node.is_empty());
    }
}
