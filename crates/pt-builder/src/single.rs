//! Builder for a single route.
//!
//! Produces a linear chain of nodes ending in one handler. Typically used to
//! add one route to an existing tree via merge, or when the segments of a
//! route are computed at runtime rather than written out as nested calls.

use std::fmt;
use std::sync::Arc;

use log::debug;

use pt_core::tree::{param_label, BOTTOM_LABEL, ROOT_LABEL, WILDCARD_LABEL};
use pt_core::{NumberSegment, ParametricSegment, RouteError, RouteTreeNode, RouteTreeNodeBuilder, StringSegment};

#[derive(Debug, Clone)]
enum RouteSegment {
    Literal(String),
    Param(Arc<dyn ParametricSegment>),
    Wildcard,
}

/// Ordered list of segments for one route.
#[derive(Debug, Clone, Default)]
pub struct SingleRouteBuilder {
    segments: Vec<RouteSegment>,
}

impl SingleRouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal segment. A leading `/` is ignored.
    pub fn path(mut self, path: &str) -> Self {
        let segment = path.strip_prefix('/').unwrap_or(path);
        self.segments.push(RouteSegment::Literal(segment.to_string()));
        self
    }

    /// Append a string parameter.
    pub fn param(self, name: &str) -> Self {
        self.param_segment(Arc::new(StringSegment::new(name)))
    }

    /// Append an integer parameter.
    pub fn number(self, name: &str) -> Self {
        self.param_segment(Arc::new(NumberSegment::new(name)))
    }

    pub fn param_segment(mut self, segment: Arc<dyn ParametricSegment>) -> Self {
        self.segments.push(RouteSegment::Param(segment));
        self
    }

    /// Append a wildcard. It must be the last segment of the route.
    pub fn wildcard(mut self) -> Self {
        self.segments.push(RouteSegment::Wildcard);
        self
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Build the route with `handler` at its end.
    ///
    /// The nodes are created from the deepest segment upward; the outermost
    /// node is labelled as a root so the result can be merged into any tree.
    pub fn build<H>(&self, handler: H) -> Result<RouteTreeNode<H>, RouteError> {
        if let Some(pos) = self.segments.iter().position(|s| matches!(s, RouteSegment::Wildcard)) {
            if pos + 1 != self.segments.len() {
                return Err(RouteError::InvalidPattern {
                    pattern: self.to_string(),
                    reason: "wildcard must be the last segment".to_string(),
                });
            }
        }

        let mut bottom = RouteTreeNodeBuilder::new();
        bottom.set_handler(handler);
        if self.segments.is_empty() {
            return Ok(bottom.create_node(ROOT_LABEL));
        }

        let mut node = bottom.create_node(BOTTOM_LABEL);
        for (depth, segment) in self.segments.iter().enumerate().rev() {
            let mut parent = RouteTreeNodeBuilder::new();
            let label = match segment {
                RouteSegment::Literal(path) => {
                    parent.add_literal_child(path.as_str(), node)?;
                    format!("::PATH:{path}::")
                }
                RouteSegment::Param(segment) => {
                    parent.set_parametric_child(Arc::clone(segment), node)?;
                    param_label(segment.param_name())
                }
                RouteSegment::Wildcard => {
                    parent.set_wildcard_child(node)?;
                    WILDCARD_LABEL.to_string()
                }
            };
            node = if depth == 0 {
                parent.create_node(ROOT_LABEL)
            } else {
                parent.create_node(label)
            };
        }

        debug!("built single route {}", self);
        Ok(node)
    }
}

impl fmt::Display for SingleRouteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                RouteSegment::Literal(path) => write!(f, "/{path}")?,
                RouteSegment::Param(segment) => write!(f, "/:{}", segment.param_name())?,
                RouteSegment::Wildcard => f.write_str("/*")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{hit_name, run, Named};

    #[test]
    fn test_empty_route_is_root_handler() {
        let tree = SingleRouteBuilder::new().build(Named::new("root")).expect("route should build");
        assert_eq!(tree.label(), ROOT_LABEL);
        assert_eq!(hit_name(&tree, "/").as_deref(), Some("root"));
        assert_eq!(run(&tree, "/x"), None);
    }

    #[test]
    fn test_builds_linear_chain() {
        let route = SingleRouteBuilder::new().path("/projects").number("id").path("files");
        let tree = route.build(Named::new("files")).expect("route should build");

        assert_eq!(tree.label(), ROOT_LABEL);
        let projects = tree.literal_child("projects").expect("should have projects");
        assert_eq!(projects.label(), "::PARAM:id::");
        let files_parent = projects.parametric_node().expect("should have id");
        assert_eq!(files_parent.label(), "::PATH:files::");
        let bottom = files_parent.literal_child("files").expect("should have files");
        assert_eq!(bottom.label(), BOTTOM_LABEL);
        assert!(bottom.has_handler());

        let hit = run(&tree, "/projects/3/files").expect("route should match");
        assert_eq!(hit.integer("id"), Some(3));
        assert_eq!(run(&tree, "/projects/3"), None);
    }

    #[test]
    fn test_string_param_and_wildcard() {
        let tree = SingleRouteBuilder::new()
            .path("users")
            .param("name")
            .wildcard()
            .build(Named::new("user files"))
            .expect("route should build");

        let hit = run(&tree, "/users/ada/docs/a.txt").expect("route should match");
        assert_eq!(hit.string("name"), Some("ada"));
        assert_eq!(hit.wildcard, ["docs", "a.txt"]);
    }

    #[test]
    fn test_wildcard_must_be_last() {
        let err = SingleRouteBuilder::new()
            .wildcard()
            .path("x")
            .build(Named::new("bad"))
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidPattern {
                pattern: "/*/x".to_string(),
                reason: "wildcard must be the last segment".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_literal_fails() {
        let err = SingleRouteBuilder::new().path("a b").build(Named::new("bad")).unwrap_err();
        assert_eq!(err, RouteError::InvalidSegment("a b".to_string()));
    }

    #[test]
    fn test_builder_can_be_reused() {
        let route = SingleRouteBuilder::new().path("a");
        let first = route.build(Named::new("first")).expect("route should build");
        let second = route.build(Named::new("second")).expect("route should build");
        assert_eq!(hit_name(&first, "/a").as_deref(), Some("first"));
        assert_eq!(hit_name(&second, "/a").as_deref(), Some("second"));
    }

    #[test]
    fn test_display() {
        let route = SingleRouteBuilder::new().path("a").number("id").param("slug").wildcard();
        assert_eq!(route.to_string(), "/a/:id/:slug/*");
        assert_eq!(SingleRouteBuilder::new().to_string(), "/");
        assert_eq!(route.len(), 4);
        assert!(!route.is_empty());
    }
}
