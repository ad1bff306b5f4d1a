//! Core Matching Engine
//!
//! Walks a route tree one segment at a time. At every node the candidates are
//! tried in a fixed order: literal child, parametric child, wildcard child.
//! There is no backtracking: a parametric segment that rejects its value ends
//! the attempt even if a wildcard sibling could have taken it.

use log::trace;

use crate::handler::{PathSegments, RouteHandler};
use crate::result::{MatchResult, RouteMatch};
use crate::tree::RouteTreeNode;

// =============================================================================
// Matcher
// =============================================================================

/// Matches requests against one route tree.
///
/// Holds no per-request state, so a single matcher can serve any number of
/// threads at once.
pub struct Matcher<'a, H> {
    root: &'a RouteTreeNode<H>,
}

impl<'a, H> Clone for Matcher<'a, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, H> Copy for Matcher<'a, H> {}

impl<'a, H> Matcher<'a, H> {
    /// Create a new matcher for the given tree.
    pub fn new(root: &'a RouteTreeNode<H>) -> Self {
        Self { root }
    }

    /// Match a request and invoke the handler of the node it resolves to.
    ///
    /// Returns `None` if the request has no route.
    pub fn match_request<R>(&self, request: &R) -> Option<H::Output>
    where
        R: PathSegments + ?Sized,
        H: RouteHandler<R>,
    {
        let (node, result) = self.resolve(request.path_segments())?;
        let handler = node.handler()?;
        Some(handler.call(&RouteMatch::new(request, &result)))
    }

    /// Walk the tree for `segments` without calling a handler.
    ///
    /// Returns the node reached and the values collected on the way. The node
    /// may have no handler; [`match_request`](Self::match_request) treats that
    /// as no match.
    pub fn resolve(&self, segments: &[String]) -> Option<(&'a RouteTreeNode<H>, MatchResult)> {
        let mut node = self.root;
        let mut result = MatchResult::new();
        let mut index = 0;

        while index < segments.len() {
            let segment = segments[index].as_str();

            // A1: Literal match
            if let Some(child) = node.literal_child(segment) {
                node = child;
                index += 1;
                continue;
            }

            // A2: Parametric fallback
            if let Some(parametric) = node.parametric_child() {
                if !result.add_parametric_segment(parametric.segment(), segment) {
                    trace!(
                        "segment {:?} rejected by parameter {} at {}",
                        segment,
                        parametric.segment().param_name(),
                        node.label()
                    );
                    return None;
                }
                node = parametric.node();
                index += 1;
                continue;
            }

            // A3: Wildcard fallback consumes the rest
            if let Some(wildcard) = node.wildcard_child() {
                for rest in &segments[index..] {
                    result.add_wildcard_segment(rest.as_str());
                }
                node = wildcard;
                index = segments.len();
                break;
            }

            trace!("no child of {} accepts segment {:?}", node.label(), segment);
            return None;
        }

        trace!("resolved {} segments to {}", index, node.label());
        Some((node, result))
    }
}

/// Match `request` against `root`. Shorthand for [`Matcher::match_request`].
pub fn match_route<H, R>(root: &RouteTreeNode<H>, request: &R) -> Option<H::Output>
where
    R: PathSegments + ?Sized,
    H: RouteHandler<R>,
{
    Matcher::new(root).match_request(request)
}
