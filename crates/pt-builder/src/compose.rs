//! Route table composition.

use log::debug;

use pt_core::{MergeHandler, RouteError, RouteTreeNode};

use crate::pattern::parse_route;

/// Build one tree from `(pattern, handler)` pairs.
///
/// Each route is built on its own and the results are merged left to right,
/// so two routes with the same pattern end up with
/// `first.merge(second)` as their handler.
pub fn compose_routes<H, P, I>(routes: I) -> Result<RouteTreeNode<H>, RouteError>
where
    H: MergeHandler,
    P: AsRef<str>,
    I: IntoIterator<Item = (P, H)>,
{
    let mut trees = Vec::new();
    for (pattern, handler) in routes {
        let route = parse_route(pattern.as_ref())?;
        trees.push(route.build(handler)?);
    }

    debug!("composing {} routes", trees.len());
    RouteTreeNode::merge_all(trees)
}
