//! Handler and request capabilities.

use std::sync::Arc;

use crate::result::RouteMatch;

/// Combines two handlers found at the same tree position during a merge.
///
/// `self` is the handler from the left (base) tree and `other` the one from
/// the right (incoming) tree. Neither may be modified; return a new handler.
/// The result may itself be merged again later.
pub trait MergeHandler {
    fn merge(&self, other: &Self) -> Self;
}

/// Invoked when a request's path resolves to the handler's node.
pub trait RouteHandler<R: ?Sized>: MergeHandler {
    type Output;

    fn call(&self, route_match: &RouteMatch<'_, R>) -> Self::Output;
}

/// A request that can be matched: anything exposing its path segments.
///
/// Segments are the unit of work, so a request for `/projects/123` exposes
/// `["projects", "123"]`.
pub trait PathSegments {
    fn path_segments(&self) -> &[String];
}

impl PathSegments for [String] {
    fn path_segments(&self) -> &[String] {
        self
    }
}

impl PathSegments for Vec<String> {
    fn path_segments(&self) -> &[String] {
        self
    }
}

impl<T: PathSegments + ?Sized> PathSegments for &T {
    fn path_segments(&self) -> &[String] {
        (**self).path_segments()
    }
}

impl<T: PathSegments + ?Sized> PathSegments for Arc<T> {
    fn path_segments(&self) -> &[String] {
        (**self).path_segments()
    }
}
