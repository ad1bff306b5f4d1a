//! PathTree Route Builders
//!
//! This crate assembles route trees for `pt-core`: nested trees with
//! [`RouteTreeBuilder`], one route at a time with [`SingleRouteBuilder`], and
//! whole route tables from textual patterns with [`compose_routes`].

pub mod builder;
pub mod compose;
pub mod pattern;
pub mod single;

#[cfg(test)]
mod test_support;

pub use builder::RouteTreeBuilder;
pub use compose::compose_routes;
pub use pattern::parse_route;
pub use single::SingleRouteBuilder;
