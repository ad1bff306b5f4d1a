//! Nested route tree builder.
//!
//! The builder calls mirror the shape of the tree:
//!
//! ```
//! use pt_builder::RouteTreeBuilder;
//!
//! # #[derive(Debug)] struct Page(&'static str);
//! # impl pt_core::MergeHandler for Page {
//! #     fn merge(&self, other: &Self) -> Self { Page(other.0) }
//! # }
//! let tree = RouteTreeBuilder::new()
//!     .handler(Page("home"))
//!     .path("/projects", RouteTreeBuilder::new()
//!         .handler(Page("projects"))
//!         .number("id", RouteTreeBuilder::new().handler(Page("project")))
//!         .path("/new", RouteTreeBuilder::new().handler(Page("new project"))))
//!     .build()
//!     .expect("routes should be valid");
//!
//! assert!(tree.literal_child("projects").is_some());
//! ```

use std::sync::Arc;

use log::debug;

use pt_core::tree::{is_valid_segment, param_label, ROOT_LABEL, WILDCARD_LABEL};
use pt_core::{NumberSegment, ParametricSegment, RouteError, RouteTreeNode, RouteTreeNodeBuilder, StringSegment};

const PATH_PREFIX: &str = "/";
const PARAM_PREFIXES: [&str; 2] = ["/:", ":"];

/// Fluent builder for a whole route tree.
///
/// Configuration faults (bad literal keys, a second parametric or wildcard
/// child) are recorded when the offending call is made and returned from
/// [`build`](Self::build). The first fault wins.
pub struct RouteTreeBuilder<H> {
    handler: Option<H>,
    literals: Vec<(String, RouteTreeBuilder<H>)>,
    parametric: Option<(Arc<dyn ParametricSegment>, Box<RouteTreeBuilder<H>>)>,
    wildcard: Option<Box<RouteTreeBuilder<H>>>,
    fault: Option<RouteError>,
}

impl<H> RouteTreeBuilder<H> {
    pub fn new() -> Self {
        Self {
            handler: None,
            literals: Vec::new(),
            parametric: None,
            wildcard: None,
            fault: None,
        }
    }

    pub fn handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Attach `child` under one literal segment. A leading `/` is ignored.
    pub fn path(mut self, path: &str, child: RouteTreeBuilder<H>) -> Self {
        let segment = path.strip_prefix(PATH_PREFIX).unwrap_or(path);
        if !is_valid_segment(segment) {
            self.record(RouteError::InvalidSegment(segment.to_string()));
        }
        self.literals.push((segment.to_string(), child));
        self
    }

    /// Attach `child` under a string parameter. A leading `/:` or `:` is
    /// ignored.
    pub fn param(self, name: &str, child: RouteTreeBuilder<H>) -> Self {
        let name = PARAM_PREFIXES
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix))
            .unwrap_or(name);
        self.param_segment(Arc::new(StringSegment::new(name)), child)
    }

    /// Attach `child` under an integer parameter.
    pub fn number(self, name: &str, child: RouteTreeBuilder<H>) -> Self {
        self.param_segment(Arc::new(NumberSegment::new(name)), child)
    }

    /// Attach `child` under a caller-supplied parametric segment.
    pub fn param_segment(mut self, segment: Arc<dyn ParametricSegment>, child: RouteTreeBuilder<H>) -> Self {
        if self.parametric.is_some() {
            self.record(RouteError::DuplicateParametricChild);
        } else {
            self.parametric = Some((segment, Box::new(child)));
        }
        self
    }

    /// Hand every remaining segment at this position to `child`.
    pub fn wildcard(mut self, child: RouteTreeBuilder<H>) -> Self {
        if self.wildcard.is_some() {
            self.record(RouteError::DuplicateWildcardChild);
        } else {
            self.wildcard = Some(Box::new(child));
        }
        self
    }

    /// Freeze the whole nested structure into one tree.
    pub fn build(self) -> Result<RouteTreeNode<H>, RouteError> {
        let tree = self.build_labeled(ROOT_LABEL.to_string())?;
        debug!("built route tree with {} top-level literals", tree.literal_child_count());
        Ok(tree)
    }

    fn build_labeled(self, label: String) -> Result<RouteTreeNode<H>, RouteError> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        let mut node = RouteTreeNodeBuilder::new();
        if let Some(handler) = self.handler {
            node.set_handler(handler);
        }
        for (segment, child) in self.literals {
            let child = child.build_labeled(segment.clone())?;
            node.add_literal_child(segment, child)?;
        }
        if let Some((segment, child)) = self.parametric {
            let child = child.build_labeled(param_label(segment.param_name()))?;
            node.set_parametric_child(segment, child)?;
        }
        if let Some(child) = self.wildcard {
            let child = child.build_labeled(WILDCARD_LABEL.to_string())?;
            node.set_wildcard_child(child)?;
        }

        Ok(node.create_node(label))
    }

    fn record(&mut self, fault: RouteError) {
        if self.fault.is_none() {
            self.fault = Some(fault);
        }
    }
}

impl<H> Default for RouteTreeBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
