use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pt_builder::compose_routes;
use pt_core::{MergeHandler, RouteHandler, RouteMatch, RouteTreeNode, SegmentedPath};

/// One entry of a route table file.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    pub pattern: String,
    pub name: String,
}

/// Handler used by the CLI: the names of every route that landed on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNames(pub Vec<String>);

impl MergeHandler for RouteNames {
    fn merge(&self, other: &Self) -> Self {
        let mut names = self.0.clone();
        names.extend(other.0.iter().cloned());
        RouteNames(names)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub segments: Vec<String>,
    pub routes: Vec<String>,
    pub integers: BTreeMap<String, i64>,
    pub strings: BTreeMap<String, String>,
    pub wildcard: Vec<String>,
}

impl RouteHandler<SegmentedPath> for RouteNames {
    type Output = MatchReport;

    fn call(&self, route_match: &RouteMatch<'_, SegmentedPath>) -> MatchReport {
        let result = route_match.result();
        MatchReport {
            segments: route_match.request().segments().to_vec(),
            routes: self.0.clone(),
            integers: result.integers().iter().map(|(k, v)| (k.clone(), *v)).collect(),
            strings: result.strings().iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            wildcard: result.wildcard().to_vec(),
        }
    }
}

pub fn parse_table(content: &str) -> Result<Vec<RouteEntry>, String> {
    serde_json::from_str(content).map_err(|e| format!("Invalid route table: {}", e))
}

pub fn read_table(path: &Path) -> Result<Vec<RouteEntry>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    parse_table(&content)
}

pub fn build_tree(entries: &[RouteEntry]) -> Result<RouteTreeNode<RouteNames>, String> {
    let routes = entries
        .iter()
        .map(|entry| (entry.pattern.as_str(), RouteNames(vec![entry.name.clone()])));
    compose_routes(routes).map_err(|e| format!("Failed to build route tree: {}", e))
}

pub fn load_tree(path: &Path) -> Result<RouteTreeNode<RouteNames>, String> {
    let entries = read_table(path)?;
    log::info!("loaded {} routes from '{}'", entries.len(), path.display());
    build_tree(&entries)
}

/// Indented, key-sorted dump of a tree.
pub fn dump_tree(tree: &RouteTreeNode<RouteNames>) -> String {
    TreeDump(tree).to_string()
}

/// Display adapter behind [`dump_tree`].
pub struct TreeDump<'a>(pub &'a RouteTreeNode<RouteNames>);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump_node(f, "/", self.0, 0)
    }
}

fn dump_node(f: &mut fmt::Formatter<'_>, edge: &str, node: &RouteTreeNode<RouteNames>, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    write!(f, "{indent}{edge} [{}]", node.label())?;
    if let Some(handler) = node.handler() {
        write!(f, " => {}", handler.0.join(", "))?;
    }
    writeln!(f)?;

    for (key, child) in node.literal_children() {
        dump_node(f, key, child, depth + 1)?;
    }
    if let Some(parametric) = node.parametric_child() {
        let edge = format!(":{} {:?}", parametric.segment().param_name(), parametric.segment());
        dump_node(f, &edge, parametric.node(), depth + 1)?;
    }
    if let Some(wildcard) = node.wildcard_child() {
        dump_node(f, "*", wildcard, depth + 1)?;
    }
    Ok(())
}
