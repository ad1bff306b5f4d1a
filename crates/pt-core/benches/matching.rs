use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pt_core::{
    match_route, MergeHandler, NumberSegment, RouteHandler, RouteMatch, RouteTreeNode, RouteTreeNodeBuilder,
    SegmentedPath, StringSegment,
};

struct Id(u32);

impl MergeHandler for Id {
    fn merge(&self, other: &Self) -> Self {
        Id(other.0)
    }
}

impl RouteHandler<SegmentedPath> for Id {
    type Output = u32;

    fn call(&self, route_match: &RouteMatch<'_, SegmentedPath>) -> u32 {
        self.0 + route_match.wildcard().len() as u32
    }
}

fn leaf(id: u32) -> RouteTreeNode<Id> {
    let mut builder = RouteTreeNodeBuilder::new();
    builder.set_handler(Id(id));
    builder.create_node("leaf")
}

/// `/section-N/items/:id/comments/:slug` for a few hundred sections, merged
/// one route at a time, plus a `/static/*` wildcard.
fn build_tree() -> RouteTreeNode<Id> {
    let mut tree = RouteTreeNode::empty();
    for section in 0..256u32 {
        let mut comments = RouteTreeNodeBuilder::new();
        comments
            .set_parametric_child(Arc::new(StringSegment::new("slug")), leaf(section))
            .expect("slot should be free");

        let mut item = RouteTreeNodeBuilder::new();
        item.add_literal_child("comments", comments.create_node("comments"))
            .expect("key should be valid");

        let mut items = RouteTreeNodeBuilder::new();
        items
            .set_parametric_child(Arc::new(NumberSegment::new("id")), item.create_node("item"))
            .expect("slot should be free");

        let mut section_node = RouteTreeNodeBuilder::new();
        section_node
            .add_literal_child("items", items.create_node("items"))
            .expect("key should be valid");

        let mut root = RouteTreeNodeBuilder::new();
        root.add_literal_child(format!("section-{section}"), section_node.create_node("section"))
            .expect("key should be valid");
        tree = tree.merge(&root.create_node("::ROOT::"));
    }

    let mut files = RouteTreeNodeBuilder::new();
    files.set_wildcard_child(leaf(9999)).expect("slot should be free");
    let mut root = RouteTreeNodeBuilder::new();
    root.add_literal_child("static", files.create_node("static"))
        .expect("key should be valid");
    tree.merge(&root.create_node("::ROOT::"))
}

fn bench_matching(c: &mut Criterion) {
    let tree = build_tree();
    let hit = SegmentedPath::parse("/section-200/items/42/comments/hello-world");
    let miss = SegmentedPath::parse("/section-200/items/not-a-number/comments/x");
    let wildcard = SegmentedPath::parse("/static/css/site/main.css");

    c.bench_function("match_hit", |b| b.iter(|| match_route(&tree, black_box(&hit))));
    c.bench_function("match_miss", |b| b.iter(|| match_route(&tree, black_box(&miss))));
    c.bench_function("match_wildcard", |b| b.iter(|| match_route(&tree, black_box(&wildcard))));
    c.bench_function("merge_trees", |b| b.iter(|| tree.merge(black_box(&tree))));
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
