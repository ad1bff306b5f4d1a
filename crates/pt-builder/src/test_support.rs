use pt_core::{match_route, MergeHandler, RouteHandler, RouteMatch, RouteTreeNode, SegmentedPath};

/// Handler that reports its name and records merge order as `left+right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Named(pub String);

impl Named {
    pub fn new(name: &str) -> Self {
        Named(name.to_string())
    }
}

impl MergeHandler for Named {
    fn merge(&self, other: &Self) -> Self {
        Named(format!("{}+{}", self.0, other.0))
    }
}

/// What a [`Named`] handler saw when it was called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub name: String,
    pub integers: Vec<(String, i64)>,
    pub strings: Vec<(String, String)>,
    pub wildcard: Vec<String>,
}

impl Hit {
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.integers.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

impl RouteHandler<SegmentedPath> for Named {
    type Output = Hit;

    fn call(&self, route_match: &RouteMatch<'_, SegmentedPath>) -> Hit {
        let mut integers: Vec<_> = route_match
            .result()
            .integers()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        integers.sort();
        let mut strings: Vec<_> = route_match
            .result()
            .strings()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        strings.sort();

        Hit {
            name: self.0.clone(),
            integers,
            strings,
            wildcard: route_match.wildcard().to_vec(),
        }
    }
}

pub fn run(tree: &RouteTreeNode<Named>, path: &str) -> Option<Hit> {
    match_route(tree, &SegmentedPath::parse(path))
}

pub fn hit_name(tree: &RouteTreeNode<Named>, path: &str) -> Option<String> {
    run(tree, path).map(|hit| hit.name)
}
