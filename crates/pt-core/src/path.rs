//! Path segmentation.
//!
//! Turns `/projects/123?tab=files` into `["projects", "123"]`. Callers with
//! their own segmentation can skip this module and implement
//! [`PathSegments`] directly.

use crate::handler::PathSegments;

/// Strip the query string, if any.
#[inline]
pub fn strip_query(path: &str) -> &str {
    match path.find('?') {
        Some(pos) => &path[..pos],
        None => path,
    }
}

/// Split a raw path into segments.
///
/// Everything before the first `/` is discarded, as is everything from the
/// first `?` on. Trailing separators do not produce empty segments.
pub fn path_segments(path: &str) -> Vec<String> {
    let path = strip_query(path).trim_end_matches('/');
    path.split('/').skip(1).map(str::to_string).collect()
}

// =============================================================================
// Segmented Path
// =============================================================================

/// A request that carries nothing but its path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedPath {
    segments: Vec<String>,
}

impl SegmentedPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Build from a raw path with [`path_segments`].
    pub fn parse(path: &str) -> Self {
        Self::new(path_segments(path))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl PathSegments for SegmentedPath {
    fn path_segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for SegmentedPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments() {
        assert_eq!(path_segments("/projects/123"), ["projects", "123"]);
        assert_eq!(path_segments("/projects/123/"), ["projects", "123"]);
        assert_eq!(path_segments("/projects/123?test"), ["projects", "123"]);
        assert_eq!(path_segments("/a/b/c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_path_segments_root_and_empty() {
        assert!(path_segments("").is_empty());
        assert!(path_segments("/").is_empty());
        assert!(path_segments("/?q=1").is_empty());
        assert!(path_segments("?q=1").is_empty());
    }

    #[test]
    fn test_path_segments_drops_part_before_root() {
        assert_eq!(path_segments("projects/123"), ["123"]);
        assert!(path_segments("projects").is_empty());
    }

    #[test]
    fn test_inner_empty_segments_are_kept() {
        assert_eq!(path_segments("/a//b"), ["a", "", "b"]);
    }

    #[test]
    fn test_every_trailing_slash_is_dropped() {
        assert_eq!(path_segments("/a/b//"), ["a", "b"]);
        assert_eq!(path_segments("/a/b///?x=1"), ["a", "b"]);
        assert!(path_segments("//").is_empty());
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("/a?b?c"), "/a");
        assert_eq!(strip_query("/a"), "/a");
    }

    #[test]
    fn test_segmented_path() {
        let path = SegmentedPath::from("/files/a/b");
        assert_eq!(path.path_segments(), ["files", "a", "b"]);
        assert_eq!(SegmentedPath::default().segments().len(), 0);
    }
}
