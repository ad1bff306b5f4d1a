//! Parametric segment parsers.
//!
//! A parametric segment names a path position and decides whether a raw
//! segment is an acceptable value for it. Rejection is an ordinary non-match.

use std::fmt;

// =============================================================================
// Segment Values
// =============================================================================

/// Typed value produced by a parametric segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentValue {
    Integer(i64),
    String(String),
}

// =============================================================================
// Parametric Segment Trait
// =============================================================================

/// Parser for one named path parameter.
///
/// Implement this for custom parameter types. Descriptors are shared between
/// trees as `Arc<dyn ParametricSegment>`, so implementations must be
/// thread-safe and should hold no mutable state.
pub trait ParametricSegment: fmt::Debug + Send + Sync {
    /// Name under which the parsed value is stored.
    fn param_name(&self) -> &str;

    /// Parse a raw segment, or `None` if it is not a valid value.
    fn parse(&self, raw: &str) -> Option<SegmentValue>;
}

// =============================================================================
// Built-in Segments
// =============================================================================

/// Accepts any segment as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSegment {
    name: String,
}

impl StringSegment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ParametricSegment for StringSegment {
    fn param_name(&self) -> &str {
        &self.name
    }

    fn parse(&self, raw: &str) -> Option<SegmentValue> {
        Some(SegmentValue::String(raw.to_string()))
    }
}

/// Accepts base-10 integer literals (optional sign, digits only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSegment {
    name: String,
}

impl NumberSegment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ParametricSegment for NumberSegment {
    fn param_name(&self) -> &str {
        &self.name
    }

    fn parse(&self, raw: &str) -> Option<SegmentValue> {
        raw.parse::<i64>().ok().map(SegmentValue::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_segment_accepts_anything() {
        let seg = StringSegment::new("slug");
        assert_eq!(seg.param_name(), "slug");
        assert_eq!(seg.parse("hello"), Some(SegmentValue::String("hello".to_string())));
        assert_eq!(seg.parse("12a"), Some(SegmentValue::String("12a".to_string())));
    }

    #[test]
    fn test_number_segment_parses_integers() {
        let seg = NumberSegment::new("id");
        assert_eq!(seg.parse("123"), Some(SegmentValue::Integer(123)));
        assert_eq!(seg.parse("-7"), Some(SegmentValue::Integer(-7)));
        assert_eq!(seg.parse("+7"), Some(SegmentValue::Integer(7)));
    }

    #[test]
    fn test_number_segment_rejects_non_integers() {
        let seg = NumberSegment::new("id");
        assert_eq!(seg.parse("12a"), None);
        assert_eq!(seg.parse("1.5"), None);
        assert_eq!(seg.parse(""), None);
        assert_eq!(seg.parse("99999999999999999999"), None);
    }
}
