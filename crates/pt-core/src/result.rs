//! Match accumulator and handler context.

use std::collections::HashMap;

use crate::segment::{ParametricSegment, SegmentValue};

// =============================================================================
// Match Result
// =============================================================================

/// Data collected while walking the tree for one request.
///
/// Integer and string parameters live in separate namespaces, so the same
/// name may appear in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    integers: HashMap<String, i64>,
    strings: HashMap<String, String>,
    wildcard: Vec<String>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw` with `segment` and store the value under its name.
    ///
    /// Returns false and stores nothing if the segment rejects the value. The
    /// caller must then abandon the whole match attempt.
    pub fn add_parametric_segment(&mut self, segment: &dyn ParametricSegment, raw: &str) -> bool {
        match segment.parse(raw) {
            Some(SegmentValue::Integer(value)) => {
                self.add_integer(segment.param_name(), value);
                true
            }
            Some(SegmentValue::String(value)) => {
                self.add_string(segment.param_name(), value);
                true
            }
            None => false,
        }
    }

    pub fn add_integer(&mut self, name: &str, value: i64) {
        self.integers.insert(name.to_string(), value);
    }

    pub fn add_string(&mut self, name: &str, value: impl Into<String>) {
        self.strings.insert(name.to_string(), value.into());
    }

    pub fn add_wildcard_segment(&mut self, value: impl Into<String>) {
        self.wildcard.push(value.into());
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.integers.get(name).copied()
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    pub fn wildcard(&self) -> &[String] {
        &self.wildcard
    }

    pub fn integers(&self) -> &HashMap<String, i64> {
        &self.integers
    }

    pub fn strings(&self) -> &HashMap<String, String> {
        &self.strings
    }
}

// =============================================================================
// Route Match
// =============================================================================

/// The value passed to a handler when its route matches.
///
/// Call the getter for the type the route declared: a parameter built with a
/// number segment is only visible through [`RouteMatch::integer`].
#[derive(Debug)]
pub struct RouteMatch<'a, R: ?Sized> {
    request: &'a R,
    result: &'a MatchResult,
}

impl<'a, R: ?Sized> RouteMatch<'a, R> {
    pub fn new(request: &'a R, result: &'a MatchResult) -> Self {
        Self { request, result }
    }

    /// The raw request used for matching.
    pub fn request(&self) -> &'a R {
        self.request
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.result.integer(name)
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        self.result.string(name)
    }

    /// Segments consumed by a wildcard, in request order.
    pub fn wildcard(&self) -> &'a [String] {
        self.result.wildcard()
    }

    pub fn result(&self) -> &'a MatchResult {
        self.result
    }
}
