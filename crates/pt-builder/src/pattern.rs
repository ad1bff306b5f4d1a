//! Route pattern parser.
//!
//! Grammar, one item per `/`-separated segment:
//!
//! - `name`: literal segment
//! - `:name` or `:name:str`: string parameter
//! - `:name:int`: integer parameter
//! - `*`: wildcard, last segment only
//!
//! The empty pattern and `/` both denote the root.

use pt_core::tree::is_valid_segment;
use pt_core::RouteError;

use crate::single::SingleRouteBuilder;

const WILDCARD: &str = "*";
const PARAM_MARKER: char = ':';

/// Parse a textual route into a single-route builder.
pub fn parse_route(pattern: &str) -> Result<SingleRouteBuilder, RouteError> {
    let body = pattern.strip_prefix('/').unwrap_or(pattern);
    let body = body.strip_suffix('/').unwrap_or(body);

    let mut route = SingleRouteBuilder::new();
    if body.is_empty() {
        return Ok(route);
    }

    let segments: Vec<&str> = body.split('/').collect();
    let last = segments.len() - 1;

    for (index, raw) in segments.into_iter().enumerate() {
        if raw == WILDCARD {
            if index != last {
                return Err(invalid(pattern, "wildcard must be the last segment"));
            }
            route = route.wildcard();
            continue;
        }

        if let Some(param) = raw.strip_prefix(PARAM_MARKER) {
            let (name, kind) = match param.split_once(PARAM_MARKER) {
                Some((name, kind)) => (name, kind),
                None => (param, "str"),
            };
            if name.is_empty() {
                return Err(invalid(pattern, "parameter name is empty"));
            }
            route = match kind {
                "str" | "string" => route.param(name),
                "int" | "number" => route.number(name),
                other => return Err(invalid(pattern, &format!("unknown parameter type {other:?}"))),
            };
            continue;
        }

        if !is_valid_segment(raw) {
            return Err(invalid(pattern, &format!("segment {raw:?} contains invalid characters")));
        }
        route = route.path(raw);
    }

    Ok(route)
}

fn invalid(pattern: &str, reason: &str) -> RouteError {
    RouteError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
