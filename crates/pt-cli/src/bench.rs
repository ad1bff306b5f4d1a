use std::time::Instant;

use pt_core::{Matcher, RouteTreeNode, SegmentedPath};

use crate::table::RouteNames;

pub struct BenchOptions {
    pub paths: Vec<String>,
    pub iterations: usize,
    pub warmup: usize,
}

#[derive(Debug, Clone)]
pub struct BenchStats {
    pub ops: usize,
    pub matched: usize,
    pub total_ms: f64,
    pub ns_per_op: f64,
    pub ops_per_sec: f64,
}

pub fn run_bench(tree: &RouteTreeNode<RouteNames>, options: &BenchOptions) -> Result<BenchStats, String> {
    if options.paths.is_empty() {
        return Err("No paths specified".to_string());
    }
    if options.iterations == 0 {
        return Err("Iterations must be greater than zero".to_string());
    }

    let requests: Vec<SegmentedPath> = options.paths.iter().map(|p| SegmentedPath::parse(p)).collect();
    let matcher = Matcher::new(tree);

    for _ in 0..options.warmup {
        for request in &requests {
            std::hint::black_box(matcher.match_request(request));
        }
    }

    let mut matched = 0usize;
    let start = Instant::now();
    for _ in 0..options.iterations {
        for request in &requests {
            if std::hint::black_box(matcher.match_request(request)).is_some() {
                matched += 1;
            }
        }
    }
    let elapsed = start.elapsed();

    let ops = options.iterations * requests.len();
    let total_ns = elapsed.as_nanos() as f64;
    let ns_per_op = total_ns / ops as f64;
    let ops_per_sec = if total_ns > 0.0 { ops as f64 * 1e9 / total_ns } else { f64::INFINITY };

    Ok(BenchStats {
        ops,
        matched,
        total_ms: elapsed.as_secs_f64() * 1000.0,
        ns_per_op,
        ops_per_sec,
    })
}
