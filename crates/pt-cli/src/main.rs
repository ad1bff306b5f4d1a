//! PathTree CLI
//!
//! CLI tool for building route trees from route tables and matching paths
//! against them.

mod bench;
mod table;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use pt_core::{match_route, SegmentedPath};

use crate::bench::{run_bench, BenchOptions};
use crate::table::{dump_tree, load_tree};

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "PathTree route table tools")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match paths against a route table
    Match {
        /// Route table (JSON array of {"pattern", "name"})
        #[arg(short, long)]
        routes: PathBuf,

        /// Paths to match
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the composed route tree
    Inspect {
        /// Route table to compose
        #[arg(short, long)]
        routes: PathBuf,
    },

    /// Measure matching throughput
    Bench {
        /// Route table to compose
        #[arg(short, long)]
        routes: PathBuf,

        /// Passes over the path list
        #[arg(short, long, default_value_t = 100_000)]
        iterations: usize,

        /// Untimed passes before measuring
        #[arg(long, default_value_t = 1_000)]
        warmup: usize,

        /// Paths to match
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let result = match cli.command {
        Commands::Match { routes, paths } => cmd_match(&routes, &paths),
        Commands::Inspect { routes } => cmd_inspect(&routes),
        Commands::Bench {
            routes,
            iterations,
            warmup,
            paths,
        } => cmd_bench(&routes, iterations, warmup, paths),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_match(routes: &Path, paths: &[String]) -> Result<(), String> {
    let tree = load_tree(routes)?;

    for path in paths {
        let report = match_route(&tree, &SegmentedPath::parse(path));
        let line = serde_json::to_string(&report)
            .map_err(|e| format!("Failed to encode result for '{}': {}", path, e))?;
        println!("{}", line);
    }

    Ok(())
}

fn cmd_inspect(routes: &Path) -> Result<(), String> {
    let tree = load_tree(routes)?;
    print!("{}", dump_tree(&tree));
    Ok(())
}

fn cmd_bench(routes: &Path, iterations: usize, warmup: usize, paths: Vec<String>) -> Result<(), String> {
    let tree = load_tree(routes)?;
    let options = BenchOptions {
        paths,
        iterations,
        warmup,
    };
    let stats = run_bench(&tree, &options)?;

    println!("Matched {} of {} lookups", stats.matched, stats.ops);
    println!("  Time:     {:.1}ms", stats.total_ms);
    println!("  Per op:   {:.1}ns", stats.ns_per_op);
    println!("  Rate:     {:.0} ops/s", stats.ops_per_sec);

    Ok(())
}
