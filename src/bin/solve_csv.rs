//! Runs a solver over every `*.csv` edge list in a directory.
//!
//! Usage: `solve_csv [DIR] [ALGORITHM] [--undirected]`
//!
//! The first vertex of each file is used as the source.

use log::{error, info, warn};
use relax_paths::io::{read_graph_from_path, EdgeDirection};
use relax_paths::{solve, Algorithm};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut positional = Vec::new();
    let mut direction = EdgeDirection::Directed;
    for arg in env::args().skip(1) {
        if arg == "--undirected" {
            direction = EdgeDirection::Undirected;
        } else {
            positional.push(arg);
        }
    }

    let directory = PathBuf::from(positional.first().map(String::as_str).unwrap_or("./data/bellman-ford"));
    let algorithm: Algorithm = positional.get(1).map(String::as_str).unwrap_or("bellman-ford").parse()?;

    let mut files: Vec<PathBuf> = fs::read_dir(&directory)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "csv"))
        .collect();
    files.sort();

    if files.is_empty() {
        warn!("No .csv files in {}", directory.display());
    }

    for file in &files {
        if let Err(err) = run_file(file, algorithm, direction) {
            error!("{}: {}", file.display(), err);
        }
    }

    Ok(())
}

fn run_file(file: &Path, algorithm: Algorithm, direction: EdgeDirection) -> relax_paths::Result<()> {
    let graph = read_graph_from_path(file, direction)?;
    let source = match graph.vertex(0) {
        Some(source) => source.clone(),
        None => {
            warn!("{}: empty graph, skipping", file.display());
            return Ok(());
        }
    };

    let start = Instant::now();
    let result = solve(&graph, 0, algorithm)?;
    let elapsed = start.elapsed();

    info!(
        "{}: {} from {} over {} vertices / {} edges in {:?}",
        file.display(),
        algorithm,
        source,
        graph.vertex_count(),
        graph.edge_count(),
        elapsed
    );
    if result.has_negative_cycle() {
        warn!("{}: negative-weight cycle reachable from {}; distances are unreliable", file.display(), source);
    }

    for (vertex, distance) in result.labeled_distances(&graph) {
        match distance {
            Some(distance) => println!("  {} -> {}: {}", source, vertex, distance),
            None => println!("  {} -> {}: unreachable", source, vertex),
        }
    }

    Ok(())
}
