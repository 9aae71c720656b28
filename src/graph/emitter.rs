//! Writing the graph document and printing the run summary.

use crate::foundation::{Graph, GraphError};
use crate::graph::{ranked_edges, GraphBuild};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes `graph` as a compact JSON document, replacing any existing file.
///
/// Missing parent directories are created.
///
/// # Arguments
///
/// * `path` - Destination of the graph document.
/// * `graph` - The nodes and edges to serialize.
///
pub fn write_graph(path: &Path, graph: &Graph) -> Result<(), GraphError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GraphError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| GraphError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, graph).map_err(|e| GraphError::io(path, e.into()))?;
    writer.flush().map_err(|e| GraphError::io(path, e))?;

    info!(
        path = %path.display(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph written"
    );
    Ok(())
}

/// What the console summary includes.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    /// Print the whole graph as pretty JSON.
    pub dump_graph: bool,
    /// How many of the heaviest edges to list.
    pub top_edges: usize,
}

/// Prints the run summary: the graph dump, the heaviest edges, the strongest
/// pair and the edge count.
pub fn print_summary<W: Write>(
    out: &mut W,
    build: &GraphBuild,
    options: SummaryOptions,
) -> io::Result<()> {
    if options.dump_graph {
        serde_json::to_writer_pretty(&mut *out, &build.graph)?;
        writeln!(out)?;
    }

    let top: Vec<_> = ranked_edges(&build.graph)
        .into_iter()
        .take(options.top_edges)
        .collect();
    if !top.is_empty() {
        writeln!(out, "\x1b[1m\x1b[34mTop {} edges:\x1b[0m", top.len())?;
        for (rank, edge) in top.iter().enumerate() {
            writeln!(
                out,
                "  {:>3}. {} - {} ({})",
                rank + 1,
                edge.source,
                edge.target,
                edge.weight
            )?;
        }
    }

    match &build.strongest {
        Some(pair) => writeln!(
            out,
            "\x1b[33mStrongest pair: {} - {} ({})\x1b[0m",
            pair.source, pair.target, pair.weight
        )?,
        None => writeln!(out, "\x1b[33mNo artist pairs found.\x1b[0m")?,
    }

    writeln!(out, "{}", build.graph.edges.len())?;
    Ok(())
}
