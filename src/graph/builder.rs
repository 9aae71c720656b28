use crate::foundation::{Edge, Graph, Node};
use crate::graph::CoOccurrence;
use indexmap::IndexSet;
use tracing::debug;

/// Minimum co-occurrence weight for a pair to become an edge.
pub const DEFAULT_THRESHOLD: u64 = 1000;

/// Output of the filter stage.
#[derive(Debug, Clone, Default)]
pub struct GraphBuild {
    pub graph: Graph,
    /// Heaviest pair in the whole table, with `source < target`. It may be
    /// below the threshold, in which case it is not among `graph.edges`.
    pub strongest: Option<Edge>,
}

/// Turns the co-occurrence table into a graph.
///
/// Every pair with `weight >= threshold` becomes an edge, in table order, and
/// both of its artists become nodes. Artists that only appear in pairs below
/// the threshold are left out, so no node is ever orphaned.
///
/// The strongest pair is tracked over all pairs with a strict `>`, so the
/// first pair reaching the maximum wins ties.
///
/// # Arguments
///
/// * `table` - The finished co-occurrence table.
/// * `threshold` - The minimum weight kept as an edge.
///
pub fn build_graph(table: &CoOccurrence, threshold: u64) -> GraphBuild {
    let mut strongest: Option<Edge> = None;
    let mut artists: IndexSet<&str> = IndexSet::new();
    let mut edges = Vec::new();

    for (source, target, weight) in table.iter() {
        if strongest.as_ref().map_or(true, |best| weight > best.weight) {
            strongest = Some(Edge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            });
        }

        if weight >= threshold {
            artists.insert(source);
            artists.insert(target);
            edges.push(Edge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            });
        }
    }

    let nodes = artists
        .into_iter()
        .map(|id| Node { id: id.to_string() })
        .collect();

    debug!(threshold, pairs = table.len(), edges = edges.len(), "graph filtered");

    GraphBuild {
        graph: Graph { nodes, edges },
        strongest,
    }
}

/// Edges by descending weight; equal weights keep their graph order.
pub fn ranked_edges(graph: &Graph) -> Vec<&Edge> {
    let mut ranked: Vec<&Edge> = graph.edges.iter().collect();
    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
    ranked
}
