use fxhash::FxHashSet;
use itertools::Itertools;

use crate::{
    graph::{Edge, Graph, Node},
    utils::VertexCover,
};

/// # Greedy cover via edge matching
///
/// Works on a private copy of the edge list. Each round takes the last
/// remaining edge, puts both endpoints into the cover, and drops every edge
/// either endpoint covers. Deterministic for a fixed input edge order.
///
/// Returns the cover sorted ascending; the endpoint set keeps it free of
/// duplicates.
pub fn approx_by_edge_matching(graph: &Graph) -> VertexCover {
    let mut remaining = graph.edges().to_vec();
    let mut chosen: FxHashSet<Node> = FxHashSet::default();

    while let Some(&Edge(u, v)) = remaining.last() {
        chosen.insert(u);
        chosen.insert(v);
        remaining.retain(|e| !e.is_covered_by_either(u, v));
    }

    let mut cover = VertexCover::new(graph.number_of_nodes());
    cover.add_nodes(chosen.into_iter().sorted());
    cover
}
