use fxhash::FxHashMap;

use crate::{
    graph::{Graph, Node, NumNodes},
    utils::VertexCover,
};

/// # Greedy cover via repeated maximum degree
///
/// Works on a private copy of the edge list. Each round moves the vertex
/// covering the most remaining edges into the cover and drops everything it
/// covers. Ties go to the smallest vertex id, so repeated runs on the same
/// input produce identical covers.
///
/// Returns the cover sorted ascending. Practical quality is close to a factor
/// of two without any enforced bound.
pub fn approx_by_max_degree(graph: &Graph) -> VertexCover {
    let mut remaining = graph.edges().to_vec();
    let mut cover = VertexCover::new(graph.number_of_nodes());

    while !remaining.is_empty() {
        let mut degrees: FxHashMap<Node, NumNodes> = FxHashMap::default();
        for edge in &remaining {
            *degrees.entry(edge.0).or_default() += 1;
            *degrees.entry(edge.1).or_default() += 1;
        }

        let best = degrees
            .iter()
            .max_by_key(|&(&u, &degree)| (degree, std::cmp::Reverse(u)))
            .map(|(&u, _)| u)
            .expect("remaining edges have endpoints");

        cover.add_node(best);
        remaining.retain(|e| !e.is_incident_to(best));
    }

    cover.into_sorted()
}
