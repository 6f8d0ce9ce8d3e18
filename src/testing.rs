use rand::Rng;

use crate::graph::{Edge, Graph, NumNodes, random_gnp};

/// Endless stream of random instances with varying size and density, used by
/// the cross-validation tests.
pub fn random_instance_stream<R: Rng>(
    rng: &mut R,
    max_nodes: NumNodes,
) -> impl Iterator<Item = Graph> + '_ {
    assert!(max_nodes >= 2);
    (0..).map(move |_| {
        let n = rng.gen_range(2..=max_nodes);
        let p = rng.gen_range(0.05..0.6);
        random_gnp(rng, n, p)
    })
}

/// Smallest cover size by exhaustive subset search; the reference the solver
/// tests compare against. Keep the graphs small.
pub fn brute_force_minimum_size(graph: &Graph) -> usize {
    let n = graph.number_of_nodes();
    assert!(n <= 20);

    (0u64..(1 << n))
        .filter(|mask| {
            graph
                .edges()
                .iter()
                .all(|&Edge(u, v)| mask & (1 << (u - 1)) != 0 || mask & (1 << (v - 1)) != 0)
        })
        .map(|mask| mask.count_ones() as usize)
        .min()
        .expect("the full vertex set covers every edge")
}
