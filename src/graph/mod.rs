pub mod edge;
pub mod gnp;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

pub use edge::*;
pub use gnp::*;

use std::ops::RangeInclusive;

use crate::errors::GraphError;

/// An undirected graph given as a vertex count and an ordered edge list.
/// Vertices are numbered `1..=n`; the wire format, the cover report, and all
/// solver results use the same 1-based ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    number_of_nodes: NumNodes,
    edges: Vec<Edge>,
}

impl Graph {
    /// Constructs a graph after checking that every endpoint lies in `[1, n]`.
    pub fn try_from_edges(
        number_of_nodes: NumNodes,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let edges: Vec<Edge> = edges.into_iter().collect();

        for &Edge(u, v) in &edges {
            for endpoint in [u, v] {
                if endpoint == 0 || endpoint > number_of_nodes {
                    return Err(GraphError::InvalidEndpoint {
                        endpoint,
                        number_of_nodes,
                    });
                }
            }
        }

        Ok(Self {
            number_of_nodes,
            edges,
        })
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns an iterator over V, i.e. `1..=n`.
    pub fn vertices(&self) -> RangeInclusive<Node> {
        1..=self.number_of_nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.edges
            .iter()
            .map(|e| e.num_endpoints_at(u))
            .sum::<NumNodes>()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }
}
