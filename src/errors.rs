use thiserror::Error;

use crate::graph::{Node, NumNodes};

/// Errors raised while constructing a graph from raw edges.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge endpoint {endpoint} outside of [1, {number_of_nodes}]")]
    InvalidEndpoint {
        endpoint: Node,
        number_of_nodes: NumNodes,
    },
}

/// Errors raised while parsing the line-oriented instance format.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("line must start with 'V' or 'E', got {0:?}")]
    UnknownDirective(char),

    #[error("cannot parse vertex count: {0}")]
    MalformedVertexCount(String),

    #[error("cannot parse edge list: {0}")]
    MalformedEdgeList(String),

    #[error("edge list given before any vertex count")]
    MissingVertexCount,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures of the SAT oracle integration itself, as opposed to a regular
/// unsatisfiable or timed-out decision. Aborts the round that hit it.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("sat solver rejected the formula: {0}")]
    Integration(String),

    #[error("sat solver worker vanished without an answer")]
    WorkerVanished,
}
