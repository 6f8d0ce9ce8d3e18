pub mod edge_matching;
pub mod max_degree;

pub use edge_matching::*;
pub use max_degree::*;
