use crate::{
    graph::{Edge, Node, NumNodes},
    utils::VertexCover,
};

/// CNF encoding of "the graph has a vertex cover of size exactly k".
///
/// The boolean variables form an n-by-k matrix: variable `x[i][j]` states
/// that vertex `i` occupies position `j` of the cover. Four clause families
/// pin the semantics down:
///
/// 1. every position is occupied by some vertex,
/// 2. no vertex occupies two positions,
/// 3. no position is occupied by two vertices,
/// 4. every edge has an endpoint somewhere in the cover, as one single clause
///    per edge spanning all `2k` position literals of its endpoints.
///
/// Clauses are signed literals over variables `1..=n*k`, the representation
/// the sat solver consumes directly.
#[derive(Clone, Debug)]
pub struct CnfEncoding {
    number_of_nodes: NumNodes,
    cover_size: NumNodes,
    clauses: Vec<Vec<i32>>,
}

impl CnfEncoding {
    pub fn vertex_cover(number_of_nodes: NumNodes, cover_size: NumNodes, edges: &[Edge]) -> Self {
        let (n, k) = (number_of_nodes, cover_size);
        debug_assert!(k >= 1 && k < n);
        debug_assert!(
            edges
                .iter()
                .all(|&Edge(u, v)| (1..=n).contains(&u) && (1..=n).contains(&v))
        );

        // variable of "vertex occupies position", as a positive literal
        let var = |vertex: Node, position: NumNodes| ((vertex - 1) * k + position + 1) as i32;

        let mut clauses: Vec<Vec<i32>> = Vec::new();

        // some vertex occupies position j
        for j in 0..k {
            clauses.push((1..=n).map(|i| var(i, j)).collect());
        }

        // vertex i never occupies two positions
        for i in 1..=n {
            for p in 0..k {
                for q in (p + 1)..k {
                    clauses.push(vec![-var(i, p), -var(i, q)]);
                }
            }
        }

        // position m never holds two vertices
        for m in 0..k {
            for p in 1..=n {
                for q in (p + 1)..=n {
                    clauses.push(vec![-var(p, m), -var(q, m)]);
                }
            }
        }

        // edge (u, v) is covered by some position of u or v; a loop
        // contributes each literal once
        for &Edge(u, v) in edges {
            let mut clause = Vec::with_capacity(2 * k as usize);
            for j in 0..k {
                clause.push(var(u, j));
                if u != v {
                    clause.push(var(v, j));
                }
            }
            clauses.push(clause);
        }

        Self {
            number_of_nodes: n,
            cover_size: k,
            clauses,
        }
    }

    pub fn number_of_vars(&self) -> u32 {
        self.number_of_nodes * self.cover_size
    }

    pub fn clauses(&self) -> &[Vec<i32>] {
        &self.clauses
    }

    /// Extracts the chosen vertices from a satisfying assignment given as one
    /// signed literal per variable. Clause family 2 rules out duplicates; the
    /// result is in variable order, not sorted.
    pub fn cover_from_model(&self, model: &[i32]) -> VertexCover {
        let mut cover = VertexCover::new(self.number_of_nodes);
        cover.add_nodes(
            model
                .iter()
                .filter(|&&lit| lit > 0)
                .map(|&lit| (lit as Node - 1) / self.cover_size + 1),
        );
        cover
    }
}
