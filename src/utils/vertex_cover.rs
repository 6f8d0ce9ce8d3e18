use std::io::Write;

use crate::graph::{Edge, Node, NumNodes};

/// A set of vertices intended to cover every edge of a graph. The three
/// solver strategies all report their solutions as a `VertexCover`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexCover {
    number_of_nodes: NumNodes,
    set: Vec<Node>,
}

impl VertexCover {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            number_of_nodes,
            set: Vec::new(),
        }
    }

    /// Adds a vertex to the cover.
    ///
    /// # Example
    /// ```
    /// use mvc::utils::VertexCover;
    /// let mut cover = VertexCover::new(5);
    /// cover.add_node(3);
    /// assert_eq!(cover.len(), 1);
    /// ```
    pub fn add_node(&mut self, node: Node) {
        assert!(node >= 1 && node <= self.number_of_nodes);
        self.set.push(node);
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for u in nodes {
            self.add_node(u);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns an iterator over the vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.set.iter().copied()
    }

    /// Sorts the cover ascending. The callers never insert a vertex twice, so
    /// the sorted list is duplicate-free.
    ///
    /// # Example
    /// ```
    /// use mvc::utils::VertexCover;
    /// let mut cover = VertexCover::new(5);
    /// cover.add_nodes([4, 1, 3]);
    /// assert_eq!(cover.into_sorted().iter().collect::<Vec<_>>(), vec![1, 3, 4]);
    /// ```
    pub fn into_sorted(mut self) -> Self {
        self.set.sort_unstable();
        debug_assert!(self.set.windows(2).all(|w| w[0] < w[1]));
        self
    }

    /// True if every edge has at least one endpoint in the cover.
    pub fn is_valid_cover(&self, edges: &[Edge]) -> bool {
        edges
            .iter()
            .all(|e| self.set.iter().any(|&u| e.is_incident_to(u)))
    }

    /// Writes the cover size followed by one vertex id per line.
    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(&mut writer, "{}", self.set.len())?;
        for u in &self.set {
            writeln!(&mut writer, "{u}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validity() {
        let edges = [Edge(1, 2), Edge(2, 3), Edge(3, 4)];

        let mut cover = VertexCover::new(4);
        cover.add_nodes([2, 3]);
        assert!(cover.is_valid_cover(&edges));

        let mut too_small = VertexCover::new(4);
        too_small.add_node(2);
        assert!(!too_small.is_valid_cover(&edges));

        let empty = VertexCover::new(4);
        assert!(empty.is_valid_cover(&[]));
        assert!(!empty.is_valid_cover(&edges));
    }

    #[test]
    fn sorted_output() {
        let mut cover = VertexCover::new(9);
        cover.add_nodes([9, 2, 5]);
        let cover = cover.into_sorted();
        assert_eq!(cover.iter().collect::<Vec<_>>(), vec![2, 5, 9]);
    }

    #[test]
    fn write_format() {
        let mut cover = VertexCover::new(5);
        cover.add_nodes([2, 4]);

        let mut buffer: Vec<u8> = Vec::new();
        cover.write(&mut buffer).unwrap();
        assert_eq!(buffer, b"2\n2\n4\n");
    }

    #[test]
    #[should_panic]
    fn rejects_zero() {
        VertexCover::new(3).add_node(0);
    }
}
