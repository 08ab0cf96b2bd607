//! Directed weighted graph with adjacency lists.
//!
//! Edges are append-only; once built the graph is shared read-only between
//! queries.

/// Vertex handle: index into the vertex table.
pub type VertexId = usize;

/// Edge handle: index into the edge table.
pub type EdgeId = usize;

/// A directed edge weighted in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Add a vertex and return its id.
    pub fn add_vertex(&mut self) -> VertexId {
        self.incidence.push(Vec::new());
        self.incidence.len() - 1
    }

    /// Add an edge, growing the vertex table if an endpoint is new.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let needed = edge.from.max(edge.to) + 1;
        if self.incidence.len() < needed {
            self.incidence.resize(needed, Vec::new());
        }
        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Ids of the edges leaving `vertex`.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph = DirectedWeightedGraph::default();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.outgoing(0).is_empty());
        assert!(graph.edge(0).is_none());
    }

    #[test]
    fn add_edges_and_walk_incidence() {
        let mut graph = DirectedWeightedGraph::default();
        for _ in 0..3 {
            graph.add_vertex();
        }
        let e0 = graph.add_edge(Edge { from: 0, to: 1, weight: 1.5 });
        let e1 = graph.add_edge(Edge { from: 0, to: 2, weight: 3.0 });
        let e2 = graph.add_edge(Edge { from: 2, to: 0, weight: 0.0 });

        assert_eq!((e0, e1, e2), (0, 1, 2));
        assert_eq!(graph.outgoing(0), &[0, 1]);
        assert_eq!(graph.outgoing(1), &[] as &[EdgeId]);
        assert_eq!(graph.outgoing(2), &[2]);
        assert_eq!(graph.edge(1).unwrap().weight, 3.0);
    }

    #[test]
    fn add_edge_grows_vertices() {
        let mut graph = DirectedWeightedGraph::default();
        graph.add_edge(Edge { from: 4, to: 1, weight: 1.0 });
        assert_eq!(graph.vertex_count(), 5);

        let v = graph.add_vertex();
        assert_eq!(v, 5);
        assert_eq!(graph.vertex_count(), 6);
    }
}
