//! Single-source, single-target shortest paths.
//!
//! Weights are travel minutes and never negative, so plain Dijkstra with a
//! binary heap applies. Every query allocates its own scratch vectors, which
//! keeps the graph free of mutable state and safe to share across threads.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// A minimum-weight path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Total weight in minutes.
    pub weight: f64,
    /// Edges in travel order.
    pub edges: Vec<EdgeId>,
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Reversed so that `BinaryHeap` pops the cheapest state first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a minimum-weight path from `from` to `to`.
///
/// Returns `None` when `to` is unreachable or either vertex is out of range.
/// A path from a vertex to itself is empty with weight 0.
pub fn shortest_path(graph: &DirectedWeightedGraph, from: VertexId, to: VertexId) -> Option<ShortestPath> {
    let vertex_count = graph.vertex_count();
    if from >= vertex_count || to >= vertex_count {
        return None;
    }
    if from == to {
        return Some(ShortestPath {
            weight: 0.0,
            edges: Vec::new(),
        });
    }

    let mut best = vec![f64::INFINITY; vertex_count];
    let mut via: Vec<Option<EdgeId>> = vec![None; vertex_count];
    let mut heap = BinaryHeap::new();

    best[from] = 0.0;
    heap.push(State { cost: 0.0, vertex: from });

    while let Some(State { cost, vertex }) = heap.pop() {
        if vertex == to {
            break;
        }
        // Stale entry
        if cost > best[vertex] {
            continue;
        }

        for &edge_id in graph.outgoing(vertex) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let next = cost + edge.weight;
            if next < best[edge.to] {
                best[edge.to] = next;
                via[edge.to] = Some(edge_id);
                heap.push(State {
                    cost: next,
                    vertex: edge.to,
                });
            }
        }
    }

    if best[to].is_infinite() {
        return None;
    }

    let mut edges = Vec::new();
    let mut current = to;
    while let Some(edge_id) = via[current] {
        edges.push(edge_id);
        current = graph.edge(edge_id)?.from;
    }
    edges.reverse();

    Some(ShortestPath {
        weight: best[to],
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::graph::Edge;

    fn graph(vertices: usize, edges: &[(VertexId, VertexId, f64)]) -> DirectedWeightedGraph {
        let mut graph = DirectedWeightedGraph::default();
        for _ in 0..vertices {
            graph.add_vertex();
        }
        for &(from, to, weight) in edges {
            graph.add_edge(Edge { from, to, weight });
        }
        graph
    }

    #[test]
    fn same_vertex_is_empty_path() {
        let g = graph(2, &[(0, 1, 3.0)]);
        let path = shortest_path(&g, 1, 1).unwrap();
        assert_eq!(path.weight, 0.0);
        assert!(path.edges.is_empty());
    }

    #[test]
    fn out_of_range_vertex() {
        let g = graph(2, &[(0, 1, 3.0)]);
        assert!(shortest_path(&g, 0, 5).is_none());
        assert!(shortest_path(&g, 5, 0).is_none());
        assert!(shortest_path(&DirectedWeightedGraph::default(), 0, 0).is_none());
    }

    #[test]
    fn unreachable_target() {
        let g = graph(3, &[(0, 1, 3.0)]);
        assert!(shortest_path(&g, 0, 2).is_none());
        // Edges are directed
        assert!(shortest_path(&g, 1, 0).is_none());
    }

    #[test]
    fn prefers_cheaper_transfer() {
        // Direct 0 -> 2 costs 10, via 1 costs 4 + 3
        let g = graph(3, &[(0, 2, 10.0), (0, 1, 4.0), (1, 2, 3.0)]);
        let path = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path.weight, 7.0);
        assert_eq!(path.edges, vec![1, 2]);
    }

    #[test]
    fn prefers_direct_when_cheaper() {
        let g = graph(3, &[(0, 2, 6.0), (0, 1, 4.0), (1, 2, 3.0)]);
        let path = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path.weight, 6.0);
        assert_eq!(path.edges, vec![0]);
    }

    #[test]
    fn ignores_self_loops_and_cycles() {
        let g = graph(
            4,
            &[(0, 0, 1.0), (0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)],
        );
        let path = shortest_path(&g, 0, 3).unwrap();
        assert_eq!(path.weight, 3.0);
        assert_eq!(path.edges, vec![1, 3, 4]);
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        let path = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path.weight, 0.0);
        assert_eq!(path.edges, vec![0, 1]);
    }

    #[test]
    fn repeated_queries_agree() {
        let g = graph(3, &[(0, 1, 2.0), (1, 2, 2.0), (0, 2, 5.0)]);
        let first = shortest_path(&g, 0, 2);
        let second = shortest_path(&g, 0, 2);
        assert_eq!(first, second);
    }
}
