//! Expansion of bus routes into a ride graph.
//!
//! Every stop a route serves becomes a vertex. From each origin stop, a
//! route emits one edge to every stop reachable later on the same bus, so
//! a path can ride through several stops on one edge or change buses at
//! any stop in between. Each edge weight is one wait at the origin plus the
//! ride time of every leg it spans.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use super::config::RouterSettings;
use super::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use super::itinerary::RideEdge;
use super::RouterError;
use crate::domain::{Route, RouteId, StopId};
use crate::network::TransitNetwork;

/// Immutable ride graph with per-edge ride metadata.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    pub(crate) graph: DirectedWeightedGraph,
    /// Ride metadata, indexed by `EdgeId`.
    pub(crate) rides: Vec<RideEdge>,
    pub(crate) vertices: HashMap<Arc<str>, VertexId>,
}

impl TransitGraph {
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn vertex(&self, stop_name: &str) -> Option<VertexId> {
        self.vertices.get(stop_name).copied()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.graph.edge(id)
    }

    pub fn ride(&self, id: EdgeId) -> Option<&RideEdge> {
        self.rides.get(id)
    }

    /// Edge ids with their ride metadata, in insertion order.
    pub fn rides(&self) -> impl Iterator<Item = (EdgeId, &Edge, &RideEdge)> + '_ {
        self.rides
            .iter()
            .enumerate()
            .filter_map(|(id, ride)| self.graph.edge(id).map(|edge| (id, edge, ride)))
    }
}

/// One-shot builder from a network to a [`TransitGraph`].
pub struct GraphBuilder<'a> {
    network: &'a TransitNetwork,
    settings: RouterSettings,
    /// Vertex per stop, allocated on first reference.
    stop_vertices: HashMap<StopId, VertexId>,
    names: HashMap<StopId, Arc<str>>,
    out: TransitGraph,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(network: &'a TransitNetwork, settings: RouterSettings) -> Self {
        Self {
            network,
            settings,
            stop_vertices: HashMap::new(),
            names: HashMap::new(),
            out: TransitGraph::default(),
        }
    }

    /// Expand every route with stops, in route-name order.
    ///
    /// # Errors
    ///
    /// Fails if a leg between consecutive stops has no road distance.
    pub fn build(mut self) -> Result<TransitGraph, RouterError> {
        let routes = self.network.all_routes_with_stops();
        if routes.is_empty() {
            debug!("No routes with stops; graph is empty");
            return Ok(self.out);
        }

        for route in &routes {
            self.add_route(route)?;
        }

        debug!(
            routes = routes.len(),
            vertices = self.out.vertex_count(),
            edges = self.out.edge_count(),
            "Ride graph built"
        );
        Ok(self.out)
    }

    fn add_route(&mut self, route: &Route) -> Result<(), RouterError> {
        let Some(route_id) = self.network.route_id(&route.name) else {
            return Ok(());
        };
        let route_name: Arc<str> = Arc::from(route.name.as_str());

        let traversal = route.traversal();
        let origins = route.distinct_origins().min(traversal.len());
        trace!(route = %route.name, stops = traversal.len(), origins, "Expanding route");

        for i in 0..origins {
            let origin = traversal[i];
            self.vertex_for(origin);

            // Forward remainder of the outbound half
            self.add_chain(route_id, &route_name, origin, &traversal[i + 1..origins])?;

            // The bus comes back through the stops already passed
            if !route.is_round_trip() {
                let passed: Vec<StopId> = traversal[..i].iter().rev().copied().collect();
                self.add_chain(route_id, &route_name, origin, &passed)?;
            }
        }
        Ok(())
    }

    /// Emit one edge from `origin` to each stop of `chain`, accumulating leg times.
    fn add_chain(
        &mut self,
        route: RouteId,
        route_name: &Arc<str>,
        origin: StopId,
        chain: &[StopId],
    ) -> Result<(), RouterError> {
        let from = self.vertex_for(origin);
        let from_name = self.name_of(origin);
        let wait = self.settings.wait_time();

        let mut prev = origin;
        let mut ride_time = 0.0;
        for (leg, &next) in chain.iter().enumerate() {
            let metres = self.network.road_distance(prev, next)?;
            ride_time += self.settings.ride_time(metres);

            let to = self.vertex_for(next);
            let to_name = self.name_of(next);
            self.out.graph.add_edge(Edge {
                from,
                to,
                weight: wait + ride_time,
            });
            self.out.rides.push(RideEdge {
                route,
                route_name: Arc::clone(route_name),
                span_count: leg + 1,
                ride_time,
                from: Arc::clone(&from_name),
                to: to_name,
            });
            prev = next;
        }
        Ok(())
    }

    fn vertex_for(&mut self, stop: StopId) -> VertexId {
        if let Some(&vertex) = self.stop_vertices.get(&stop) {
            return vertex;
        }
        let vertex = self.out.graph.add_vertex();
        let name = self.name_of(stop);
        self.stop_vertices.insert(stop, vertex);
        self.out.vertices.insert(name, vertex);
        vertex
    }

    fn name_of(&mut self, stop: StopId) -> Arc<str> {
        let network = self.network;
        Arc::clone(self.names.entry(stop).or_insert_with(|| {
            network
                .stop(stop)
                .map(|s| Arc::from(s.name.as_str()))
                .unwrap_or_else(|| Arc::from(stop.to_string()))
        }))
    }
}
