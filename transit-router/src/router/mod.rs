//! Fastest-route queries over a transit network.
//!
//! The network is expanded once into a directed graph whose edges are bus
//! rides weighted in minutes (see [`builder`]). Queries then run Dijkstra
//! over that immutable graph and render the path as an [`Itinerary`].
//!
//! A built [`TransitRouter`] is `Send + Sync` and every query takes `&self`,
//! so one router can serve many threads at once.

pub mod builder;
mod config;
pub mod dijkstra;
pub mod graph;
mod itinerary;


use tracing::debug;

use crate::domain::NetworkError;
use crate::network::TransitNetwork;

pub use builder::{GraphBuilder, TransitGraph};
pub use config::RouterSettings;
pub use dijkstra::{ShortestPath, shortest_path};
pub use graph::{Edge, EdgeId, VertexId};
pub use itinerary::{Itinerary, RideEdge, Segment};

/// Errors from building the router.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Settings that would produce invalid travel times
    #[error("invalid router settings: {0}")]
    InvalidSettings(&'static str),

    /// The network could not be expanded into a graph
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Answers fastest-route queries between stops.
#[derive(Debug, Clone)]
pub struct TransitRouter {
    settings: RouterSettings,
    graph: TransitGraph,
}

impl TransitRouter {
    /// Build the ride graph for `network`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` for a non-positive velocity, or
    /// `Network(DistanceNotFound)` if a route leg has no road distance.
    pub fn build(settings: RouterSettings, network: &TransitNetwork) -> Result<Self, RouterError> {
        settings.validate()?;
        let graph = GraphBuilder::new(network, settings).build()?;
        Ok(Self { settings, graph })
    }

    /// Find the fastest itinerary from one stop to another.
    ///
    /// Returns `None` if either stop is served by no route or the target
    /// cannot be reached. A stop routed to itself yields an empty itinerary.
    pub fn find_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        let (Some(from_vertex), Some(to_vertex)) = (self.graph.vertex(from), self.graph.vertex(to)) else {
            debug!(from, to, "Route query names a stop outside the graph");
            return None;
        };

        let path = shortest_path(&self.graph.graph, from_vertex, to_vertex)?;
        Some(Itinerary::from_path(
            &path,
            &self.graph.rides,
            self.settings.wait_time(),
        ))
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouterError::InvalidSettings("bus velocity must be a positive number");
        assert_eq!(
            err.to_string(),
            "invalid router settings: bus velocity must be a positive number"
        );

        let err = RouterError::from(NetworkError::DistanceNotFound {
            from: "A".into(),
            to: "B".into(),
        });
        assert_eq!(err.to_string(), "no road distance recorded between A and B");
    }

    #[test]
    fn router_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransitRouter>();
    }

    #[test]
    fn build_rejects_bad_settings() {
        let network = TransitNetwork::new();
        let err = TransitRouter::build(RouterSettings::new(6, 0.0), &network).unwrap_err();
        assert!(matches!(err, RouterError::InvalidSettings(_)));
    }
}
