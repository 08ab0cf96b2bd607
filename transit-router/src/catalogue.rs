//! Entry point shared by the input reader and the response writer.
//!
//! `TransitCatalogue` owns the network and, once initialized, the router
//! built from it. The three outcomes of a route query are kept apart:
//! `Err(NotInitialized)`, `Ok(None)` for no route, and `Ok(Some(_))`.

use crate::domain::NetworkError;
use crate::network::TransitNetwork;
use crate::router::{Itinerary, RouterError, RouterSettings, TransitRouter};
use crate::stats::{self, RouteStats, StopStats};

/// Errors surfaced by the catalogue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// A route query arrived before the router was built
    #[error("router is not initialized")]
    NotInitialized,

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Router(#[from] RouterError),
}

/// A transit network together with its router.
#[derive(Debug, Default)]
pub struct TransitCatalogue {
    network: TransitNetwork,
    router: Option<TransitRouter>,
}

impl TransitCatalogue {
    /// Create a catalogue with an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-loaded network.
    pub fn from_network(network: TransitNetwork) -> Self {
        Self {
            network,
            router: None,
        }
    }

    pub fn network(&self) -> &TransitNetwork {
        &self.network
    }

    /// Mutable access for loading. Drops a router built from the old network.
    pub fn network_mut(&mut self) -> &mut TransitNetwork {
        self.router = None;
        &mut self.network
    }

    /// Build the router over the current network.
    pub fn init_router(&mut self, settings: RouterSettings) -> Result<(), CatalogueError> {
        self.router = Some(TransitRouter::build(settings, &self.network)?);
        Ok(())
    }

    pub fn router(&self) -> Option<&TransitRouter> {
        self.router.as_ref()
    }

    pub fn is_router_initialized(&self) -> bool {
        self.router.is_some()
    }

    /// Fastest itinerary between two stops.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if [`init_router`](Self::init_router) has not succeeded.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, CatalogueError> {
        let router = self.router.as_ref().ok_or(CatalogueError::NotInitialized)?;
        Ok(router.find_route(from, to))
    }

    pub fn route_stats(&self, name: &str) -> Result<Option<RouteStats>, CatalogueError> {
        Ok(stats::route_stats(&self.network, name)?)
    }

    pub fn stop_stats(&self, name: &str) -> Option<StopStats> {
        stats::stop_stats(&self.network, name)
    }
}
