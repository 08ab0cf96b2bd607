//! In-memory network model: stops, routes and the distances between stops.
//!
//! The model is populated once by a loader and is read-only afterwards.
//! Stops and routes live in append-only arenas; the rest of the crate
//! refers to them by `StopId` and `RouteId`.

mod geo_cache;

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use crate::domain::{Coordinates, NetworkError, Route, RouteId, Stop, StopId, Topology};
use crate::geo;

pub use geo_cache::{CacheConfig, GeoDistanceCache};

/// Stops, routes and distances of a transit network.
#[derive(Debug, Default)]
pub struct TransitNetwork {
    stops: Vec<Stop>,
    routes: Vec<Route>,
    stop_index: HashMap<String, StopId>,
    route_index: HashMap<String, RouteId>,
    /// Routes serving each stop.
    stop_routes: HashMap<StopId, BTreeSet<RouteId>>,
    /// Directed road distances in metres.
    road_distances: HashMap<(StopId, StopId), u32>,
    geo_distances: GeoDistanceCache,
}

impl TransitNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with a custom geo-distance cache.
    pub fn with_cache_config(config: &CacheConfig) -> Self {
        Self {
            geo_distances: GeoDistanceCache::new(config),
            ..Self::default()
        }
    }

    /// Add a stop.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateStop` if a stop with this name already exists; the
    /// existing stop is left untouched.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, NetworkError> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            warn!(stop = %name, "Rejected duplicate stop");
            return Err(NetworkError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        Ok(id)
    }

    /// Add a route over already-known stops.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStop` if any stop name is absent, or `DuplicateRoute`
    /// if the route name is taken. Nothing is stored on error.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        topology: Topology,
    ) -> Result<RouteId, NetworkError> {
        let name = name.into();
        if self.route_index.contains_key(&name) {
            warn!(route = %name, "Rejected duplicate route");
            return Err(NetworkError::DuplicateRoute(name));
        }

        let stops = stop_names
            .iter()
            .map(|stop| self.resolve(stop.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = RouteId(self.routes.len());
        for stop in &stops {
            self.stop_routes.entry(*stop).or_default().insert(id);
        }
        self.route_index.insert(name.clone(), id);
        self.routes.push(Route::new(name, stops, topology));
        Ok(id)
    }

    /// Record the road distance in metres from one stop to another.
    ///
    /// Setting a pair again replaces the previous value.
    pub fn set_road_distance(&mut self, from: &str, to: &str, metres: u32) -> Result<(), NetworkError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.road_distances.insert((from, to), metres);
        Ok(())
    }

    /// Road distance in metres from `from` to `to`.
    ///
    /// Falls back to the reverse direction when only that one is recorded.
    /// Ids that do not belong to this network yield 0.
    ///
    /// # Errors
    ///
    /// Returns `DistanceNotFound` if neither direction is recorded.
    pub fn road_distance(&self, from: StopId, to: StopId) -> Result<u32, NetworkError> {
        let (Some(from_stop), Some(to_stop)) = (self.stop(from), self.stop(to)) else {
            return Ok(0);
        };

        self.road_distances
            .get(&(from, to))
            .or_else(|| self.road_distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| NetworkError::DistanceNotFound {
                from: from_stop.name.clone(),
                to: to_stop.name.clone(),
            })
    }

    /// Great-circle distance in metres between two stops, memoized per pair.
    ///
    /// Ids that do not belong to this network yield 0.
    pub fn geo_distance(&self, from: StopId, to: StopId) -> f64 {
        let (Some(from_stop), Some(to_stop)) = (self.stop(from), self.stop(to)) else {
            return 0.0;
        };
        self.geo_distances.get_or_compute(from, to, || {
            geo::distance(from_stop.coordinates, to_stop.coordinates)
        })
    }

    /// Every route with at least one stop, sorted by name.
    pub fn all_routes_with_stops(&self) -> Vec<&Route> {
        let mut routes: Vec<&Route> = self.routes.iter().filter(|r| !r.stops.is_empty()).collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));
        routes
    }

    /// Routes serving a stop, in insertion order.
    pub fn routes_through_stop(&self, stop: StopId) -> impl Iterator<Item = &Route> + '_ {
        self.stop_routes
            .get(&stop)
            .into_iter()
            .flatten()
            .filter_map(|id| self.route(*id))
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.0)
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).and_then(|id| self.stop(id))
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.route_id(name).and_then(|id| self.route(id))
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    fn resolve(&self, name: &str) -> Result<StopId, NetworkError> {
        self.stop_id(name)
            .ok_or_else(|| NetworkError::UnknownStop(name.to_string()))
    }
}
