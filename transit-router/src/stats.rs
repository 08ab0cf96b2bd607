//! Aggregate statistics for routes and stops.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::NetworkError;
use crate::network::TransitNetwork;

/// Statistics of a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    /// Number of calls along the full traversal, counting repeats.
    pub stop_count: usize,
    /// Number of distinct stops.
    pub unique_stop_count: usize,
    /// Road length of the traversal in metres.
    pub route_length: u64,
    /// Road length divided by great-circle length; 0 when the latter is 0.
    pub curvature: f64,
}

/// Routes serving a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopStats {
    /// Route names, sorted.
    pub routes: Vec<String>,
}

impl StopStats {
    /// Returns true if no route calls at the stop.
    pub fn is_unserved(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Compute statistics for the route named `name`.
///
/// Returns `Ok(None)` for an unknown route.
///
/// # Errors
///
/// Returns `DistanceNotFound` if a leg of the traversal has no road distance.
pub fn route_stats(network: &TransitNetwork, name: &str) -> Result<Option<RouteStats>, NetworkError> {
    let Some(route) = network.route_by_name(name) else {
        return Ok(None);
    };

    let traversal = route.traversal();
    let unique_stop_count = traversal.iter().collect::<HashSet<_>>().len();

    let mut route_length = 0u64;
    let mut geo_length = 0.0;
    for leg in traversal.windows(2) {
        route_length += u64::from(network.road_distance(leg[0], leg[1])?);
        geo_length += network.geo_distance(leg[0], leg[1]);
    }

    let curvature = if geo_length > 0.0 {
        route_length as f64 / geo_length
    } else {
        0.0
    };

    Ok(Some(RouteStats {
        stop_count: traversal.len(),
        unique_stop_count,
        route_length,
        curvature,
    }))
}

/// List the routes serving the stop named `name`.
///
/// Returns `None` for an unknown stop, and empty stats for a known stop
/// that no route serves.
pub fn stop_stats(network: &TransitNetwork, name: &str) -> Option<StopStats> {
    let id = network.stop_id(name)?;
    let mut routes: Vec<String> = network
        .routes_through_stop(id)
        .map(|route| route.name.clone())
        .collect();
    routes.sort();
    Some(StopStats { routes })
}
