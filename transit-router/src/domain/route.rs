//! Bus route types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StopId;

/// Stable handle of a route inside a [`TransitNetwork`](crate::network::TransitNetwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Position of the route in insertion order.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route#{}", self.0)
    }
}

/// How a vehicle runs along its stop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// The stop list is run as given; a loop lists its origin again at the end.
    RoundTrip,
    /// The stop list is run forward, then backward to the first stop.
    OutAndBack,
}

/// A bus route: an ordered list of stops and the way it is run.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    /// Stops as given at load time, without the return half of an out-and-back route.
    pub stops: Vec<StopId>,
    pub topology: Topology,
}

impl Route {
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, topology: Topology) -> Self {
        Self {
            name: name.into(),
            stops,
            topology,
        }
    }

    pub fn is_round_trip(&self) -> bool {
        self.topology == Topology::RoundTrip
    }

    /// Every stop the vehicle calls at, in order.
    ///
    /// An out-and-back route `[A, B, C]` is traversed as `A, B, C, B, A`.
    pub fn traversal(&self) -> Vec<StopId> {
        match self.topology {
            Topology::RoundTrip => self.stops.clone(),
            Topology::OutAndBack => {
                let mut stops = self.stops.clone();
                if let Some((_, outbound)) = self.stops.split_last() {
                    stops.extend(outbound.iter().rev().copied());
                }
                stops
            }
        }
    }

    /// Number of leading traversal stops from which ride edges originate.
    ///
    /// The return half of an out-and-back route mirrors the outbound half,
    /// so only `len / 2 + 1` origins are needed there.
    pub fn distinct_origins(&self) -> usize {
        match self.topology {
            Topology::RoundTrip => self.stops.len(),
            Topology::OutAndBack => {
                let traversal_len = (2 * self.stops.len()).saturating_sub(1);
                if traversal_len == 0 {
                    0
                } else {
                    traversal_len / 2 + 1
                }
            }
        }
    }
}
