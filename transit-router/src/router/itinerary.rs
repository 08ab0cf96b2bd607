//! Itinerary types.
//!
//! An `Itinerary` is the user-facing answer to a route query: the total
//! travel time and, for every bus taken, a wait at the boarding stop
//! followed by the ride itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::dijkstra::ShortestPath;
use super::graph::EdgeId;
use crate::domain::RouteId;

/// Ride metadata for one graph edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RideEdge {
    pub route: RouteId,
    pub route_name: Arc<str>,
    /// Number of stop-to-stop legs covered.
    pub span_count: usize,
    /// Minutes on board, excluding the wait.
    pub ride_time: f64,
    pub from: Arc<str>,
    pub to: Arc<str>,
}

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Segment {
    /// Waiting for a bus at a stop
    Wait { stop: String, duration: f64 },
    /// Riding a bus across `span_count` legs
    Ride {
        route: String,
        from: String,
        to: String,
        duration: f64,
        span_count: usize,
    },
}

impl Segment {
    /// Returns the duration of this segment in minutes.
    pub fn duration(&self) -> f64 {
        match self {
            Segment::Wait { duration, .. } | Segment::Ride { duration, .. } => *duration,
        }
    }

    /// Returns true if this is a wait segment.
    pub fn is_wait(&self) -> bool {
        matches!(self, Segment::Wait { .. })
    }

    /// Returns true if this is a ride segment.
    pub fn is_ride(&self) -> bool {
        matches!(self, Segment::Ride { .. })
    }
}

/// The answer to a route query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Total travel time in minutes, waits included.
    pub total_time: f64,
    pub segments: Vec<Segment>,
}

impl Itinerary {
    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_ride()).count()
    }

    /// Render a shortest path as wait/ride pairs.
    ///
    /// Edges without ride metadata are skipped.
    pub fn from_path(path: &ShortestPath, rides: &[RideEdge], wait_time: f64) -> Self {
        let segments = path
            .edges
            .iter()
            .filter_map(|&id: &EdgeId| rides.get(id))
            .flat_map(|ride| {
                [
                    Segment::Wait {
                        stop: ride.from.to_string(),
                        duration: wait_time,
                    },
                    Segment::Ride {
                        route: ride.route_name.to_string(),
                        from: ride.from.to_string(),
                        to: ride.to.to_string(),
                        duration: ride.ride_time,
                        span_count: ride.span_count,
                    },
                ]
            })
            .collect();

        Self {
            total_time: path.weight,
            segments,
        }
    }
}
