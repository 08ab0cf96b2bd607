//! Transit network router.
//!
//! An in-memory model of bus routes and stops that answers two kinds of
//! question: "what are the statistics of this route or stop?" and "what is
//! the fastest way from this stop to that one?"
//!
//! ```
//! use transit_router::domain::{Coordinates, Topology};
//! use transit_router::network::TransitNetwork;
//! use transit_router::router::{RouterSettings, TransitRouter};
//!
//! let mut network = TransitNetwork::new();
//! network.add_stop("A", Coordinates::new(0.0, 0.0).unwrap()).unwrap();
//! network.add_stop("B", Coordinates::new(0.0, 1.0).unwrap()).unwrap();
//! network.add_stop("C", Coordinates::new(0.0, 2.0).unwrap()).unwrap();
//! network.set_road_distance("A", "B", 1000).unwrap();
//! network.set_road_distance("B", "C", 1000).unwrap();
//! network.add_route("1", &["A", "B", "C"], Topology::RoundTrip).unwrap();
//!
//! let router = TransitRouter::build(RouterSettings::new(5, 30.0), &network).unwrap();
//! let itinerary = router.find_route("A", "C").unwrap();
//! assert_eq!(itinerary.total_time, 9.0);
//! assert_eq!(itinerary.ride_count(), 1);
//! ```

pub mod catalogue;
pub mod domain;
pub mod geo;
pub mod network;
pub mod router;
pub mod stats;
