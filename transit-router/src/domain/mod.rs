//! Domain types for the transit network.
//!
//! Stops and routes are stored in append-only arenas owned by the network
//! model and referenced everywhere else by `StopId` and `RouteId`.
//! Coordinates enforce their range at construction time, so code that
//! receives them can trust their validity.

mod error;
mod route;
mod stop;

pub use error::NetworkError;
pub use route::{Route, RouteId, Topology};
pub use stop::{Coordinates, InvalidCoordinates, Stop, StopId};
