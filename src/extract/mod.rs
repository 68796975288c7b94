//! The three feed extractors: XML document in, flat records out
//!
//! Each extractor fully parses one document per call and shares only the
//! namespace/lookup conventions in [`xml`](self::xml). Malformed XML is fatal
//! for the call; a missing field is a null cell.

mod route;
mod shape;
mod stop_sequence;
mod xml;

pub use route::{parse_bus_routes, read_bus_routes};
pub use shape::{parse_bus_shapes, read_bus_shapes};
pub use stop_sequence::{parse_stops_of_route, read_stops_of_route};
