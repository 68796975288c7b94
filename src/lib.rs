/*! Flattening of TDX-style bus XML feeds into tabular records.

Transit-authority open-data feeds come as nested, namespaced XML documents.
This crate turns the three bus feed types into flat tables with a fixed
column order:

- [`read_bus_routes`]: route feed, one row per (route, sub-route) pair with
  the operator list embedded both as JSON and as a first-operator projection;
- [`read_stops_of_route`]: stop-sequence feed, one row per stop with its
  owning route/sub-route/operator context repeated;
- [`read_bus_shapes`]: geometry feed, one row per shape element.

Each extractor is a pure function over one document: it parses the whole
file, emits typed records, and holds no state between calls. Malformed XML
fails the call; a missing field or a failed coercion is a null cell, never an
error, so a structurally valid but sparsely populated document still yields a
complete table.

Records convert to the generic [`Table`](table::Table) through the
[`Tabular`](table::Tabular) trait, which is also what the peripheral helpers
work with: [`files`] discovers and concatenates delimited/GeoJSON inputs,
[`logbook`] maintains and parses timestamped log files.
*/

pub mod error;
pub mod extract;
pub mod files;
pub mod logbook;
pub mod model;
pub mod prelude;
pub mod table;

pub use error::Error;
pub use extract::{
    parse_bus_routes, parse_bus_shapes, parse_stops_of_route, read_bus_routes, read_bus_shapes,
    read_stops_of_route,
};
pub use model::{Operator, RouteRecord, Scalar, ShapeRecord, StopOfRouteRecord};
pub use table::{Cell, Table, Tabular};
