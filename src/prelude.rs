// Re-export of key components
pub use crate::error::Error;
pub use crate::extract::{
    parse_bus_routes, parse_bus_shapes, parse_stops_of_route, read_bus_routes, read_bus_shapes,
    read_stops_of_route,
};
pub use crate::files::{find_files, read_combined};
pub use crate::logbook::{LogBook, LogEntry, parse_log_file};
pub use crate::model::{Operator, RouteRecord, Scalar, ShapeRecord, StopOfRouteRecord};
pub use crate::table::{Cell, Table, Tabular};
