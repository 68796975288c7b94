//! Typed records produced by the extractors
//!
//! One struct per feed type, with the column order of the flattened output
//! fixed by field order. Optional feed fields are `Option`s, never sentinel
//! strings.

mod route;
mod scalar;
mod shape;
mod stop;

pub use route::{Operator, RouteRecord};
pub use scalar::Scalar;
pub use shape::ShapeRecord;
pub use stop::StopOfRouteRecord;

pub(crate) use stop::coerce_numeric_columns;
