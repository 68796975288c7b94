//! Stop-sequence feed extractor: one row per stop, denormalized with its
//! owning route/sub-route/operator context.

use std::path::Path;

use roxmltree::{Document, Node};

use super::xml::{child, children, feed_namespace, text_at};
use crate::Error;
use crate::model::{Scalar, StopOfRouteRecord, coerce_numeric_columns};

/// Read a stop-sequence feed document and flatten it.
pub fn read_stops_of_route<P: AsRef<Path>>(path: P) -> Result<Vec<StopOfRouteRecord>, Error> {
    let xml = std::fs::read_to_string(path)?;
    parse_stops_of_route(&xml)
}

/// Flatten an in-memory stop-sequence feed document.
///
/// Each `<BusStopOfRoute>` is one route-direction group; its context fields
/// repeat on every `<Stop>` row. A group with zero stops emits zero rows.
/// After extraction, `StopSequence`/`PositionLon`/`PositionLat` get the
/// column-wide best-effort numeric coercion pass.
pub fn parse_stops_of_route(xml: &str) -> Result<Vec<StopOfRouteRecord>, Error> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let ns = feed_namespace(root);

    let mut records = Vec::new();
    for group in children(root, ns, "BusStopOfRoute") {
        for stop in stops_of(group, ns) {
            records.push(flatten(group, stop, ns));
        }
    }
    coerce_numeric_columns(&mut records);
    Ok(records)
}

fn stops_of<'a>(group: Node<'a, 'a>, ns: &'a str) -> impl Iterator<Item = Node<'a, 'a>> + 'a {
    child(group, ns, "Stops")
        .into_iter()
        .flat_map(move |list| children(list, ns, "Stop"))
}

fn flatten(group: Node, stop: Node, ns: &str) -> StopOfRouteRecord {
    StopOfRouteRecord {
        route_uid: text_at(group, ns, &["RouteUID"]),
        route_id: text_at(group, ns, &["RouteID"]),
        route_name_zh: text_at(group, ns, &["RouteName", "Zh_tw"]),
        route_name_en: text_at(group, ns, &["RouteName", "En"]),
        sub_route_uid: text_at(group, ns, &["SubRouteUID"]),
        sub_route_id: text_at(group, ns, &["SubRouteID"]),
        sub_route_name_zh: text_at(group, ns, &["SubRouteName", "Zh_tw"]),
        sub_route_name_en: text_at(group, ns, &["SubRouteName", "En"]),
        // raw string on purpose; only the route feed coerces Direction
        direction: text_at(group, ns, &["Direction"]),
        city: text_at(group, ns, &["City"]),
        city_code: text_at(group, ns, &["CityCode"]),
        operator_id: text_at(group, ns, &["Operators", "Operator", "OperatorID"]),
        operator_name_zh: text_at(group, ns, &["Operators", "Operator", "OperatorName", "Zh_tw"]),
        operator_no: text_at(group, ns, &["Operators", "Operator", "OperatorNo"]),
        stop_uid: text_at(stop, ns, &["StopUID"]),
        stop_id: text_at(stop, ns, &["StopID"]),
        stop_name_zh: text_at(stop, ns, &["StopName", "Zh_tw"]),
        stop_name_en: text_at(stop, ns, &["StopName", "En"]),
        stop_boarding: text_at(stop, ns, &["StopBoarding"]),
        stop_sequence: text_at(stop, ns, &["StopSequence"]).map(Scalar::Text),
        position_lon: text_at(stop, ns, &["StopPosition", "PositionLon"]).map(Scalar::Text),
        position_lat: text_at(stop, ns, &["StopPosition", "PositionLat"]).map(Scalar::Text),
        geo_hash: text_at(stop, ns, &["StopPosition", "GeoHash"]),
        station_id: text_at(stop, ns, &["StationID"]),
        station_group_id: text_at(stop, ns, &["StationGroupID"]),
        location_city_code: text_at(stop, ns, &["LocationCityCode"]),
    }
}
