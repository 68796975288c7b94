//! Route-geometry feed extractor: one row per `<BusShape>` element.

use std::path::Path;

use roxmltree::{Document, Node};

use super::xml::{children, feed_namespace, text_at};
use crate::Error;
use crate::model::ShapeRecord;

/// Read a route-geometry feed document and flatten it.
pub fn read_bus_shapes<P: AsRef<Path>>(path: P) -> Result<Vec<ShapeRecord>, Error> {
    let xml = std::fs::read_to_string(path)?;
    parse_bus_shapes(&xml)
}

/// Flatten an in-memory route-geometry feed document.
///
/// Straight extraction in source order: no coercion, no nested expansion.
pub fn parse_bus_shapes(xml: &str) -> Result<Vec<ShapeRecord>, Error> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let ns = feed_namespace(root);

    Ok(children(root, ns, "BusShape")
        .map(|shape| flatten(shape, ns))
        .collect())
}

fn flatten(shape: Node, ns: &str) -> ShapeRecord {
    ShapeRecord {
        geometry: text_at(shape, ns, &["Geometry"]),
        encoded_polyline: text_at(shape, ns, &["EncodedPolyline"]),
        route_uid: text_at(shape, ns, &["RouteUID"]),
        route_id: text_at(shape, ns, &["RouteID"]),
        route_name_zh: text_at(shape, ns, &["RouteName", "Zh_tw"]),
        route_name_en: text_at(shape, ns, &["RouteName", "En"]),
        sub_route_uid: text_at(shape, ns, &["SubRouteUID"]),
        sub_route_id: text_at(shape, ns, &["SubRouteID"]),
        sub_route_name_zh: text_at(shape, ns, &["SubRouteName", "Zh_tw"]),
        sub_route_name_en: text_at(shape, ns, &["SubRouteName", "En"]),
        direction: text_at(shape, ns, &["Direction"]),
        update_time: text_at(shape, ns, &["UpdateTime"]),
        // raw string here, unlike the route feed
        version_id: text_at(shape, ns, &["VersionID"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Table, Tabular};

    const NS: &str = "https://ptx.transportdata.tw/standard/schema/";

    #[test]
    fn one_record_per_shape_element() {
        let xml = format!(
            r#"<BusShapes xmlns="{NS}">
                <BusShape>
                    <Geometry>LINESTRING(121.51 25.04,121.52 25.05)</Geometry>
                    <EncodedPolyline>_p~iF~ps|U</EncodedPolyline>
                    <RouteUID>TPE157</RouteUID>
                    <RouteName><Zh_tw>157</Zh_tw></RouteName>
                    <Direction>0</Direction>
                    <VersionID>1443</VersionID>
                </BusShape>
                <BusShape>
                    <RouteUID>TPE158</RouteUID>
                </BusShape>
            </BusShapes>"#
        );
        let records = parse_bus_shapes(&xml).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(
            first.geometry.as_deref(),
            Some("LINESTRING(121.51 25.04,121.52 25.05)")
        );
        assert_eq!(first.encoded_polyline.as_deref(), Some("_p~iF~ps|U"));
        // VersionID stays raw here
        assert_eq!(first.version_id.as_deref(), Some("1443"));

        let second = &records[1];
        assert_eq!(second.route_uid.as_deref(), Some("TPE158"));
        assert_eq!(second.geometry, None);
        assert_eq!(second.encoded_polyline, None);
    }

    #[test]
    fn records_tabulate_with_the_full_column_list() {
        let xml = format!(r#"<BusShapes xmlns="{NS}"><BusShape/></BusShapes>"#);
        let records = parse_bus_shapes(&xml).unwrap();
        let table = Table::from_records(&records);
        assert_eq!(table.columns.len(), ShapeRecord::COLUMNS.len());
        assert_eq!(table.len(), 1);
        assert!(table.rows[0].iter().all(crate::table::Cell::is_null));
    }
}
