//! Bus-route feed extractor: one row per (route, sub-route) pair.

use std::path::Path;

use roxmltree::{Document, Node};

use super::xml::{as_int, as_tristate, child, children, feed_namespace, text_at};
use crate::Error;
use crate::model::{Operator, RouteRecord};

/// Read a bus-route feed document and flatten it.
///
/// I/O failure and malformed XML propagate; everything below document level
/// degrades to null cells.
pub fn read_bus_routes<P: AsRef<Path>>(path: P) -> Result<Vec<RouteRecord>, Error> {
    let xml = std::fs::read_to_string(path)?;
    parse_bus_routes(&xml)
}

/// Flatten an in-memory bus-route feed document.
///
/// Each `<BusRoute>` contributes one record per `<SubRoute>`, or exactly one
/// record with null sub-route fields when it has none. Route-level fields and
/// the operator data repeat on every row of the same route.
pub fn parse_bus_routes(xml: &str) -> Result<Vec<RouteRecord>, Error> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let ns = feed_namespace(root);

    let mut records = Vec::new();
    for route in children(root, ns, "BusRoute") {
        let operators = parse_operators(route, ns);
        let operators_json = serde_json::to_string(&operators)?;
        let first = operators.first().cloned().unwrap_or_default();

        let subroutes: Vec<Node> = child(route, ns, "SubRoutes")
            .map(|list| children(list, ns, "SubRoute").collect())
            .unwrap_or_default();

        if subroutes.is_empty() {
            records.push(flatten(route, None, ns, &operators_json, &first));
        } else {
            for sub in subroutes {
                records.push(flatten(route, Some(sub), ns, &operators_json, &first));
            }
        }
    }
    Ok(records)
}

/// Full ordered `<Operators><Operator>` list of a route.
fn parse_operators(route: Node, ns: &str) -> Vec<Operator> {
    child(route, ns, "Operators")
        .map(|list| {
            children(list, ns, "Operator")
                .map(|op| Operator {
                    operator_id: text_at(op, ns, &["OperatorID"]),
                    name_zh: text_at(op, ns, &["OperatorName", "Zh_tw"]),
                    name_en: text_at(op, ns, &["OperatorName", "En"]),
                    code: text_at(op, ns, &["OperatorCode"]),
                    no: text_at(op, ns, &["OperatorNo"]),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Operator references of a sub-route. IDs only; sub-routes never embed the
/// full operator objects.
fn parse_operator_ids(sub: Node, ns: &str) -> Vec<String> {
    child(sub, ns, "OperatorIDs")
        .map(|list| {
            children(list, ns, "OperatorID")
                .filter_map(|id| id.text())
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn flatten(
    route: Node,
    sub: Option<Node>,
    ns: &str,
    operators_json: &str,
    first: &Operator,
) -> RouteRecord {
    RouteRecord {
        route_uid: text_at(route, ns, &["RouteUID"]),
        route_id: text_at(route, ns, &["RouteID"]),
        has_sub_routes: as_tristate(text_at(route, ns, &["HasSubRoutes"]).as_deref()),
        operators_json: operators_json.to_string(),
        operator_id_first: first.operator_id.clone(),
        operator_name_zh_first: first.name_zh.clone(),
        operator_name_en_first: first.name_en.clone(),
        operator_code_first: first.code.clone(),
        operator_no_first: first.no.clone(),
        authority_id: text_at(route, ns, &["AuthorityID"]),
        provider_id: text_at(route, ns, &["ProviderID"]),
        sub_route_uid: sub.and_then(|s| text_at(s, ns, &["SubRouteUID"])),
        sub_route_id: sub.and_then(|s| text_at(s, ns, &["SubRouteID"])),
        operator_ids: sub.map(|s| parse_operator_ids(s, ns)).unwrap_or_default(),
        sub_route_name_zh: sub.and_then(|s| text_at(s, ns, &["SubRouteName", "Zh_tw"])),
        sub_route_name_en: sub.and_then(|s| text_at(s, ns, &["SubRouteName", "En"])),
        headsign: sub.and_then(|s| text_at(s, ns, &["Headsign"])),
        headsign_en: sub.and_then(|s| text_at(s, ns, &["HeadsignEn"])),
        direction: as_int(
            sub.and_then(|s| text_at(s, ns, &["Direction"]))
                .as_deref(),
        ),
        first_bus_time: sub.and_then(|s| text_at(s, ns, &["FirstBusTime"])),
        last_bus_time: sub.and_then(|s| text_at(s, ns, &["LastBusTime"])),
        holiday_first_bus_time: sub.and_then(|s| text_at(s, ns, &["HolidayFirstBusTime"])),
        holiday_last_bus_time: sub.and_then(|s| text_at(s, ns, &["HolidayLastBusTime"])),
        sub_departure_stop_name_zh: sub.and_then(|s| text_at(s, ns, &["DepartureStopNameZh"])),
        sub_departure_stop_name_en: sub.and_then(|s| text_at(s, ns, &["DepartureStopNameEn"])),
        sub_destination_stop_name_zh: sub.and_then(|s| text_at(s, ns, &["DestinationStopNameZh"])),
        sub_destination_stop_name_en: sub.and_then(|s| text_at(s, ns, &["DestinationStopNameEn"])),
        bus_route_type: as_int(text_at(route, ns, &["BusRouteType"]).as_deref()),
        route_name_zh: text_at(route, ns, &["RouteName", "Zh_tw"]),
        route_name_en: text_at(route, ns, &["RouteName", "En"]),
        departure_stop_name_zh: text_at(route, ns, &["DepartureStopNameZh"]),
        departure_stop_name_en: text_at(route, ns, &["DepartureStopNameEn"]),
        destination_stop_name_zh: text_at(route, ns, &["DestinationStopNameZh"]),
        destination_stop_name_en: text_at(route, ns, &["DestinationStopNameEn"]),
        ticket_price_description_zh: text_at(route, ns, &["TicketPriceDescriptionZh"]),
        ticket_price_description_en: text_at(route, ns, &["TicketPriceDescriptionEn"]),
        fare_buffer_zone_description_zh: text_at(route, ns, &["FareBufferZoneDescriptionZh"]),
        fare_buffer_zone_description_en: text_at(route, ns, &["FareBufferZoneDescriptionEn"]),
        route_map_image_url: text_at(route, ns, &["RouteMapImageUrl"]),
        city: text_at(route, ns, &["City"]),
        city_code: text_at(route, ns, &["CityCode"]),
        update_time: text_at(route, ns, &["UpdateTime"]),
        version_id: as_int(text_at(route, ns, &["VersionID"]).as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Tabular;

    const NS: &str = "https://ptx.transportdata.tw/standard/schema/";

    fn feed(body: &str) -> String {
        format!(r#"<BusRoutes xmlns="{NS}">{body}</BusRoutes>"#)
    }

    const TWO_SUBROUTES: &str = r#"
        <BusRoute>
            <RouteUID>TPE157</RouteUID>
            <RouteID>157</RouteID>
            <HasSubRoutes>true</HasSubRoutes>
            <Operators>
                <Operator>
                    <OperatorID>100</OperatorID>
                    <OperatorName><Zh_tw>大都會客運</Zh_tw><En>Metropolitan Bus</En></OperatorName>
                    <OperatorCode>MetropolitanBus</OperatorCode>
                    <OperatorNo>1407</OperatorNo>
                </Operator>
                <Operator>
                    <OperatorID>200</OperatorID>
                    <OperatorName><Zh_tw>首都客運</Zh_tw></OperatorName>
                </Operator>
            </Operators>
            <SubRoutes>
                <SubRoute>
                    <SubRouteUID>TPE157AM0</SubRouteUID>
                    <SubRouteID>157AM0</SubRouteID>
                    <OperatorIDs><OperatorID>100</OperatorID><OperatorID>200</OperatorID></OperatorIDs>
                    <Direction>0</Direction>
                    <FirstBusTime>0530</FirstBusTime>
                </SubRoute>
                <SubRoute>
                    <SubRouteUID>TPE157AM1</SubRouteUID>
                    <SubRouteID>157AM1</SubRouteID>
                    <Direction>1</Direction>
                </SubRoute>
            </SubRoutes>
            <BusRouteType>3</BusRouteType>
            <RouteName><Zh_tw>157</Zh_tw><En>157</En></RouteName>
            <City>Taipei</City>
            <UpdateTime>2024-05-01T04:00:00+08:00</UpdateTime>
            <VersionID>1443</VersionID>
        </BusRoute>"#;

    #[test]
    fn one_row_per_subroute_sharing_operator_data() {
        let records = parse_bus_routes(&feed(TWO_SUBROUTES)).unwrap();
        assert_eq!(records.len(), 2);

        let (a, b) = (&records[0], &records[1]);
        assert_eq!(a.operators_json, b.operators_json);
        assert_eq!(a.operator_id_first, Some("100".to_string()));
        assert_eq!(a.operator_id_first, b.operator_id_first);
        assert_eq!(a.route_uid, b.route_uid);

        assert_eq!(a.sub_route_uid, Some("TPE157AM0".to_string()));
        assert_eq!(b.sub_route_uid, Some("TPE157AM1".to_string()));
        assert_eq!(a.direction, Some(0));
        assert_eq!(b.direction, Some(1));
        assert_eq!(a.operator_ids, vec!["100", "200"]);
        assert!(b.operator_ids.is_empty());
        assert_eq!(a.first_bus_time, Some("0530".to_string()));
        assert_eq!(b.first_bus_time, None);
    }

    #[test]
    fn route_without_subroutes_yields_one_null_padded_row() {
        let records = parse_bus_routes(&feed(
            r"<BusRoute>
                <RouteUID>KEE701</RouteUID>
                <BusRouteType>3</BusRouteType>
             </BusRoute>",
        ))
        .unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.route_uid, Some("KEE701".to_string()));
        assert_eq!(record.sub_route_uid, None);
        assert!(record.operator_ids.is_empty());
        assert_eq!(record.bus_route_type, Some(3));
        // empty operator list: JSON is the empty array, projection all null
        assert_eq!(record.operators_json, "[]");
        assert_eq!(record.operator_id_first, None);
        assert_eq!(record.operator_name_zh_first, None);
    }

    #[test]
    fn coercion_degrades_to_null_never_errors() {
        let records = parse_bus_routes(&feed(
            r"<BusRoute>
                <HasSubRoutes>yes</HasSubRoutes>
                <BusRouteType></BusRouteType>
                <VersionID>abc</VersionID>
             </BusRoute>",
        ))
        .unwrap();
        let record = &records[0];
        assert_eq!(record.has_sub_routes, None);
        assert_eq!(record.bus_route_type, None);
        assert_eq!(record.version_id, None);
    }

    #[test]
    fn tristate_flag_is_case_insensitive() {
        for (raw, expected) in [("true", Some(true)), ("False", Some(false)), ("TRUE", Some(true))] {
            let records = parse_bus_routes(&feed(&format!(
                "<BusRoute><HasSubRoutes>{raw}</HasSubRoutes></BusRoute>"
            )))
            .unwrap();
            assert_eq!(records[0].has_sub_routes, expected, "raw flag {raw:?}");
        }
    }

    #[test]
    fn row_width_is_fixed_regardless_of_sparse_input() {
        let records = parse_bus_routes(&feed("<BusRoute/>")).unwrap();
        assert_eq!(records[0].row().len(), RouteRecord::COLUMNS.len());
    }

    #[test]
    fn malformed_xml_is_fatal() {
        assert!(matches!(
            parse_bus_routes("<BusRoutes><BusRoute></BusRoutes>"),
            Err(Error::XmlError(_))
        ));
    }

    #[test]
    fn unnamespaced_document_matches_nothing() {
        // the namespace fallback binds the TDX URI, so unnamespaced elements
        // are not picked up (same outcome as the upstream feed tooling)
        let records = parse_bus_routes("<BusRoutes><BusRoute/></BusRoutes>").unwrap();
        assert!(records.is_empty());
    }
}
