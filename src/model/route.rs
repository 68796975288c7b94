use serde::Serialize;

use crate::table::{Cell, Tabular};

/// A transit-service operating company attached to a route.
///
/// Serialized field names match the feed schema so that the JSON embedded in
/// `Operators_json` reads exactly like the source elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Operator {
    #[serde(rename = "OperatorID")]
    pub operator_id: Option<String>,
    #[serde(rename = "OperatorNameZh")]
    pub name_zh: Option<String>,
    #[serde(rename = "OperatorNameEn")]
    pub name_en: Option<String>,
    #[serde(rename = "OperatorCode")]
    pub code: Option<String>,
    #[serde(rename = "OperatorNo")]
    pub no: Option<String>,
}

/// One flattened row of the bus-route feed: one per sub-route, or one per
/// route when the route has no sub-routes.
///
/// Field order is the output column order. Route-level fields repeat on every
/// row of the same route; sub-route fields are null on the no-sub-route row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    #[serde(rename = "RouteUID")]
    pub route_uid: Option<String>,
    #[serde(rename = "RouteID")]
    pub route_id: Option<String>,
    /// Tri-state: `None` when the feed flag is absent or not a boolean.
    #[serde(rename = "HasSubRoutes")]
    pub has_sub_routes: Option<bool>,
    /// The full ordered operator list, JSON-serialized (`"[]"` when empty).
    #[serde(rename = "Operators_json")]
    pub operators_json: String,
    #[serde(rename = "OperatorID_first")]
    pub operator_id_first: Option<String>,
    #[serde(rename = "OperatorNameZh_first")]
    pub operator_name_zh_first: Option<String>,
    #[serde(rename = "OperatorNameEn_first")]
    pub operator_name_en_first: Option<String>,
    #[serde(rename = "OperatorCode_first")]
    pub operator_code_first: Option<String>,
    #[serde(rename = "OperatorNo_first")]
    pub operator_no_first: Option<String>,
    #[serde(rename = "AuthorityID")]
    pub authority_id: Option<String>,
    #[serde(rename = "ProviderID")]
    pub provider_id: Option<String>,
    #[serde(rename = "SubRouteUID")]
    pub sub_route_uid: Option<String>,
    #[serde(rename = "SubRouteID")]
    pub sub_route_id: Option<String>,
    /// Operator references of the sub-route, by ID only.
    #[serde(rename = "OperatorIDs")]
    pub operator_ids: Vec<String>,
    #[serde(rename = "SubRouteNameZh")]
    pub sub_route_name_zh: Option<String>,
    #[serde(rename = "SubRouteNameEn")]
    pub sub_route_name_en: Option<String>,
    #[serde(rename = "Headsign")]
    pub headsign: Option<String>,
    #[serde(rename = "HeadsignEn")]
    pub headsign_en: Option<String>,
    #[serde(rename = "Direction")]
    pub direction: Option<i32>,
    #[serde(rename = "FirstBusTime")]
    pub first_bus_time: Option<String>,
    #[serde(rename = "LastBusTime")]
    pub last_bus_time: Option<String>,
    #[serde(rename = "HolidayFirstBusTime")]
    pub holiday_first_bus_time: Option<String>,
    #[serde(rename = "HolidayLastBusTime")]
    pub holiday_last_bus_time: Option<String>,
    #[serde(rename = "SubDepartureStopNameZh")]
    pub sub_departure_stop_name_zh: Option<String>,
    #[serde(rename = "SubDepartureStopNameEn")]
    pub sub_departure_stop_name_en: Option<String>,
    #[serde(rename = "SubDestinationStopNameZh")]
    pub sub_destination_stop_name_zh: Option<String>,
    #[serde(rename = "SubDestinationStopNameEn")]
    pub sub_destination_stop_name_en: Option<String>,
    #[serde(rename = "BusRouteType")]
    pub bus_route_type: Option<i32>,
    #[serde(rename = "RouteNameZh")]
    pub route_name_zh: Option<String>,
    #[serde(rename = "RouteNameEn")]
    pub route_name_en: Option<String>,
    #[serde(rename = "DepartureStopNameZh")]
    pub departure_stop_name_zh: Option<String>,
    #[serde(rename = "DepartureStopNameEn")]
    pub departure_stop_name_en: Option<String>,
    #[serde(rename = "DestinationStopNameZh")]
    pub destination_stop_name_zh: Option<String>,
    #[serde(rename = "DestinationStopNameEn")]
    pub destination_stop_name_en: Option<String>,
    #[serde(rename = "TicketPriceDescriptionZh")]
    pub ticket_price_description_zh: Option<String>,
    #[serde(rename = "TicketPriceDescriptionEn")]
    pub ticket_price_description_en: Option<String>,
    #[serde(rename = "FareBufferZoneDescriptionZh")]
    pub fare_buffer_zone_description_zh: Option<String>,
    #[serde(rename = "FareBufferZoneDescriptionEn")]
    pub fare_buffer_zone_description_en: Option<String>,
    #[serde(rename = "RouteMapImageUrl")]
    pub route_map_image_url: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "CityCode")]
    pub city_code: Option<String>,
    /// Raw feed timestamp, not parsed.
    #[serde(rename = "UpdateTime")]
    pub update_time: Option<String>,
    #[serde(rename = "VersionID")]
    pub version_id: Option<i32>,
}

impl Tabular for RouteRecord {
    const COLUMNS: &'static [&'static str] = &[
        "RouteUID",
        "RouteID",
        "HasSubRoutes",
        "Operators_json",
        "OperatorID_first",
        "OperatorNameZh_first",
        "OperatorNameEn_first",
        "OperatorCode_first",
        "OperatorNo_first",
        "AuthorityID",
        "ProviderID",
        "SubRouteUID",
        "SubRouteID",
        "OperatorIDs",
        "SubRouteNameZh",
        "SubRouteNameEn",
        "Headsign",
        "HeadsignEn",
        "Direction",
        "FirstBusTime",
        "LastBusTime",
        "HolidayFirstBusTime",
        "HolidayLastBusTime",
        "SubDepartureStopNameZh",
        "SubDepartureStopNameEn",
        "SubDestinationStopNameZh",
        "SubDestinationStopNameEn",
        "BusRouteType",
        "RouteNameZh",
        "RouteNameEn",
        "DepartureStopNameZh",
        "DepartureStopNameEn",
        "DestinationStopNameZh",
        "DestinationStopNameEn",
        "TicketPriceDescriptionZh",
        "TicketPriceDescriptionEn",
        "FareBufferZoneDescriptionZh",
        "FareBufferZoneDescriptionEn",
        "RouteMapImageUrl",
        "City",
        "CityCode",
        "UpdateTime",
        "VersionID",
    ];

    fn row(&self) -> Vec<Cell> {
        vec![
            self.route_uid.clone().into(),
            self.route_id.clone().into(),
            self.has_sub_routes.into(),
            Cell::Text(self.operators_json.clone()),
            self.operator_id_first.clone().into(),
            self.operator_name_zh_first.clone().into(),
            self.operator_name_en_first.clone().into(),
            self.operator_code_first.clone().into(),
            self.operator_no_first.clone().into(),
            self.authority_id.clone().into(),
            self.provider_id.clone().into(),
            self.sub_route_uid.clone().into(),
            self.sub_route_id.clone().into(),
            Cell::json_list(&self.operator_ids),
            self.sub_route_name_zh.clone().into(),
            self.sub_route_name_en.clone().into(),
            self.headsign.clone().into(),
            self.headsign_en.clone().into(),
            self.direction.into(),
            self.first_bus_time.clone().into(),
            self.last_bus_time.clone().into(),
            self.holiday_first_bus_time.clone().into(),
            self.holiday_last_bus_time.clone().into(),
            self.sub_departure_stop_name_zh.clone().into(),
            self.sub_departure_stop_name_en.clone().into(),
            self.sub_destination_stop_name_zh.clone().into(),
            self.sub_destination_stop_name_en.clone().into(),
            self.bus_route_type.into(),
            self.route_name_zh.clone().into(),
            self.route_name_en.clone().into(),
            self.departure_stop_name_zh.clone().into(),
            self.departure_stop_name_en.clone().into(),
            self.destination_stop_name_zh.clone().into(),
            self.destination_stop_name_en.clone().into(),
            self.ticket_price_description_zh.clone().into(),
            self.ticket_price_description_en.clone().into(),
            self.fare_buffer_zone_description_zh.clone().into(),
            self.fare_buffer_zone_description_en.clone().into(),
            self.route_map_image_url.clone().into(),
            self.city.clone().into(),
            self.city_code.clone().into(),
            self.update_time.clone().into(),
            self.version_id.into(),
        ]
    }
}
