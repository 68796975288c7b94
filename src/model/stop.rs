use serde::Serialize;

use super::Scalar;
use super::scalar::coerce_column;
use crate::table::{Cell, Tabular};

/// Column-wide best-effort coercion over the numeric-ish stop columns.
/// Runs once per parsed document, after all rows exist.
pub(crate) fn coerce_numeric_columns(rows: &mut [StopOfRouteRecord]) {
    coerce_column(rows, |r| &mut r.stop_sequence);
    coerce_column(rows, |r| &mut r.position_lon);
    coerce_column(rows, |r| &mut r.position_lat);
}

/// One stop of a sub-route in one direction, fully denormalized: the owning
/// route/sub-route/operator context repeats on every row of the group.
///
/// `Direction` stays a raw string here (the route feed coerces it, this feed
/// does not). `StopSequence` and the position fields go through column-wide
/// best-effort coercion, see [`Scalar`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopOfRouteRecord {
    #[serde(rename = "RouteUID")]
    pub route_uid: Option<String>,
    #[serde(rename = "RouteID")]
    pub route_id: Option<String>,
    #[serde(rename = "RouteName_Zh")]
    pub route_name_zh: Option<String>,
    #[serde(rename = "RouteName_En")]
    pub route_name_en: Option<String>,
    #[serde(rename = "SubRouteUID")]
    pub sub_route_uid: Option<String>,
    #[serde(rename = "SubRouteID")]
    pub sub_route_id: Option<String>,
    #[serde(rename = "SubRouteName_Zh")]
    pub sub_route_name_zh: Option<String>,
    #[serde(rename = "SubRouteName_En")]
    pub sub_route_name_en: Option<String>,
    #[serde(rename = "Direction")]
    pub direction: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "CityCode")]
    pub city_code: Option<String>,
    /// First `<Operator>` of the group only; this feed is not interested in
    /// the full list.
    #[serde(rename = "OperatorID")]
    pub operator_id: Option<String>,
    #[serde(rename = "OperatorName_Zh")]
    pub operator_name_zh: Option<String>,
    #[serde(rename = "OperatorNo")]
    pub operator_no: Option<String>,
    #[serde(rename = "StopUID")]
    pub stop_uid: Option<String>,
    #[serde(rename = "StopID")]
    pub stop_id: Option<String>,
    #[serde(rename = "StopName_Zh")]
    pub stop_name_zh: Option<String>,
    #[serde(rename = "StopName_En")]
    pub stop_name_en: Option<String>,
    #[serde(rename = "StopBoarding")]
    pub stop_boarding: Option<String>,
    #[serde(rename = "StopSequence")]
    pub stop_sequence: Option<Scalar>,
    #[serde(rename = "PositionLon")]
    pub position_lon: Option<Scalar>,
    #[serde(rename = "PositionLat")]
    pub position_lat: Option<Scalar>,
    #[serde(rename = "GeoHash")]
    pub geo_hash: Option<String>,
    #[serde(rename = "StationID")]
    pub station_id: Option<String>,
    #[serde(rename = "StationGroupID")]
    pub station_group_id: Option<String>,
    #[serde(rename = "LocationCityCode")]
    pub location_city_code: Option<String>,
}

impl Tabular for StopOfRouteRecord {
    const COLUMNS: &'static [&'static str] = &[
        "RouteUID",
        "RouteID",
        "RouteName_Zh",
        "RouteName_En",
        "SubRouteUID",
        "SubRouteID",
        "SubRouteName_Zh",
        "SubRouteName_En",
        "Direction",
        "City",
        "CityCode",
        "OperatorID",
        "OperatorName_Zh",
        "OperatorNo",
        "StopUID",
        "StopID",
        "StopName_Zh",
        "StopName_En",
        "StopBoarding",
        "StopSequence",
        "PositionLon",
        "PositionLat",
        "GeoHash",
        "StationID",
        "StationGroupID",
        "LocationCityCode",
    ];

    fn row(&self) -> Vec<Cell> {
        vec![
            self.route_uid.clone().into(),
            self.route_id.clone().into(),
            self.route_name_zh.clone().into(),
            self.route_name_en.clone().into(),
            self.sub_route_uid.clone().into(),
            self.sub_route_id.clone().into(),
            self.sub_route_name_zh.clone().into(),
            self.sub_route_name_en.clone().into(),
            self.direction.clone().into(),
            self.city.clone().into(),
            self.city_code.clone().into(),
            self.operator_id.clone().into(),
            self.operator_name_zh.clone().into(),
            self.operator_no.clone().into(),
            self.stop_uid.clone().into(),
            self.stop_id.clone().into(),
            self.stop_name_zh.clone().into(),
            self.stop_name_en.clone().into(),
            self.stop_boarding.clone().into(),
            self.stop_sequence.clone().into(),
            self.position_lon.clone().into(),
            self.position_lat.clone().into(),
            self.geo_hash.clone().into(),
            self.station_id.clone().into(),
            self.station_group_id.clone().into(),
            self.location_city_code.clone().into(),
        ]
    }
}
