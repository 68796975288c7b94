use serde::Serialize;

use crate::table::{Cell, Tabular};

/// One `<BusShape>` element of the geometry feed.
///
/// Everything stays a raw string, `VersionID` and `Direction` included; this
/// feed gets no coercion pass at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeRecord {
    /// Well-known-text geometry, when present.
    #[serde(rename = "Geometry")]
    pub geometry: Option<String>,
    /// Compressed path encoding, when present.
    #[serde(rename = "EncodedPolyline")]
    pub encoded_polyline: Option<String>,
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
    #[serde(rename = "UpdateTime")]
    pub update_time: Option<String>,
    #[serde(rename = "VersionID")]
    pub version_id: Option<String>,
}

impl Tabular for ShapeRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Geometry",
        "EncodedPolyline",
        "RouteUID",
        "RouteID",
        "RouteName_Zh",
        "RouteName_En",
        "SubRouteUID",
        "SubRouteID",
        "SubRouteName_Zh",
        "SubRouteName_En",
        "Direction",
        "UpdateTime",
        "VersionID",
    ];

    fn row(&self) -> Vec<Cell> {
        vec![
            self.geometry.clone().into(),
            self.encoded_polyline.clone().into(),
            self.route_uid.clone().into(),
            self.route_id.clone().into(),
            self.route_name_zh.clone().into(),
            self.route_name_en.clone().into(),
            self.sub_route_uid.clone().into(),
            self.sub_route_id.clone().into(),
            self.sub_route_name_zh.clone().into(),
            self.sub_route_name_en.clone().into(),
            self.direction.clone().into(),
            self.update_time.clone().into(),
            self.version_id.clone().into(),
        ]
    }
}
