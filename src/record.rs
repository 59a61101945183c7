use geo::Point;
use serde::Serialize;

use crate::config::RecordDefaults;

/// One location in the exported map. Field order is the JSON field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub heading: i32,
    pub pitch: i32,
    pub zoom: i32,
    pub pano_id: Option<String>,
    pub country_code: Option<String>,
    pub state_code: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl OutputRecord {
    pub fn new(point: Point, defaults: &RecordDefaults) -> Self {
        OutputRecord {
            heading: defaults.heading,
            pitch: defaults.pitch,
            zoom: defaults.zoom,
            pano_id: defaults.pano_id.clone(),
            country_code: defaults.country_code.clone(),
            state_code: defaults.state_code.clone(),
            lat: point.y(),
            lng: point.x(),
        }
    }
}

/// Pair every point with the defaults, keeping discovery order.
pub fn build_records(points: Vec<Point>, defaults: &RecordDefaults) -> Vec<OutputRecord> {
    points
        .into_iter()
        .map(|point| OutputRecord::new(point, defaults))
        .collect()
}
