//! Key-value encoding of routes for the UI layer.
//!
//! Every object is flattened into a single map. Key names match the existing
//! consumer exactly, including the dotted `points.startPoint` style keys.
//!
//! Colors are written as signed 32-bit integers carrying the same bits as the
//! ARGB value, which is what the consumer reads.
//!
//! ## Intermediate stations
//!
//! The existing contract reports transport stops as a count
//! (`intermediateStations.size`) while every other field is sent in full.
//! This looks like an oversight, but consumers may depend on it, so the count
//! remains the default. Pass [`StationsEncoding::List`] to send the stop names
//! under `intermediateStations` instead.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::model::{RoutePoint, Section, SectionInfo, TransportDetails};
use crate::route::TransitRoute;

/// How intermediate stations of a ride are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum StationsEncoding {
    /// `intermediateStations.size`: number of stations only
    #[default]
    Count,
    /// `intermediateStations`: list of station names
    List,
}

/// Serialization options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct SerializeConfig {
    /// Default: `Count`
    pub stations: StationsEncoding,
}

fn color_value(color: u32) -> Value {
    json!(color as i32)
}

/// Encode a route point.
pub fn point_to_map(point: &RoutePoint) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("name".into(), json!(point.name));
    map.insert("color".into(), color_value(point.color));
    map.insert("zIndex".into(), json!(point.priority));
    map
}

fn insert_info(map: &mut Map<String, Value>, info: &SectionInfo) {
    map.insert("tag".into(), json!(info.tag.as_str()));
    map.insert("duration".into(), json!(info.duration));
    map.insert("walkingDistance".into(), json!(info.walking_distance));
    map.insert("color".into(), color_value(info.color));
    map.insert(
        "points.startPoint".into(),
        Value::Object(point_to_map(&info.bounds.start)),
    );
    map.insert(
        "points.endPoint".into(),
        Value::Object(point_to_map(&info.bounds.end)),
    );
}

fn insert_details(
    map: &mut Map<String, Value>,
    details: &TransportDetails,
    stations: StationsEncoding,
) {
    map.insert("lineName".into(), json!(details.line_name));
    map.insert("lineId".into(), json!(details.line_id));
    map.insert("directionDesc".into(), json!(details.direction_description));
    map.insert("interval".into(), json!(details.interval));
    match stations {
        StationsEncoding::Count => {
            map.insert(
                "intermediateStations.size".into(),
                json!(details.intermediate_stations.len()),
            );
        }
        StationsEncoding::List => {
            map.insert(
                "intermediateStations".into(),
                json!(details.intermediate_stations),
            );
        }
    }
}

/// Encode a section. Rides carry their line fields, walks do not.
pub fn section_to_map(section: &Section, config: &SerializeConfig) -> Map<String, Value> {
    let mut map = Map::new();
    match section {
        Section::Pedestrian(info) => insert_info(&mut map, info),
        Section::Transport { info, details } => {
            insert_info(&mut map, info);
            insert_details(&mut map, details, config.stations);
        }
    }
    map
}

/// Encode a whole route as `{ "sections": [...], "points": [...] }`.
pub fn route_to_map(route: &TransitRoute, config: &SerializeConfig) -> Map<String, Value> {
    let sections: Vec<Value> = route
        .sections
        .iter()
        .map(|s| Value::Object(section_to_map(s, config)))
        .collect();
    let points: Vec<Value> = route
        .points
        .iter()
        .map(|p| Value::Object(point_to_map(p)))
        .collect();

    let mut map = Map::new();
    map.insert("sections".into(), Value::Array(sections));
    map.insert("points".into(), Value::Array(points));
    map
}

/// Encode a whole route as a JSON string.
pub fn route_to_json_string(route: &TransitRoute, config: &SerializeConfig) -> Result<String> {
    Ok(serde_json::to_string(&route_to_map(route, config))?)
}
