//! Classification of raw routing-engine sections.
//!
//! A raw section either lists the public transport lines that can carry the
//! traveller from its first stop to its last, or lists nothing, in which case
//! it is a walk (including waits and transfers on foot).
//!
//! Lines advertise their vehicle types from most specific to most general
//! (say `historic_tram` before `tramway`), so the first known type wins.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{PointBound, RoutePoint, Section, SectionInfo, SectionTag, TransportDetails};

/// Line ids and intervals are not provided by the routing engine.
const UNKNOWN_FIELD: &str = "?";

/// Alpha channel forced onto RRGGBB line colors.
const OPAQUE: u32 = 0xFF000000;

/// A stop along a raw section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RawStop {
    pub name: String,
}

impl RawStop {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A public transport line able to serve a raw section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RawTransport {
    pub line_name: String,
    /// Line color in RRGGBB, when the line has one (typically underground lines)
    pub line_color: Option<u32>,
    /// Vehicle types, most specific first
    pub vehicle_types: Vec<String>,
}

/// A section as reported by the routing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RawSection {
    /// `None` for walking sections
    pub transports: Option<Vec<RawTransport>>,
    /// Duration in seconds
    pub duration: f64,
    /// Walking distance in meters
    pub walking_distance: f64,
    pub stops: Vec<RawStop>,
}

/// Colors and priorities assigned during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ClassifierConfig {
    /// Color of walking sections. Default: 0xFF7073EE
    pub pedestrian_color: u32,
    /// Color of rides with neither a known vehicle type nor a line color.
    /// Default: 0xFFA06ED9
    pub default_color: u32,
    /// Default: 0xFF33B609
    pub bus_color: u32,
    /// Default: 0xFF33B609
    pub tramway_color: u32,
    /// Default: 0
    pub pedestrian_priority: i32,
    /// Priority of rides with an unknown vehicle type. Default: 0
    pub unknown_priority: i32,
    /// Default: 1
    pub bus_priority: i32,
    /// Default: 2
    pub tramway_priority: i32,
    /// Default: 3
    pub underground_priority: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pedestrian_color: 0xFF7073EE,
            default_color: 0xFFA06ED9,
            bus_color: 0xFF33B609,
            tramway_color: 0xFF33B609,
            pedestrian_priority: 0,
            unknown_priority: 0,
            bus_priority: 1,
            tramway_priority: 2,
            underground_priority: 3,
        }
    }
}

fn known_vehicle_tag(vehicle_type: &str) -> Option<SectionTag> {
    match vehicle_type {
        "bus" => Some(SectionTag::Bus),
        "tramway" => Some(SectionTag::Tramway),
        "underground" => Some(SectionTag::Underground),
        _ => None,
    }
}

fn vehicle_tag(transport: &RawTransport) -> Option<SectionTag> {
    transport
        .vehicle_types
        .iter()
        .find_map(|t| known_vehicle_tag(t))
}

/// How a ride is drawn.
struct RideStyle {
    tag: SectionTag,
    color: u32,
    priority: i32,
    line_name: String,
}

fn classify_ride(transports: &[RawTransport], config: &ClassifierConfig) -> RideStyle {
    let mut style = RideStyle {
        tag: SectionTag::Unknown,
        color: config.default_color,
        priority: config.unknown_priority,
        line_name: String::new(),
    };

    for transport in transports {
        style.line_name = transport.line_name.clone();
        if let Some(line_color) = transport.line_color {
            style.color = line_color | OPAQUE;
            break;
        }
    }

    for transport in transports {
        let Some(found) = vehicle_tag(transport) else {
            break;
        };
        style.tag = found;
        match found {
            SectionTag::Bus => {
                style.color = config.bus_color;
                style.priority = config.bus_priority;
            }
            SectionTag::Tramway => {
                style.color = config.tramway_color;
                style.priority = config.tramway_priority;
            }
            SectionTag::Underground => style.priority = config.underground_priority,
            SectionTag::Pedestrian | SectionTag::Unknown => {}
        }
    }

    style
}

fn section_bounds(stops: &[RawStop], color: u32, priority: i32) -> PointBound {
    match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => PointBound::new(
            RoutePoint::new(first.name.clone(), color, priority),
            RoutePoint::new(last.name.clone(), color, priority),
        ),
        _ => PointBound::new(RoutePoint::unnamed(), RoutePoint::unnamed()),
    }
}

/// Classify one raw section.
pub fn classify_section(raw: &RawSection, config: &ClassifierConfig) -> Result<Section> {
    let Some(transports) = raw.transports.as_deref() else {
        let color = config.pedestrian_color;
        return Section::walk(SectionInfo {
            tag: SectionTag::Pedestrian,
            duration: raw.duration,
            walking_distance: raw.walking_distance,
            color,
            bounds: section_bounds(&raw.stops, color, config.pedestrian_priority),
        });
    };

    let style = classify_ride(transports, config);

    let mut details = TransportDetails {
        line_name: style.line_name,
        line_id: UNKNOWN_FIELD.to_string(),
        direction_description: String::new(),
        interval: UNKNOWN_FIELD.to_string(),
        intermediate_stations: Vec::new(),
    };

    if raw.stops.len() > 2 {
        details.direction_description = raw.stops[1].name.clone();
        details.intermediate_stations = raw.stops[1..raw.stops.len() - 1]
            .iter()
            .map(|stop| stop.name.clone())
            .collect();
    }

    Section::transport(
        SectionInfo {
            tag: style.tag,
            duration: raw.duration,
            walking_distance: raw.walking_distance,
            color: style.color,
            bounds: section_bounds(&raw.stops, style.color, style.priority),
        },
        details,
    )
}

/// Classify raw sections, keeping their order.
pub fn classify_sections(raw: &[RawSection], config: &ClassifierConfig) -> Result<Vec<Section>> {
    raw.iter().map(|s| classify_section(s, config)).collect()
}
