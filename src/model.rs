//! Core types for transit route sections.
//!
//! A route is an ordered list of [`Section`]s, each one leg of the trip with a
//! uniform mode of travel. Sections are either walking legs or rides on public
//! transport; the ride variant carries line details that walking legs never have.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteSectionError};

/// A named, colored waypoint bounding a section.
///
/// `priority` decides which of two points wins when adjacent sections share a
/// boundary (higher wins, ties keep the earlier point).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RoutePoint {
    pub name: String,
    /// ARGB color
    pub color: u32,
    pub priority: i32,
}

impl RoutePoint {
    /// Create a new route point.
    pub fn new(name: impl Into<String>, color: u32, priority: i32) -> Self {
        Self {
            name: name.into(),
            color,
            priority,
        }
    }

    /// Placeholder for a section boundary without any stop.
    ///
    /// Unnamed, fully transparent, and ranked below every real point.
    pub fn unnamed() -> Self {
        Self::new("", 0, -1)
    }
}

/// The two boundary waypoints of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PointBound {
    pub start: RoutePoint,
    pub end: RoutePoint,
}

impl PointBound {
    pub fn new(start: RoutePoint, end: RoutePoint) -> Self {
        Self { start, end }
    }
}

/// Mode of travel for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum SectionTag {
    Pedestrian,
    Bus,
    Tramway,
    Underground,
    /// Public transport whose vehicle type is not recognised
    #[serde(rename = "")]
    Unknown,
}

impl SectionTag {
    /// Wire name used by the UI layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTag::Pedestrian => "pedestrian",
            SectionTag::Bus => "bus",
            SectionTag::Tramway => "tramway",
            SectionTag::Underground => "underground",
            SectionTag::Unknown => "",
        }
    }

    pub fn is_pedestrian(&self) -> bool {
        matches!(self, SectionTag::Pedestrian)
    }
}

impl std::fmt::Display for SectionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct SectionInfo {
    pub tag: SectionTag,
    /// Duration in seconds
    pub duration: f64,
    /// Walking distance in meters
    pub walking_distance: f64,
    /// ARGB color used to draw the section
    pub color: u32,
    pub bounds: PointBound,
}

/// Line details of a public transport ride.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TransportDetails {
    pub line_name: String,
    pub line_id: String,
    pub direction_description: String,
    pub interval: String,
    /// Stops between the first and last stop, in travel order
    pub intermediate_stations: Vec<String>,
}

/// One leg of a trip.
///
/// The pedestrian tag and the `Pedestrian` variant always go together. Build
/// sections with [`Section::pedestrian`], [`Section::walk`] or
/// [`Section::transport`] so the pairing holds; deserialization goes through
/// the same checks, and [`Section::validate`] covers values assembled by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
#[serde(tag = "kind", rename_all = "lowercase", try_from = "UncheckedSection")]
pub enum Section {
    Pedestrian(SectionInfo),
    Transport {
        info: SectionInfo,
        details: TransportDetails,
    },
}

/// Wire shape of a [`Section`] before its tag is checked.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum UncheckedSection {
    Pedestrian(SectionInfo),
    Transport {
        info: SectionInfo,
        details: TransportDetails,
    },
}

impl TryFrom<UncheckedSection> for Section {
    type Error = RouteSectionError;

    fn try_from(section: UncheckedSection) -> Result<Self> {
        match section {
            UncheckedSection::Pedestrian(info) => Section::walk(info),
            UncheckedSection::Transport { info, details } => Section::transport(info, details),
        }
    }
}

impl Section {
    /// Create a walking section.
    pub fn pedestrian(
        duration: f64,
        walking_distance: f64,
        color: u32,
        bounds: PointBound,
    ) -> Self {
        Section::Pedestrian(SectionInfo {
            tag: SectionTag::Pedestrian,
            duration,
            walking_distance,
            color,
            bounds,
        })
    }

    /// Create a walking section from shared fields.
    ///
    /// Fails unless `info` is tagged pedestrian.
    pub fn walk(info: SectionInfo) -> Result<Self> {
        if !info.tag.is_pedestrian() {
            return Err(RouteSectionError::TaggedWalk { tag: info.tag });
        }
        Ok(Section::Pedestrian(info))
    }

    /// Create a public transport section.
    ///
    /// Fails if `info` is tagged pedestrian.
    pub fn transport(info: SectionInfo, details: TransportDetails) -> Result<Self> {
        if info.tag.is_pedestrian() {
            return Err(RouteSectionError::PedestrianTransport);
        }
        Ok(Section::Transport { info, details })
    }

    /// Check that the tag matches the variant.
    pub fn validate(&self) -> Result<()> {
        match self {
            Section::Pedestrian(info) if !info.tag.is_pedestrian() => {
                Err(RouteSectionError::TaggedWalk { tag: info.tag })
            }
            Section::Transport { info, .. } if info.tag.is_pedestrian() => {
                Err(RouteSectionError::PedestrianTransport)
            }
            _ => Ok(()),
        }
    }

    /// Fields shared by both variants.
    pub fn info(&self) -> &SectionInfo {
        match self {
            Section::Pedestrian(info) => info,
            Section::Transport { info, .. } => info,
        }
    }

    pub fn tag(&self) -> SectionTag {
        self.info().tag
    }

    pub fn bounds(&self) -> &PointBound {
        &self.info().bounds
    }

    pub fn is_pedestrian(&self) -> bool {
        matches!(self, Section::Pedestrian(_))
    }

    /// Line details, `None` for walking sections.
    pub fn transport_details(&self) -> Option<&TransportDetails> {
        match self {
            Section::Pedestrian(_) => None,
            Section::Transport { details, .. } => Some(details),
        }
    }
}

/// Check every section of a route, stopping at the first mismatch.
pub fn validate_sections(sections: &[Section]) -> Result<()> {
    sections.iter().try_for_each(Section::validate)
}
