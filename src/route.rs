//! Route building from routing-engine responses.
//!
//! The routing engine answers a transit request asynchronously with either a
//! list of alternatives or an error. Only the first alternative is rendered.

use log::{debug, info};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::classify::{classify_sections, ClassifierConfig, RawSection};
use crate::consolidate::{consolidate_sections, derive_route_points};
use crate::error::{Result, RouteSectionError};
use crate::model::{RoutePoint, Section};

/// One route alternative as reported by the routing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RawRoute {
    pub sections: Vec<RawSection>,
    /// Human readable travel time (e.g. "25 min")
    pub estimation: Option<String>,
}

/// Opaque routing engine failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct UpstreamError {
    pub code: String,
    pub message: String,
}

impl From<UpstreamError> for RouteSectionError {
    fn from(e: UpstreamError) -> Self {
        RouteSectionError::Upstream {
            code: e.code,
            message: e.message,
        }
    }
}

/// Configuration for building a route from raw sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RouteConfig {
    pub classifier: ClassifierConfig,
}

/// Simplified rendering model of a transit route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TransitRoute {
    /// Consolidated sections in travel order
    pub sections: Vec<Section>,
    /// `sections.len() + 1` waypoints, or none for an empty route
    pub points: Vec<RoutePoint>,
}

impl TransitRoute {
    /// Consolidate sections and derive their waypoints.
    pub fn from_sections(sections: &[Section]) -> Self {
        let sections = consolidate_sections(sections);
        let points = derive_route_points(&sections);
        Self { sections, points }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total duration in seconds.
    pub fn total_duration(&self) -> f64 {
        self.sections.iter().map(|s| s.info().duration).sum()
    }

    /// Total walking distance in meters.
    pub fn total_walking_distance(&self) -> f64 {
        self.sections.iter().map(|s| s.info().walking_distance).sum()
    }
}

/// Build the route for the first alternative of a routing engine response.
///
/// Errors from the engine are returned before any section is touched. A
/// response without alternatives yields an empty route.
pub fn build_transit_route(
    outcome: std::result::Result<Vec<RawRoute>, UpstreamError>,
    config: &RouteConfig,
) -> Result<TransitRoute> {
    let routes = outcome?;

    let Some(first) = routes.first() else {
        debug!("[RouteSections] Routing engine returned no alternatives");
        return Ok(TransitRoute::default());
    };

    let sections = classify_sections(&first.sections, &config.classifier)?;
    let route = TransitRoute::from_sections(&sections);

    info!(
        "[RouteSections] Built route: {} raw sections -> {} sections, {} points",
        first.sections.len(),
        route.sections.len(),
        route.points.len()
    );

    Ok(route)
}

/// Travel time text of the first alternative.
pub fn estimate_travel_time(routes: &[RawRoute]) -> Option<String> {
    routes.first().and_then(|r| r.estimation.clone())
}

/// Build routes for many independent section lists.
#[cfg(not(feature = "parallel"))]
pub fn build_transit_routes(routes: &[Vec<Section>]) -> Vec<TransitRoute> {
    routes
        .iter()
        .map(|sections| TransitRoute::from_sections(sections))
        .collect()
}

/// Build routes for many independent section lists, in parallel.
#[cfg(feature = "parallel")]
pub fn build_transit_routes(routes: &[Vec<Section>]) -> Vec<TransitRoute> {
    routes
        .par_iter()
        .map(|sections| TransitRoute::from_sections(sections))
        .collect()
}
