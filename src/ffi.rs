//! FFI bindings for mobile platforms (iOS/Android).
//!
//! This module provides the UniFFI bindings that expose Rust functionality
//! to Kotlin and Swift. All FFI functions are prefixed with `ffi_` to avoid
//! naming conflicts with the internal API.
//!
//! Routing engine failures are reported by the platform side directly, so the
//! route builders here only take successful responses. Sections coming from
//! the platform are checked for a tag that contradicts their kind before use.

use log::{debug, info, warn};

use crate::{
    build_transit_route, consolidate_sections, derive_route_points, estimate_travel_time,
    init_logging, route_to_json_string, validate_sections, RawRoute, RouteConfig, RoutePoint,
    RouteSectionError, Section, SerializeConfig, TransitRoute,
};

fn checked(sections: &[Section]) -> Result<(), RouteSectionError> {
    validate_sections(sections).inspect_err(|e| {
        warn!("[RouteSectionsRust] Rejected sections: {}", e);
    })
}

// ============================================================================
// Consolidation
// ============================================================================

/// Merge consecutive walking sections.
#[uniffi::export]
pub fn ffi_consolidate_sections(
    sections: Vec<Section>,
) -> Result<Vec<Section>, RouteSectionError> {
    init_logging();
    debug!(
        "[RouteSectionsRust] ffi_consolidate_sections called with {} sections",
        sections.len()
    );
    checked(&sections)?;
    Ok(consolidate_sections(&sections))
}

/// Derive waypoints for already consolidated sections.
#[uniffi::export]
pub fn ffi_derive_route_points(
    sections: Vec<Section>,
) -> Result<Vec<RoutePoint>, RouteSectionError> {
    init_logging();
    checked(&sections)?;
    Ok(derive_route_points(&sections))
}

// ============================================================================
// Route Building
// ============================================================================

/// Build the rendering model for the first alternative.
#[uniffi::export]
pub fn ffi_build_transit_route(
    routes: Vec<RawRoute>,
    config: RouteConfig,
) -> Result<TransitRoute, RouteSectionError> {
    init_logging();
    info!(
        "[RouteSectionsRust] ffi_build_transit_route called with {} alternatives",
        routes.len()
    );

    let start = std::time::Instant::now();
    let route = build_transit_route(Ok(routes), &config)?;

    info!(
        "[RouteSectionsRust] Built {} sections and {} points in {:?}",
        route.sections.len(),
        route.points.len(),
        start.elapsed()
    );

    Ok(route)
}

/// Travel time text of the first alternative.
#[uniffi::export]
pub fn ffi_estimate_travel_time(routes: Vec<RawRoute>) -> Option<String> {
    init_logging();
    estimate_travel_time(&routes)
}

/// Encode a route as JSON for the UI layer.
#[uniffi::export]
pub fn ffi_route_to_json(
    route: TransitRoute,
    config: SerializeConfig,
) -> Result<String, RouteSectionError> {
    init_logging();
    checked(&route.sections)?;
    route_to_json_string(&route, &config)
}

// ============================================================================
// Defaults
// ============================================================================

/// Get default route configuration.
#[uniffi::export]
pub fn default_route_config() -> RouteConfig {
    init_logging();
    info!("[RouteSectionsRust] default_route_config called - Rust is active!");
    RouteConfig::default()
}

/// Get default serialization configuration.
#[uniffi::export]
pub fn default_serialize_config() -> SerializeConfig {
    SerializeConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointBound, RawSection, RawStop, RawTransport, SectionInfo, SectionTag};

    fn sample_routes() -> Vec<RawRoute> {
        let walk = RawSection {
            transports: None,
            duration: 90.0,
            walking_distance: 100.0,
            stops: Vec::new(),
        };
        let tram = RawSection {
            transports: Some(vec![RawTransport {
                line_name: "T1".to_string(),
                line_color: None,
                vehicle_types: vec!["tramway".to_string()],
            }]),
            duration: 420.0,
            walking_distance: 0.0,
            stops: vec![RawStop::new("Depot"), RawStop::new("Square")],
        };
        vec![RawRoute {
            sections: vec![walk.clone(), walk, tram],
            estimation: Some("10 min".to_string()),
        }]
    }

    fn info(tag: SectionTag) -> SectionInfo {
        SectionInfo {
            tag,
            duration: 60.0,
            walking_distance: 0.0,
            color: 0xFF33B609,
            bounds: PointBound::new(RoutePoint::unnamed(), RoutePoint::unnamed()),
        }
    }

    #[test]
    fn test_ffi_build_and_encode() {
        let route = ffi_build_transit_route(sample_routes(), default_route_config()).unwrap();
        assert_eq!(route.sections.len(), 2);
        assert_eq!(route.points.len(), 3);

        let json = ffi_route_to_json(route, default_serialize_config()).unwrap();
        assert!(json.contains("\"tramway\""));
        assert!(json.contains("\"Depot\""));
    }

    #[test]
    fn test_ffi_estimation() {
        assert_eq!(
            ffi_estimate_travel_time(sample_routes()),
            Some("10 min".to_string())
        );
    }

    #[test]
    fn test_ffi_consolidate_then_derive() {
        let route = ffi_build_transit_route(sample_routes(), default_route_config()).unwrap();
        let again = ffi_consolidate_sections(route.sections.clone()).unwrap();
        assert_eq!(again, route.sections);
        assert_eq!(ffi_derive_route_points(again).unwrap(), route.points);
    }

    #[test]
    fn test_ffi_rejects_bus_tagged_walks() {
        let walks = vec![
            Section::Pedestrian(info(SectionTag::Bus)),
            Section::Pedestrian(info(SectionTag::Bus)),
        ];
        assert!(matches!(
            ffi_consolidate_sections(walks.clone()),
            Err(RouteSectionError::TaggedWalk { tag: SectionTag::Bus })
        ));
        assert!(ffi_derive_route_points(walks).is_err());
    }

    #[test]
    fn test_ffi_rejects_pedestrian_tagged_rides() {
        let ride = Section::Transport {
            info: info(SectionTag::Pedestrian),
            details: Default::default(),
        };
        assert!(matches!(
            ffi_consolidate_sections(vec![ride.clone(), ride.clone()]),
            Err(RouteSectionError::PedestrianTransport)
        ));

        let route = TransitRoute {
            sections: vec![ride],
            points: Vec::new(),
        };
        assert!(ffi_route_to_json(route, default_serialize_config()).is_err());
    }
}
