//! # Route Sections
//!
//! Transit route simplification for mobile map bindings.
//!
//! This library provides:
//! - Classification of raw routing-engine sections into walks and rides
//! - Consolidation of consecutive walking sections
//! - Route point (waypoint marker) derivation with priority-based boundaries
//! - Key-value serialization for the UI layer
//!
//! Routing, search and rendering stay with the platform SDK; this crate only
//! transforms the sections it reports.
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch processing with rayon
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use route_sections::{
//!     build_transit_route, RawRoute, RawSection, RawStop, RawTransport, RouteConfig,
//! };
//!
//! let walk = RawSection {
//!     transports: None,
//!     duration: 120.0,
//!     walking_distance: 150.0,
//!     stops: vec![],
//! };
//! let bus = RawSection {
//!     transports: Some(vec![RawTransport {
//!         line_name: "42".into(),
//!         line_color: None,
//!         vehicle_types: vec!["bus".into()],
//!     }]),
//!     duration: 900.0,
//!     walking_distance: 0.0,
//!     stops: vec![RawStop::new("Main St"), RawStop::new("Museum")],
//! };
//!
//! let routes = vec![RawRoute {
//!     sections: vec![walk.clone(), walk, bus],
//!     estimation: Some("17 min".into()),
//! }];
//!
//! let route = build_transit_route(Ok(routes), &RouteConfig::default()).unwrap();
//! assert_eq!(route.sections.len(), 2);
//! assert_eq!(route.points.len(), 3);
//! ```

// Unified error handling
pub mod error;
pub use error::{Result, RouteSectionError};

// Section data model
pub mod model;
pub use model::{
    validate_sections, PointBound, RoutePoint, Section, SectionInfo, SectionTag,
    TransportDetails,
};

// Walking section consolidation and route point derivation
pub mod consolidate;
pub use consolidate::{consolidate_sections, derive_route_points, max_point, merge_points};

// Raw routing-engine section classification
pub mod classify;
pub use classify::{
    classify_section, classify_sections, ClassifierConfig, RawSection, RawStop, RawTransport,
};

// Route building from routing engine responses
pub mod route;
pub use route::{
    build_transit_route, build_transit_routes, estimate_travel_time, RawRoute, RouteConfig,
    TransitRoute, UpstreamError,
};

// Key-value encoding for the UI layer
pub mod serialize;
pub use serialize::{
    point_to_map, route_to_json_string, route_to_map, section_to_map, SerializeConfig,
    StationsEncoding,
};

// FFI bindings for mobile platforms (iOS/Android)
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
pub(crate) fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("RouteSectionsRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
pub(crate) fn init_logging() {
    // No-op on non-Android platforms
}
