//! Unified error handling for the route-sections library.
//!
//! Consolidation and point derivation never fail. Errors only come from the
//! edges: the routing engine reporting a failure, a section whose tag does
//! not match its kind, or JSON encoding.

use crate::model::SectionTag;

/// Unified error type for route-sections operations.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "ffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum RouteSectionError {
    /// The routing engine failed; code and message are passed through untouched
    #[error("Routing engine error ({code}): {message}")]
    Upstream { code: String, message: String },

    /// A transport section cannot carry the pedestrian tag
    #[error("Transport section cannot be tagged pedestrian")]
    PedestrianTransport,

    /// A walking section must carry the pedestrian tag
    #[error("Walking section tagged {tag:?}")]
    TaggedWalk { tag: SectionTag },

    /// JSON encoding of the UI payload failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for route-sections operations.
pub type Result<T> = std::result::Result<T, RouteSectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteSectionError::Upstream {
            code: "MasstransitRoutesError".to_string(),
            message: "network unavailable".to_string(),
        };
        assert!(err.to_string().contains("MasstransitRoutesError"));
        assert!(err.to_string().contains("network unavailable"));
    }

    #[test]
    fn test_tagged_walk_names_the_tag() {
        let err = RouteSectionError::TaggedWalk {
            tag: SectionTag::Tramway,
        };
        assert_eq!(err.to_string(), "Walking section tagged Tramway");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: RouteSectionError = json_err.into();
        assert!(matches!(err, RouteSectionError::Serialization(_)));
    }
}
