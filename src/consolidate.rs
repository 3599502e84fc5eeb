//! # Section Consolidation
//!
//! Simplifies a multimodal route for rendering.
//!
//! ## Algorithm
//! 1. Walk the sections in travel order
//! 2. Fold every maximal run of consecutive walking sections into one section
//!    (durations and walking distances summed, color of the first section kept)
//! 3. Pass every ride through unchanged
//!
//! Route points are then derived from the consolidated sections: the start of
//! the first section, one point per shared boundary, and the end of the last
//! section. At a shared boundary the point with the higher priority wins; on a
//! tie the earlier section's point is kept.

use log::debug;

use crate::model::{PointBound, RoutePoint, Section, SectionInfo};

/// Pick the point with the strictly higher priority; ties keep `a`.
pub fn max_point<'a>(a: &'a RoutePoint, b: &'a RoutePoint) -> &'a RoutePoint {
    if b.priority > a.priority {
        b
    } else {
        a
    }
}

/// Combine two bounds point by point with [`max_point`].
pub fn merge_points(b1: &PointBound, b2: &PointBound) -> PointBound {
    PointBound::new(
        max_point(&b1.start, &b2.start).clone(),
        max_point(&b1.end, &b2.end).clone(),
    )
}

/// Merge consecutive walking sections.
///
/// Rides keep their order and content. The input is left untouched.
///
/// # Example
/// ```
/// use route_sections::{consolidate_sections, PointBound, RoutePoint, Section};
///
/// let walk = |from: &str, to: &str| {
///     Section::pedestrian(
///         60.0,
///         100.0,
///         0xFF7073EE,
///         PointBound::new(RoutePoint::new(from, 0, 0), RoutePoint::new(to, 0, 0)),
///     )
/// };
///
/// let merged = consolidate_sections(&[walk("A", "B"), walk("B", "C")]);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].info().duration, 120.0);
/// assert_eq!(merged[0].bounds().end.name, "C");
/// ```
pub fn consolidate_sections(sections: &[Section]) -> Vec<Section> {
    let mut consolidated: Vec<Section> = Vec::with_capacity(sections.len());

    for section in sections {
        if let (Some(Section::Pedestrian(run)), Section::Pedestrian(next)) =
            (consolidated.last_mut(), section)
        {
            absorb_walk(run, next);
            continue;
        }
        consolidated.push(section.clone());
    }

    debug!(
        "[RouteSections] Consolidated {} sections into {}",
        sections.len(),
        consolidated.len()
    );

    consolidated
}

/// Extend a walking run with the next walk. Interior joins are dropped.
fn absorb_walk(run: &mut SectionInfo, next: &SectionInfo) {
    run.duration += next.duration;
    run.walking_distance += next.walking_distance;
    run.bounds = PointBound::new(run.bounds.start.clone(), next.bounds.end.clone());
}

/// Derive the waypoint list for already consolidated sections.
///
/// Returns `N + 1` points for `N` sections, and nothing for an empty route.
pub fn derive_route_points(sections: &[Section]) -> Vec<RoutePoint> {
    let (Some(first), Some(last)) = (sections.first(), sections.last()) else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(sections.len() + 1);
    points.push(first.bounds().start.clone());
    points.extend(
        sections
            .windows(2)
            .map(|pair| max_point(&pair[0].bounds().end, &pair[1].bounds().start).clone()),
    );
    points.push(last.bounds().end.clone());
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionTag, TransportDetails};

    fn point(name: &str, priority: i32) -> RoutePoint {
        RoutePoint::new(name, 0xFF000000, priority)
    }

    fn walk(duration: f64, distance: f64, start: RoutePoint, end: RoutePoint) -> Section {
        Section::pedestrian(duration, distance, 0xFF7073EE, PointBound::new(start, end))
    }

    fn ride(tag: SectionTag, duration: f64, start: RoutePoint, end: RoutePoint) -> Section {
        Section::transport(
            SectionInfo {
                tag,
                duration,
                walking_distance: 0.0,
                color: 0xFF33B609,
                bounds: PointBound::new(start, end),
            },
            TransportDetails::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_max_point_prefers_higher_priority() {
        let low = point("low", 1);
        let high = point("high", 2);
        assert_eq!(max_point(&low, &high).name, "high");
        assert_eq!(max_point(&high, &low).name, "high");
    }

    #[test]
    fn test_max_point_tie_keeps_first() {
        let a = point("a", 3);
        let b = point("b", 3);
        assert_eq!(max_point(&a, &b).name, "a");
        assert_eq!(max_point(&b, &a).name, "b");
    }

    #[test]
    fn test_merge_points() {
        let b1 = PointBound::new(point("s1", 0), point("e1", 5));
        let b2 = PointBound::new(point("s2", 1), point("e2", 5));
        let merged = merge_points(&b1, &b2);
        assert_eq!(merged.start.name, "s2");
        assert_eq!(merged.end.name, "e1");
    }

    #[test]
    fn test_empty_route() {
        assert!(consolidate_sections(&[]).is_empty());
        assert!(derive_route_points(&[]).is_empty());
    }

    #[test]
    fn test_walks_merge_before_ride() {
        let sections = vec![
            walk(5.0, 10.0, point("home", 0), point("corner", 1)),
            walk(3.0, 7.0, point("corner", 2), point("stop", 0)),
            ride(SectionTag::Bus, 20.0, point("stop", 1), point("market", 1)),
        ];

        let merged = consolidate_sections(&sections);
        assert_eq!(merged.len(), 2);

        let walk_info = merged[0].info();
        assert_eq!(walk_info.tag, SectionTag::Pedestrian);
        assert_eq!(walk_info.duration, 8.0);
        assert_eq!(walk_info.walking_distance, 17.0);
        assert_eq!(walk_info.color, 0xFF7073EE);
        assert_eq!(walk_info.bounds.start.name, "home");
        assert_eq!(walk_info.bounds.end.name, "stop");

        assert_eq!(merged[1], sections[2]);

        let points = derive_route_points(&merged);
        let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["home", "stop", "market"]);
        assert_eq!(points[1].priority, 1);
    }

    #[test]
    fn test_merge_keeps_first_color() {
        let mut second = walk(1.0, 1.0, point("b", 0), point("c", 0));
        if let Section::Pedestrian(info) = &mut second {
            info.color = 0xFF123456;
        }
        let sections = vec![walk(1.0, 1.0, point("a", 0), point("b", 0)), second];
        let merged = consolidate_sections(&sections);
        assert_eq!(merged[0].info().color, 0xFF7073EE);
    }

    #[test]
    fn test_equal_priority_walks_keep_outer_bounds() {
        let sections = vec![
            walk(1.0, 1.0, point("a", 0), point("b", 0)),
            walk(1.0, 1.0, point("b", 0), point("c", 0)),
            walk(1.0, 1.0, point("c", 0), point("d", 0)),
        ];
        let merged = consolidate_sections(&sections);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].bounds().start.name, "a");
        assert_eq!(merged[0].bounds().end.name, "d");
        assert_eq!(merged[0].info().duration, 3.0);
    }

    #[test]
    fn test_higher_priority_join_is_still_dropped() {
        let sections = vec![
            walk(5.0, 10.0, point("home", 0), point("corner", 4)),
            walk(3.0, 7.0, point("corner", 4), point("stop", 0)),
        ];
        let merged = consolidate_sections(&sections);
        assert_eq!(merged[0].bounds().start.name, "home");
        assert_eq!(merged[0].bounds().end.name, "stop");
    }

    #[test]
    fn test_single_section() {
        let sections = vec![ride(SectionTag::Bus, 20.0, point("a", 1), point("b", 1))];
        let merged = consolidate_sections(&sections);
        assert_eq!(merged.len(), 1);

        let points = derive_route_points(&merged);
        assert_eq!(points, vec![point("a", 1), point("b", 1)]);
    }

    #[test]
    fn test_boundaries_without_merge() {
        let sections = vec![
            ride(SectionTag::Bus, 10.0, point("bus-start", 1), point("bus-end", 2)),
            walk(2.0, 50.0, point("walk-start", 1), point("walk-end", 3)),
            ride(SectionTag::Tramway, 8.0, point("tram-start", 1), point("tram-end", 2)),
        ];

        let merged = consolidate_sections(&sections);
        assert_eq!(merged, sections);

        let points = derive_route_points(&merged);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].name, "bus-start");
        assert_eq!(points[1].name, "bus-end");
        assert_eq!(points[2].name, "walk-end");
        assert_eq!(points[3].name, "tram-end");
    }

    #[test]
    fn test_shared_boundary_tie_keeps_earlier_point() {
        let sections = vec![
            ride(SectionTag::Bus, 10.0, point("a", 1), point("bus-end", 1)),
            ride(SectionTag::Bus, 10.0, point("next-start", 1), point("z", 1)),
        ];
        let points = derive_route_points(&sections);
        assert_eq!(points[1].name, "bus-end");
    }

    #[test]
    fn test_trailing_walk_run() {
        let sections = vec![
            ride(SectionTag::Underground, 15.0, point("a", 3), point("b", 3)),
            walk(1.0, 2.0, point("b", 0), point("c", 0)),
            walk(1.0, 2.0, point("c", 0), point("d", 0)),
        ];
        let merged = consolidate_sections(&sections);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].info().walking_distance, 4.0);
        assert_eq!(merged[1].bounds().end.name, "d");

        let points = derive_route_points(&merged);
        let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_input_untouched() {
        let sections = vec![
            walk(1.0, 1.0, point("a", 0), point("b", 0)),
            walk(1.0, 1.0, point("b", 0), point("c", 0)),
        ];
        let snapshot = sections.clone();
        let _ = consolidate_sections(&sections);
        assert_eq!(sections, snapshot);
    }
}
