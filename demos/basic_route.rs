//! Build a transit route from a routing engine response and print the UI payload.
//!
//! Run with: `cargo run --example basic_route`

use route_sections::{
    build_transit_route, estimate_travel_time, route_to_json_string, RawRoute, RawSection,
    RawStop, RawTransport, RouteConfig, SerializeConfig,
};

fn stops(names: &[&str]) -> Vec<RawStop> {
    names.iter().map(|n| RawStop::new(*n)).collect()
}

fn main() -> route_sections::Result<()> {
    let walk = |duration: f64, names: &[&str]| RawSection {
        transports: None,
        duration,
        walking_distance: duration * 1.3,
        stops: stops(names),
    };

    let underground = RawSection {
        transports: Some(vec![RawTransport {
            line_name: "Sokolnicheskaya".to_string(),
            line_color: Some(0xE42313),
            vehicle_types: vec!["underground".to_string()],
        }]),
        duration: 780.0,
        walking_distance: 0.0,
        stops: stops(&["Universitet", "Vorobyovy Gory", "Sportivnaya", "Frunzenskaya"]),
    };

    let routes = vec![RawRoute {
        sections: vec![
            walk(240.0, &[]),
            walk(60.0, &["Universitet"]),
            underground,
            walk(180.0, &[]),
        ],
        estimation: Some("21 min".to_string()),
    }];

    if let Some(estimation) = estimate_travel_time(&routes) {
        println!("Estimated travel time: {estimation}");
    }

    let route = build_transit_route(Ok(routes), &RouteConfig::default())?;
    println!(
        "{} sections, {} points, {:.0}s total",
        route.sections.len(),
        route.points.len(),
        route.total_duration()
    );
    println!("{}", route_to_json_string(&route, &SerializeConfig::default())?);

    Ok(())
}
