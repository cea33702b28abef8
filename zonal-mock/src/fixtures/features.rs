use serde_json::json;
use zonal_core::feature::{Feature, FeatureCollection};

/// The default fixture collection: three operators, four zones, and a pair
/// of records that exercise the skip paths.
#[must_use]
pub fn service_areas() -> FeatureCollection {
    build(vec![
        (
            "w-phx-1",
            "Waymo - Phoenix - 07/01/2023",
            Some("Status: Active<br>Type: Service<br>Area: 460 km²"),
        ),
        (
            "w-phx-2",
            "Waymo - Phoenix - 01/06/2023",
            Some("Status: Active<br>Type: Expansion<br>Area: 580 km²"),
        ),
        (
            "w-sf-1",
            "Waymo - San Francisco - 12/09/2023",
            Some("Status: Active<br>Type: Service<br>Area: 120 km²"),
        ),
        ("t-atx-1", "Tesla - Austin - 15/03/2024", None),
        (
            "z-lv-1",
            "Zoox - Las Vegas - 20/06/2024",
            Some("Status: Pilot<br>Type: Service<br>Area: 30 km²"),
        ),
        // Skip-path records: a two-segment name and an impossible date.
        ("bad-name", "OnlyTwoParts - Zone", None),
        ("bad-date", "Waymo - Austin - 31/02/2023", None),
    ])
}

fn build(rows: Vec<(&str, &str, Option<&str>)>) -> FeatureCollection {
    let features = rows
        .into_iter()
        .map(|(id, name, description)| {
            let mut feature = Feature::named(id, name).with_geometry(json!({
                "type": "Polygon",
                "coordinates": [[
                    [-112.3, 33.2],
                    [-111.8, 33.2],
                    [-111.8, 33.7],
                    [-112.3, 33.7],
                    [-112.3, 33.2],
                ]],
            }));
            if let Some(description) = description {
                feature = feature.with_description(description);
            }
            feature
        })
        .collect();
    FeatureCollection::new(features)
}
