//! Static display coordinates for known operator zones.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A map viewport target: center latitude/longitude and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// Center latitude in degrees.
    pub lat: f64,
    /// Center longitude in degrees.
    pub lng: f64,
    /// Tile zoom level.
    pub zoom: u8,
}

impl Default for MapPoint {
    fn default() -> Self {
        Self {
            lat: 0.0,
            lng: 0.0,
            zoom: 8,
        }
    }
}

impl MapPoint {
    /// Construct a viewport target.
    #[must_use]
    pub const fn new(lat: f64, lng: f64, zoom: u8) -> Self {
        Self { lat, lng, zoom }
    }
}

/// Lookup table from operator + zone name to display coordinates.
///
/// Zone keys are stored with spaces normalized to underscores, matching the
/// convention of the shipped reference data; [`CoordinateTable::get`] applies
/// the same normalization to its argument. Unknown pairs resolve to the
/// default viewport `(0, 0, 8)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateTable {
    operators: HashMap<String, HashMap<String, MapPoint>>,
}

impl CoordinateTable {
    /// An empty table where every lookup yields the default viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped reference table covering the known deployments.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.insert("Tesla", "Austin", MapPoint::new(30.26345, -97.7431, 10));
        table.insert(
            "Tesla",
            "San Francisco",
            MapPoint::new(37.60255, -122.1321, 9),
        );
        table.insert("Waymo", "Atlanta", MapPoint::new(33.7490, -84.3880, 10));
        table.insert("Waymo", "Phoenix", MapPoint::new(33.4484, -112.0740, 10));
        table.insert(
            "Waymo",
            "San Francisco",
            MapPoint::new(37.73855, -122.41720, 9),
        );
        table.insert("Waymo", "Austin", MapPoint::new(30.26345, -97.74297, 10));
        table.insert(
            "Waymo",
            "Los Angeles",
            MapPoint::new(34.0522, -118.2437, 10),
        );
        table.insert(
            "Waymo",
            "Silicon Valley",
            MapPoint::new(37.3875, -122.0575, 10),
        );
        table.insert("Zoox", "Las Vegas", MapPoint::new(36.1238, -115.1806, 10));
        table
    }

    /// Insert or replace the viewport for an operator/zone pair.
    pub fn insert(&mut self, operator: &str, zone: &str, point: MapPoint) {
        self.operators
            .entry(operator.to_string())
            .or_default()
            .insert(Self::zone_key(zone), point);
    }

    /// Resolve the viewport for an operator/zone pair, defaulting when absent.
    #[must_use]
    pub fn get(&self, operator: &str, zone: &str) -> MapPoint {
        self.operators
            .get(operator)
            .and_then(|zones| zones.get(&Self::zone_key(zone)))
            .copied()
            .unwrap_or_default()
    }

    fn zone_key(zone: &str) -> String {
        zone.replace(' ', "_")
    }
}
