//! Offline ingestion: the flat collection becomes the operator → zone →
//! history hierarchy consumed by the toggle panel.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zonal_types::CoordinateTable;

use crate::feature::FeatureCollection;
use crate::record::{RecordDetails, RecordTag};

/// Root of the hierarchical model artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZonesModel {
    /// Operators in alphabetical order.
    pub companies: Vec<Company>,
}

/// One operator and its zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Operator name as it appears in composite record names.
    pub name: String,
    /// Zones in alphabetical order.
    pub zones: Vec<ZoneEntry>,
}

/// One zone: display coordinates plus its revision history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneEntry {
    /// Zone name as it appears in composite record names.
    pub name: String,
    /// Center latitude for the fly-to viewport.
    pub lat: f64,
    /// Center longitude for the fly-to viewport.
    pub lng: f64,
    /// Zoom level for the fly-to viewport.
    pub zoom: u8,
    /// Boundary revisions, newest first.
    pub history: Vec<Revision>,
}

/// One dated snapshot of a zone's boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Human-readable label, `"<Zone> <Month> <Day>, <Year>"`.
    pub name: String,
    /// Identifier of the source feature record.
    pub id: String,
    /// Effective date; serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Operational status extracted from the record's description.
    pub status: String,
    /// Revision type extracted from the record's description.
    #[serde(rename = "type")]
    pub kind: String,
    /// Area figure extracted from the record's description.
    pub area: String,
}

/// Build the hierarchical model from a flat feature collection.
///
/// Records whose name does not split into operator/zone/date, or whose date
/// segment does not parse, are skipped. Operators and zones sort
/// alphabetically; each zone's history sorts by effective date descending,
/// with same-date revisions keeping their order of first appearance. Zones
/// absent from `coords` get the default viewport.
///
/// The output is deterministic for a given input and the function has no
/// state: rebuilding on every input change is safe.
#[must_use]
pub fn build_model(collection: &FeatureCollection, coords: &CoordinateTable) -> ZonesModel {
    let mut grouped: BTreeMap<String, BTreeMap<String, Vec<Revision>>> = BTreeMap::new();

    for feature in &collection.features {
        let Some(name) = feature.properties.name.as_deref() else {
            debug!(id = %feature.id, "skipping feature without a name");
            continue;
        };
        let Some(tag) = RecordTag::parse(name) else {
            debug!(id = %feature.id, name, "skipping feature with unsupported name");
            continue;
        };
        let Some(effective) = tag.effective else {
            debug!(id = %feature.id, name, "skipping feature with unparseable date");
            continue;
        };

        let details = feature
            .properties
            .description
            .as_deref()
            .map(RecordDetails::parse)
            .unwrap_or_default();

        let revision = Revision {
            name: revision_label(&tag.zone, effective),
            id: feature.id.clone(),
            date: effective,
            status: details.status,
            kind: details.kind,
            area: details.area,
        };

        grouped
            .entry(tag.operator)
            .or_default()
            .entry(tag.zone)
            .or_default()
            .push(revision);
    }

    let companies = grouped
        .into_iter()
        .map(|(operator, zones)| {
            let zones = zones
                .into_iter()
                .map(|(zone, mut history)| {
                    history.sort_by(|a, b| b.date.cmp(&a.date));
                    let point = coords.get(&operator, &zone);
                    ZoneEntry {
                        name: zone,
                        lat: point.lat,
                        lng: point.lng,
                        zoom: point.zoom,
                        history,
                    }
                })
                .collect();
            Company {
                name: operator,
                zones,
            }
        })
        .collect();

    ZonesModel { companies }
}

/// Display label of a revision: `"<Zone> <Month> <Day>, <Year>"`.
#[must_use]
pub fn revision_label(zone: &str, date: NaiveDate) -> String {
    format!("{zone} {}", date.format("%B %-d, %Y"))
}
