use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;
use zonal_types::Palette;

use crate::feature::{Feature, FeatureCollection};
use crate::record::RecordTag;
use crate::resolve::{RenderGroup, RenderSets};

/// Resolve visibility for a single instant: per zone, the revision in force
/// on that date.
///
/// A revision is in force from its effective date (inclusive) until the
/// effective date of the next revision (exclusive); the most recent revision
/// stays in force indefinitely. A zone whose earliest revision postdates
/// `instant` renders nothing. Records without a parseable effective date are
/// excluded; unordered revisions cannot participate in interval selection.
///
/// When several revisions in a zone share an effective date, the one
/// appearing last in the source collection wins: candidates are sorted with
/// a stable sort, so an equal-date run keeps source order, and the half-open
/// window rule skips every member of the run except its last.
#[must_use]
pub fn at_instant(
    collection: &FeatureCollection,
    instant: NaiveDate,
    palette: &Palette,
) -> RenderSets {
    let mut zones: BTreeMap<(String, String), Vec<(NaiveDate, &Feature)>> = BTreeMap::new();

    for feature in &collection.features {
        let Some(name) = feature.properties.name.as_deref() else {
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
        zones
            .entry((tag.operator, tag.zone))
            .or_default()
            .push((effective, feature));
    }

    let mut out = RenderSets::new();
    for ((operator, _zone), mut revisions) in zones {
        revisions.sort_by_key(|(date, _)| *date);
        if let Some(feature) = select_active(&revisions, instant) {
            let color = palette.color_for(&operator).clone();
            out.entry(operator)
                .or_insert_with(|| RenderGroup::new(color))
                .features
                .push(feature.clone());
        }
    }

    out
}

/// Walk an ascending revision list and pick the one in force on `instant`.
///
/// Position `i` is selected iff it is the last entry and `instant >= date[i]`,
/// or `date[i] <= instant < date[i + 1]`. At most one entry matches.
fn select_active<'f>(
    revisions: &[(NaiveDate, &'f Feature)],
    instant: NaiveDate,
) -> Option<&'f Feature> {
    for (i, &(date, feature)) in revisions.iter().enumerate() {
        if instant < date {
            continue;
        }
        let in_force = match revisions.get(i + 1) {
            Some((next, _)) => instant < *next,
            None => true,
        };
        if in_force {
            return Some(feature);
        }
    }
    None
}
