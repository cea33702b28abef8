use tracing::debug;
use zonal_types::{Palette, ToggleSet};

use crate::feature::FeatureCollection;
use crate::record::RecordTag;
use crate::resolve::{RenderGroup, RenderSets};

/// Resolve visibility from the panel's checkbox state.
///
/// For each record the toggle set is consulted at three granularities with
/// the most specific set rule winning: the raw record id, then
/// `zone-<Operator>-<Zone>`, then `company-<Operator>`. A level with no
/// recorded toggle defers to the next; a record with no toggle at any level
/// is hidden. Records whose name does not split into three parts are dropped
/// (a record with an unparseable date segment is still eligible here; only
/// temporal resolution needs the date).
#[must_use]
pub fn by_toggles(
    collection: &FeatureCollection,
    toggles: &ToggleSet,
    palette: &Palette,
) -> RenderSets {
    let mut out = RenderSets::new();

    for feature in &collection.features {
        let Some(name) = feature.properties.name.as_deref() else {
            continue;
        };
        let Some(tag) = RecordTag::parse(name) else {
            debug!(id = %feature.id, name, "skipping feature with unsupported name");
            continue;
        };

        let rule = toggles.resolve(&feature.id, &tag.operator, &tag.zone);
        if !rule.is_visible() {
            continue;
        }

        let color = palette.color_for(&tag.operator).clone();
        out.entry(tag.operator)
            .or_insert_with(|| RenderGroup::new(color))
            .features
            .push(feature.clone());
    }

    out
}
