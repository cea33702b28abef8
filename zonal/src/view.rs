use chrono::NaiveDate;

use zonal_core::feature::FeatureCollection;
use zonal_core::model::{ZonesModel, build_model};
use zonal_core::resolve::{RenderSets, at_instant, by_toggles};
use zonal_core::timeline::Timeline;
use zonal_types::{MapPoint, ToggleSet};

use crate::Atlas;

impl Atlas {
    /// Build the hierarchical model the toggle panel binds to.
    #[must_use]
    pub fn model(&self) -> ZonesModel {
        build_model(&self.collection, &self.cfg.coordinates)
    }

    /// Resolve visibility from the panel's checkbox state.
    #[must_use]
    pub fn visible(&self, toggles: &ToggleSet) -> RenderSets {
        by_toggles(&self.collection, toggles, &self.cfg.palette)
    }

    /// Resolve visibility for a single instant: per zone, the revision in
    /// force on that date.
    #[must_use]
    pub fn visible_at(&self, instant: NaiveDate) -> RenderSets {
        at_instant(&self.collection, instant, &self.cfg.palette)
    }

    /// Resolve visibility for a slider position in [0, 100] on the atlas
    /// timeline.
    #[must_use]
    pub fn visible_at_percent(&self, percent: f64) -> RenderSets {
        self.visible_at(self.timeline.instant_at(percent))
    }

    /// The slider timeline, anchored at the configured start date and ending
    /// on the day the atlas was built.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The fly-to viewport for an operator's zone; the default viewport when
    /// the pair is unknown. The actual camera move is the map surface's
    /// business.
    #[must_use]
    pub fn viewpoint(&self, operator: &str, zone: &str) -> MapPoint {
        self.cfg.coordinates.get(operator, zone)
    }

    /// The fetched record collection (empty if the fetch failed).
    #[must_use]
    pub const fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    /// Name of the source the collection was fetched from.
    #[must_use]
    pub const fn source_name(&self) -> &'static str {
        self.source_name
    }
}
