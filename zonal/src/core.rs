use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use zonal_core::feature::FeatureCollection;
use zonal_core::source::ZoneSource;
use zonal_core::timeline::Timeline;
use zonal_types::{AtlasConfig, CoordinateTable, Palette, ZonalError};

/// Orchestrator holding the fetched record collection and the configuration
/// both resolvers read from.
///
/// The collection is fetched exactly once, at build time, and treated as
/// immutable afterwards; so is the slider timeline's end date. Everything an
/// `Atlas` computes is a pure function of that state plus the per-call
/// inputs.
#[derive(Debug)]
pub struct Atlas {
    pub(crate) source_name: &'static str,
    pub(crate) collection: FeatureCollection,
    pub(crate) cfg: AtlasConfig,
    pub(crate) timeline: Timeline,
}

/// Builder for constructing an [`Atlas`] with custom configuration.
pub struct AtlasBuilder {
    source: Option<Arc<dyn ZoneSource>>,
    cfg: AtlasConfig,
}

impl Default for AtlasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AtlasBuilder {
    /// Create a new builder with the default palette, the built-in
    /// coordinate table, and the default timeline anchor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: AtlasConfig::default(),
        }
    }

    /// Register the feature source. Exactly one is required.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ZoneSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration aggregate.
    #[must_use]
    pub fn config(mut self, cfg: AtlasConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the per-operator display palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.cfg.palette = palette;
        self
    }

    /// Replace the coordinate reference table.
    #[must_use]
    pub fn coordinates(mut self, coordinates: CoordinateTable) -> Self {
        self.cfg.coordinates = coordinates;
        self
    }

    /// Move the slider timeline's anchor date.
    #[must_use]
    pub const fn timeline_start(mut self, start: NaiveDate) -> Self {
        self.cfg.timeline_start = start;
        self
    }

    /// Build the `Atlas`, fetching the collection once.
    ///
    /// A fetch failure is not fatal: it logs a warning and the atlas behaves
    /// as if the collection were empty, so the rendering surface shows
    /// nothing rather than crashing.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered via
    /// [`with_source`](Self::with_source).
    pub fn build(self) -> Result<Atlas, ZonalError> {
        let Some(source) = self.source else {
            return Err(ZonalError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            ));
        };

        let collection = match source.fetch() {
            Ok(collection) => collection,
            Err(e) => {
                warn!(source = source.name(), error = %e, "fetch failed; rendering nothing");
                FeatureCollection::empty()
            }
        };

        let timeline = Timeline::through_today(self.cfg.timeline_start);
        Ok(Atlas {
            source_name: source.name(),
            collection,
            cfg: self.cfg,
            timeline,
        })
    }
}

impl Atlas {
    /// Start building a new `Atlas`.
    #[must_use]
    pub fn builder() -> AtlasBuilder {
        AtlasBuilder::new()
    }
}
