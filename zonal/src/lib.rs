//! Zonal resolves which service-area boundary polygons to render.
//!
//! Overview
//! - Fetches a flat GeoJSON collection of dated zone records once, through a
//!   pluggable [`ZoneSource`].
//! - Builds the operator → zone → revision-history model the toggle panel
//!   binds to.
//! - Resolves visibility either from the panel's checkbox state (record >
//!   zone > operator precedence) or from a single instant on the slider
//!   timeline (the one revision in force per zone).
//! - Degrades instead of failing: malformed records are skipped, a failed
//!   fetch renders nothing, unknown zones get default viewports and colors.
//!
//! Resolution is recomputed in full on every input change; both resolvers
//! are pure and linear in the record count, so there is no cached state to
//! invalidate.
//!
//! Examples
//! Building an atlas and resolving both modes:
//! ```rust,ignore
//! use std::sync::Arc;
//! use zonal::{Atlas, ToggleSet};
//! use zonal_core::GeoJsonFile;
//!
//! let atlas = Atlas::builder()
//!     .with_source(Arc::new(GeoJsonFile::new("zones.geojson")))
//!     .build()?;
//!
//! // Serialize the hierarchy for the panel.
//! let model = atlas.model();
//!
//! // Toggle mode: show everything Waymo except one zone.
//! let mut toggles = ToggleSet::new();
//! toggles.set_operator("Waymo", true);
//! toggles.set_zone("Waymo", "Phoenix", false);
//! let render = atlas.visible(&toggles);
//!
//! // Temporal mode: scrub the slider to 75%.
//! let render = atlas.visible_at_percent(75.0);
//!
//! for (operator, group) in &render {
//!     // hand group.to_collection() and group.color to the map surface
//! }
//! ```
//!
//! See `zonal-cli` for the offline ingestion tool producing the panel
//! artifact.
#![warn(missing_docs)]

pub(crate) mod core;
mod view;

pub use crate::core::{Atlas, AtlasBuilder};
pub use zonal_core::{
    Feature, FeatureCollection, GeoJsonFile, RenderGroup, RenderSets, Timeline, ZoneSource,
    ZonesModel,
};
pub use zonal_types::{
    AtlasConfig, Color, CoordinateTable, MapPoint, Palette, ToggleSet, VisibilityRule, ZonalError,
};
