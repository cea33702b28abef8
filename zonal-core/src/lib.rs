//! zonal-core
//!
//! Engine shared across the zonal ecosystem: feature records, the validating
//! composite-name parser, the ingestion builder, and the visibility resolvers.
//!
//! - `feature`: the external GeoJSON feature collection (geometry opaque).
//! - `record`: the single boundary parse of composite names and metadata.
//! - `source`: the `ZoneSource` trait and a file-backed implementation.
//! - `model`: the offline builder producing the operator → zone → history
//!   hierarchy consumed by the toggle panel.
//! - `resolve`: the online resolvers deciding which records to render, by
//!   toggle state or by a selected instant.
//! - `timeline`: the slider-position → date mapping.
//!
//! Both the builder and the resolvers are synchronous, side-effect-free
//! transformations: recomputing on every input change is safe and cheap
//! (linear in record count). Malformed individual records are skipped, never
//! fatal; only boundary failures (an unreadable or misshapen source
//! collection) surface as [`ZonalError`].
#![warn(missing_docs)]

pub mod feature;
pub mod model;
pub mod record;
pub mod resolve;
pub mod source;
pub mod timeline;

pub use feature::{Feature, FeatureCollection, FeatureProperties};
pub use model::{Company, Revision, ZoneEntry, ZonesModel, build_model};
pub use record::{RecordDetails, RecordTag};
pub use resolve::{RenderGroup, RenderSets, at_instant, by_toggles};
pub use source::{GeoJsonFile, ZoneSource};
pub use timeline::Timeline;

pub use zonal_types::{
    AtlasConfig, Color, CoordinateTable, MapPoint, Palette, ToggleSet, VisibilityRule, ZonalError,
};
